pub mod delete_rating_service;
pub mod get_own_rating_service;
pub mod get_recipe_ratings_service;
pub mod rate_recipe_service;
