pub mod add_favorite_service;
pub mod create_recipe_service;
pub mod delete_recipe_service;
pub mod get_favorites_service;
pub mod get_recipes_service;
pub mod get_single_recipe_service;
pub mod remove_favorite_service;
pub mod sync_catalog_service;
pub mod update_recipe_service;
