pub mod add_favorite;
pub mod create_recipe;
pub mod delete_recipe;
pub mod get_favorites;
pub mod get_recipes;
pub mod get_single_recipe;
pub mod remove_favorite;
pub mod sync_catalog;
pub mod update_recipe;
