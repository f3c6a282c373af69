pub mod add_favorite;
pub mod create_recipe;
pub mod delete_recipe;
pub mod get_favorites;
pub mod get_recipes;
pub mod get_single_recipe;
pub mod recipe_form;
pub mod remove_favorite;
pub mod sync_catalog;
pub mod update_recipe;

pub use add_favorite::{AddFavoriteError, AddFavoriteUseCase};
pub use create_recipe::{CreateRecipeError, CreateRecipeUseCase};
pub use delete_recipe::{DeleteRecipeError, DeleteRecipeUseCase};
pub use get_favorites::{GetFavoritesError, GetFavoritesUseCase};
pub use get_recipes::{GetRecipesError, GetRecipesUseCase};
pub use get_single_recipe::{GetSingleRecipeError, GetSingleRecipeUseCase};
pub use recipe_form::{RecipeForm, RecipeFormError};
pub use remove_favorite::{RemoveFavoriteError, RemoveFavoriteUseCase};
pub use sync_catalog::{SyncCatalogError, SyncCatalogUseCase, SyncReport};
pub use update_recipe::{UpdateRecipeError, UpdateRecipeUseCase};
