pub mod external_catalog;
pub mod favorite_repository;
pub mod recipe_query;
pub mod recipe_repository;

pub use external_catalog::{ExternalCatalog, ExternalRecipe};
pub use favorite_repository::{FavoriteRepository, FavoriteRepositoryError};
pub use recipe_query::{
    PageRequest, PageResult, RecipeListFilter, RecipeQuery, RecipeQueryError, RecipeView,
};
pub use recipe_repository::{
    CreateRecipeData, RecipeRecord, RecipeRepository, RecipeRepositoryError, UpdateRecipeData,
};
