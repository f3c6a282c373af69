use std::sync::Arc;

use crate::recipe::application::ports::incoming::use_cases::{
    AddFavoriteUseCase, CreateRecipeUseCase, DeleteRecipeUseCase, GetFavoritesUseCase,
    GetRecipesUseCase, GetSingleRecipeUseCase, RemoveFavoriteUseCase, SyncCatalogUseCase,
    UpdateRecipeUseCase,
};

#[derive(Clone)]
pub struct RecipeUseCases {
    pub get_list: Arc<dyn GetRecipesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleRecipeUseCase + Send + Sync>,
    pub create: Arc<dyn CreateRecipeUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateRecipeUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteRecipeUseCase + Send + Sync>,
    pub get_favorites: Arc<dyn GetFavoritesUseCase + Send + Sync>,
    pub add_favorite: Arc<dyn AddFavoriteUseCase + Send + Sync>,
    pub remove_favorite: Arc<dyn RemoveFavoriteUseCase + Send + Sync>,
    pub sync_catalog: Arc<dyn SyncCatalogUseCase + Send + Sync>,
}
