use actix_web::web;
use std::sync::Arc;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::use_cases::login_user::LoginUserUseCase;
use crate::auth::application::use_cases::register_user::RegisterUserUseCase;
use crate::rating::application::ports::incoming::use_cases::{
    DeleteRatingUseCase, GetOwnRatingUseCase, GetRecipeRatingsUseCase, RateRecipeUseCase,
};
use crate::rating::application::rating_use_cases::RatingUseCases;
use crate::recipe::application::ports::incoming::use_cases::{
    AddFavoriteUseCase, CreateRecipeUseCase, DeleteRecipeUseCase, GetFavoritesUseCase,
    GetRecipesUseCase, GetSingleRecipeUseCase, RemoveFavoriteUseCase, SyncCatalogUseCase,
    UpdateRecipeUseCase,
};
use crate::recipe::application::recipe_use_cases::RecipeUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an AppState where every use case is a panicking stub unless a
/// test swaps in its own double.
pub struct TestAppStateBuilder {
    register_user: Arc<dyn RegisterUserUseCase + Send + Sync>,
    login_user: Arc<dyn LoginUserUseCase + Send + Sync>,
    get_recipes: Arc<dyn GetRecipesUseCase + Send + Sync>,
    get_single_recipe: Arc<dyn GetSingleRecipeUseCase + Send + Sync>,
    create_recipe: Arc<dyn CreateRecipeUseCase + Send + Sync>,
    update_recipe: Arc<dyn UpdateRecipeUseCase + Send + Sync>,
    delete_recipe: Arc<dyn DeleteRecipeUseCase + Send + Sync>,
    get_favorites: Arc<dyn GetFavoritesUseCase + Send + Sync>,
    add_favorite: Arc<dyn AddFavoriteUseCase + Send + Sync>,
    remove_favorite: Arc<dyn RemoveFavoriteUseCase + Send + Sync>,
    sync_catalog: Arc<dyn SyncCatalogUseCase + Send + Sync>,
    rate_recipe: Arc<dyn RateRecipeUseCase + Send + Sync>,
    get_recipe_ratings: Arc<dyn GetRecipeRatingsUseCase + Send + Sync>,
    get_own_rating: Arc<dyn GetOwnRatingUseCase + Send + Sync>,
    delete_rating: Arc<dyn DeleteRatingUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(StubRegisterUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            get_recipes: Arc::new(StubGetRecipesUseCase),
            get_single_recipe: Arc::new(StubGetSingleRecipeUseCase),
            create_recipe: Arc::new(StubCreateRecipeUseCase),
            update_recipe: Arc::new(StubUpdateRecipeUseCase),
            delete_recipe: Arc::new(StubDeleteRecipeUseCase),
            get_favorites: Arc::new(StubGetFavoritesUseCase),
            add_favorite: Arc::new(StubAddFavoriteUseCase),
            remove_favorite: Arc::new(StubRemoveFavoriteUseCase),
            sync_catalog: Arc::new(StubSyncCatalogUseCase),
            rate_recipe: Arc::new(StubRateRecipeUseCase),
            get_recipe_ratings: Arc::new(StubGetRecipeRatingsUseCase),
            get_own_rating: Arc::new(StubGetOwnRatingUseCase),
            delete_rating: Arc::new(StubDeleteRatingUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(mut self, uc: impl RegisterUserUseCase + 'static) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl LoginUserUseCase + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_get_recipes(mut self, uc: impl GetRecipesUseCase + 'static) -> Self {
        self.get_recipes = Arc::new(uc);
        self
    }

    pub fn with_get_single_recipe(mut self, uc: impl GetSingleRecipeUseCase + 'static) -> Self {
        self.get_single_recipe = Arc::new(uc);
        self
    }

    pub fn with_create_recipe(mut self, uc: impl CreateRecipeUseCase + 'static) -> Self {
        self.create_recipe = Arc::new(uc);
        self
    }

    pub fn with_update_recipe(mut self, uc: impl UpdateRecipeUseCase + 'static) -> Self {
        self.update_recipe = Arc::new(uc);
        self
    }

    pub fn with_delete_recipe(mut self, uc: impl DeleteRecipeUseCase + 'static) -> Self {
        self.delete_recipe = Arc::new(uc);
        self
    }

    pub fn with_get_favorites(mut self, uc: impl GetFavoritesUseCase + 'static) -> Self {
        self.get_favorites = Arc::new(uc);
        self
    }

    pub fn with_add_favorite(mut self, uc: impl AddFavoriteUseCase + 'static) -> Self {
        self.add_favorite = Arc::new(uc);
        self
    }

    pub fn with_remove_favorite(mut self, uc: impl RemoveFavoriteUseCase + 'static) -> Self {
        self.remove_favorite = Arc::new(uc);
        self
    }

    pub fn with_sync_catalog(mut self, uc: impl SyncCatalogUseCase + 'static) -> Self {
        self.sync_catalog = Arc::new(uc);
        self
    }

    pub fn with_rate_recipe(mut self, uc: impl RateRecipeUseCase + 'static) -> Self {
        self.rate_recipe = Arc::new(uc);
        self
    }

    pub fn with_get_recipe_ratings(mut self, uc: impl GetRecipeRatingsUseCase + 'static) -> Self {
        self.get_recipe_ratings = Arc::new(uc);
        self
    }

    pub fn with_get_own_rating(mut self, uc: impl GetOwnRatingUseCase + 'static) -> Self {
        self.get_own_rating = Arc::new(uc);
        self
    }

    pub fn with_delete_rating(mut self, uc: impl DeleteRatingUseCase + 'static) -> Self {
        self.delete_rating = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: AuthUseCases {
                register: self.register_user,
                login: self.login_user,
            },
            recipes: RecipeUseCases {
                get_list: self.get_recipes,
                get_single: self.get_single_recipe,
                create: self.create_recipe,
                update: self.update_recipe,
                delete: self.delete_recipe,
                get_favorites: self.get_favorites,
                add_favorite: self.add_favorite,
                remove_favorite: self.remove_favorite,
                sync_catalog: self.sync_catalog,
            },
            ratings: RatingUseCases {
                rate: self.rate_recipe,
                get_for_recipe: self.get_recipe_ratings,
                get_own: self.get_own_rating,
                delete: self.delete_rating,
            },
        })
    }
}
