use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::token_provider::{
    IssuedToken, TokenClaims, TokenError, TokenProvider,
};
use crate::auth::application::use_cases::login_user::{
    LoginError, LoginRequest, LoginUserResponse, LoginUserUseCase,
};
use crate::auth::application::use_cases::register_user::{
    RegisterError, RegisterRequest, RegisterUserResponse, RegisterUserUseCase,
};
use crate::rating::application::ports::incoming::use_cases::{
    DeleteRatingError, DeleteRatingUseCase, GetOwnRatingError, GetOwnRatingUseCase,
    GetRecipeRatingsError, GetRecipeRatingsUseCase, RateRecipeCommand, RateRecipeError,
    RateRecipeUseCase,
};
use crate::rating::application::ports::outgoing::rating_query::RatingView;
use crate::recipe::application::ports::incoming::use_cases::{
    AddFavoriteError, AddFavoriteUseCase, CreateRecipeError, CreateRecipeUseCase,
    DeleteRecipeError, DeleteRecipeUseCase, GetFavoritesError, GetFavoritesUseCase,
    GetRecipesError, GetRecipesUseCase, GetSingleRecipeError, GetSingleRecipeUseCase, RecipeForm,
    RemoveFavoriteError, RemoveFavoriteUseCase, SyncCatalogError, SyncCatalogUseCase, SyncReport,
    UpdateRecipeError, UpdateRecipeUseCase,
};
use crate::recipe::application::ports::outgoing::recipe_query::{
    PageResult, RecipeListFilter, RecipeView,
};
use crate::recipe::application::ports::outgoing::recipe_repository::RecipeRecord;

// ============================================================
// TokenProvider stub shared by route tests
// ============================================================

#[derive(Clone)]
pub struct StubTokenProvider {
    user_id: Uuid,
    accept: bool,
}

impl StubTokenProvider {
    /// Every bearer token resolves to the given user.
    pub fn accepting_arc(user_id: Uuid) -> Arc<dyn TokenProvider + Send + Sync> {
        Arc::new(Self {
            user_id,
            accept: true,
        })
    }

    /// Every bearer token is rejected.
    pub fn denying_arc() -> Arc<dyn TokenProvider + Send + Sync> {
        Arc::new(Self {
            user_id: Uuid::nil(),
            accept: false,
        })
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_token(&self, _user_id: Uuid) -> Result<IssuedToken, TokenError> {
        unimplemented!("Not used in route tests")
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        if self.accept {
            Ok(TokenClaims {
                sub: self.user_id,
                exp: 9_999_999_999,
                iat: 0,
                nbf: 0,
                iss: "test".to_string(),
                aud: "test".to_string(),
            })
        } else {
            Err(TokenError::InvalidSignature)
        }
    }
}

// ============================================================
// Default use-case stubs (every handler not under test)
// ============================================================

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl RegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _request: RegisterRequest,
    ) -> Result<RegisterUserResponse, RegisterError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetRecipesUseCase;

#[async_trait]
impl GetRecipesUseCase for StubGetRecipesUseCase {
    async fn execute(
        &self,
        _filter: RecipeListFilter,
        _page: u32,
        _per_page: u32,
        _viewer: Option<UserId>,
    ) -> Result<PageResult<RecipeView>, GetRecipesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetSingleRecipeUseCase;

#[async_trait]
impl GetSingleRecipeUseCase for StubGetSingleRecipeUseCase {
    async fn execute(
        &self,
        _recipe_id: Uuid,
        _viewer: Option<UserId>,
    ) -> Result<RecipeView, GetSingleRecipeError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateRecipeUseCase;

#[async_trait]
impl CreateRecipeUseCase for StubCreateRecipeUseCase {
    async fn execute(
        &self,
        _form: RecipeForm,
        _owner: UserId,
    ) -> Result<RecipeRecord, CreateRecipeError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateRecipeUseCase;

#[async_trait]
impl UpdateRecipeUseCase for StubUpdateRecipeUseCase {
    async fn execute(
        &self,
        _recipe_id: Uuid,
        _form: RecipeForm,
        _caller: UserId,
    ) -> Result<RecipeRecord, UpdateRecipeError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteRecipeUseCase;

#[async_trait]
impl DeleteRecipeUseCase for StubDeleteRecipeUseCase {
    async fn execute(&self, _recipe_id: Uuid, _caller: UserId) -> Result<(), DeleteRecipeError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetFavoritesUseCase;

#[async_trait]
impl GetFavoritesUseCase for StubGetFavoritesUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _page: u32,
        _per_page: u32,
    ) -> Result<PageResult<RecipeView>, GetFavoritesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubAddFavoriteUseCase;

#[async_trait]
impl AddFavoriteUseCase for StubAddFavoriteUseCase {
    async fn execute(&self, _recipe_id: Uuid, _owner: UserId) -> Result<(), AddFavoriteError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRemoveFavoriteUseCase;

#[async_trait]
impl RemoveFavoriteUseCase for StubRemoveFavoriteUseCase {
    async fn execute(&self, _recipe_id: Uuid, _owner: UserId) -> Result<(), RemoveFavoriteError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSyncCatalogUseCase;

#[async_trait]
impl SyncCatalogUseCase for StubSyncCatalogUseCase {
    async fn execute(&self) -> Result<SyncReport, SyncCatalogError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRateRecipeUseCase;

#[async_trait]
impl RateRecipeUseCase for StubRateRecipeUseCase {
    async fn execute(
        &self,
        _command: RateRecipeCommand,
        _rater: UserId,
    ) -> Result<RatingView, RateRecipeError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetRecipeRatingsUseCase;

#[async_trait]
impl GetRecipeRatingsUseCase for StubGetRecipeRatingsUseCase {
    async fn execute(&self, _recipe_id: Uuid) -> Result<Vec<RatingView>, GetRecipeRatingsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetOwnRatingUseCase;

#[async_trait]
impl GetOwnRatingUseCase for StubGetOwnRatingUseCase {
    async fn execute(
        &self,
        _recipe_id: Uuid,
        _rater: UserId,
    ) -> Result<Option<RatingView>, GetOwnRatingError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteRatingUseCase;

#[async_trait]
impl DeleteRatingUseCase for StubDeleteRatingUseCase {
    async fn execute(&self, _recipe_id: Uuid, _rater: UserId) -> Result<(), DeleteRatingError> {
        unimplemented!("Not used in this test")
    }
}
