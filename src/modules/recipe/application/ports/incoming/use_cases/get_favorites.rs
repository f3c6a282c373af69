use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::ports::outgoing::recipe_query::{PageResult, RecipeView};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetFavoritesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Paginated listing of the caller's favorited recipes; same pagination
/// normalization as the general listing.
#[async_trait]
pub trait GetFavoritesUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        page: u32,
        per_page: u32,
    ) -> Result<PageResult<RecipeView>, GetFavoritesError>;
}
