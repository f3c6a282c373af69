use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::ports::outgoing::recipe_query::{
    PageResult, RecipeListFilter, RecipeView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetRecipesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Paginated recipe listing. Takes raw pagination input; implementations
/// normalize it (page < 1 → 1, size clamped to [1,100], 0 → 10).
#[async_trait]
pub trait GetRecipesUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: RecipeListFilter,
        page: u32,
        per_page: u32,
        viewer: Option<UserId>,
    ) -> Result<PageResult<RecipeView>, GetRecipesError>;
}
