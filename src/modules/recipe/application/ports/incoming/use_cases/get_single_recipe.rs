use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::ports::outgoing::recipe_query::RecipeView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleRecipeError {
    #[error("Recipe not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSingleRecipeUseCase: Send + Sync {
    async fn execute(
        &self,
        recipe_id: Uuid,
        viewer: Option<UserId>,
    ) -> Result<RecipeView, GetSingleRecipeError>;
}
