use async_trait::async_trait;
use uuid::Uuid;

use crate::rating::application::ports::outgoing::rating_query::RatingView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetRecipeRatingsError {
    #[error("Recipe not found")]
    RecipeNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetRecipeRatingsUseCase: Send + Sync {
    async fn execute(&self, recipe_id: Uuid) -> Result<Vec<RatingView>, GetRecipeRatingsError>;
}
