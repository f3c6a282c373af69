use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteRatingError {
    #[error("Rating not found")]
    RatingNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteRatingUseCase: Send + Sync {
    async fn execute(&self, recipe_id: Uuid, rater: UserId) -> Result<(), DeleteRatingError>;
}
