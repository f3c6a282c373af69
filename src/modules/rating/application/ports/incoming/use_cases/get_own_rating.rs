use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::rating::application::ports::outgoing::rating_query::RatingView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetOwnRatingError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// The caller's own rating for a recipe. Absence is a plain `None`, not an
/// error.
#[async_trait]
pub trait GetOwnRatingUseCase: Send + Sync {
    async fn execute(
        &self,
        recipe_id: Uuid,
        rater: UserId,
    ) -> Result<Option<RatingView>, GetOwnRatingError>;
}
