use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::rating::application::ports::incoming::use_cases::{
    DeleteRatingError, DeleteRatingUseCase,
};
use crate::rating::application::ports::outgoing::rating_repository::{
    RatingRepository, RatingRepositoryError,
};

pub struct DeleteRatingService<R>
where
    R: RatingRepository,
{
    repository: R,
}

impl<R> DeleteRatingService<R>
where
    R: RatingRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteRatingUseCase for DeleteRatingService<R>
where
    R: RatingRepository + Send + Sync,
{
    async fn execute(&self, recipe_id: Uuid, rater: UserId) -> Result<(), DeleteRatingError> {
        self.repository
            .soft_delete_by_pair(recipe_id, rater)
            .await
            .map_err(|e| match e {
                RatingRepositoryError::RatingNotFound => DeleteRatingError::RatingNotFound,
                other => DeleteRatingError::RepositoryError(other.to_string()),
            })
    }
}
