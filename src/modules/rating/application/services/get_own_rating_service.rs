use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::rating::application::ports::incoming::use_cases::{
    GetOwnRatingError, GetOwnRatingUseCase,
};
use crate::rating::application::ports::outgoing::rating_query::{RatingQuery, RatingView};

pub struct GetOwnRatingService<Q>
where
    Q: RatingQuery,
{
    query: Q,
}

impl<Q> GetOwnRatingService<Q>
where
    Q: RatingQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetOwnRatingUseCase for GetOwnRatingService<Q>
where
    Q: RatingQuery + Send + Sync,
{
    async fn execute(
        &self,
        recipe_id: Uuid,
        rater: UserId,
    ) -> Result<Option<RatingView>, GetOwnRatingError> {
        self.query
            .find_by_user_and_recipe(recipe_id, rater)
            .await
            .map_err(|e| GetOwnRatingError::QueryFailed(e.to_string()))
    }
}
