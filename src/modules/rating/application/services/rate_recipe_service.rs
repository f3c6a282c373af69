use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::rating::application::ports::incoming::use_cases::{
    RateRecipeCommand, RateRecipeError, RateRecipeUseCase,
};
use crate::rating::application::ports::outgoing::rating_query::{RatingQuery, RatingView};
use crate::rating::application::ports::outgoing::rating_repository::{
    RatingRepository, UpsertRatingData,
};
use crate::rating::application::ports::outgoing::recipe_lookup::RecipeLookup;

pub struct RateRecipeService<L, R, Q>
where
    L: RecipeLookup,
    R: RatingRepository,
    Q: RatingQuery,
{
    recipes: L,
    repository: R,
    query: Q,
}

impl<L, R, Q> RateRecipeService<L, R, Q>
where
    L: RecipeLookup,
    R: RatingRepository,
    Q: RatingQuery,
{
    pub fn new(recipes: L, repository: R, query: Q) -> Self {
        Self {
            recipes,
            repository,
            query,
        }
    }
}

#[async_trait]
impl<L, R, Q> RateRecipeUseCase for RateRecipeService<L, R, Q>
where
    L: RecipeLookup + Send + Sync,
    R: RatingRepository + Send + Sync,
    Q: RatingQuery + Send + Sync,
{
    async fn execute(
        &self,
        command: RateRecipeCommand,
        rater: UserId,
    ) -> Result<RatingView, RateRecipeError> {
        let recipe_exists = self
            .recipes
            .recipe_exists(command.recipe_id())
            .await
            .map_err(|e| RateRecipeError::QueryFailed(e.to_string()))?;

        if !recipe_exists {
            return Err(RateRecipeError::RecipeNotFound);
        }

        let record = self
            .repository
            .upsert_rating(UpsertRatingData {
                recipe_id: command.recipe_id(),
                user_id: rater,
                score: command.score(),
                comment: command.comment().cloned(),
            })
            .await
            .map_err(|e| RateRecipeError::RepositoryError(e.to_string()))?;

        // Re-read through the query side to pick up the rater's name
        self.query
            .find_view_by_id(record.id)
            .await
            .map_err(|e| RateRecipeError::QueryFailed(e.to_string()))?
            .ok_or_else(|| {
                RateRecipeError::QueryFailed("rating disappeared after upsert".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;
    use uuid::Uuid;

    use crate::rating::application::ports::outgoing::rating_query::RatingQueryError;
    use crate::rating::application::ports::outgoing::rating_repository::{
        RatingRecord, RatingRepositoryError,
    };
    use crate::rating::application::ports::outgoing::recipe_lookup::RecipeLookupError;

    struct StubLookup {
        exists: bool,
    }

    #[async_trait]
    impl RecipeLookup for StubLookup {
        async fn recipe_exists(&self, _recipe_id: Uuid) -> Result<bool, RecipeLookupError> {
            Ok(self.exists)
        }
    }

    struct CapturingRepo {
        captured: Mutex<Option<UpsertRatingData>>,
        rating_id: Uuid,
    }

    #[async_trait]
    impl RatingRepository for CapturingRepo {
        async fn upsert_rating(
            &self,
            data: UpsertRatingData,
        ) -> Result<RatingRecord, RatingRepositoryError> {
            let record = RatingRecord {
                id: self.rating_id,
                recipe_id: data.recipe_id,
                user_id: data.user_id,
                value: data.score.value(),
                comment: data.comment.clone(),
                rated_at: Utc::now(),
            };
            *self.captured.lock().unwrap() = Some(data);

            Ok(record)
        }

        async fn soft_delete_by_pair(
            &self,
            _recipe_id: Uuid,
            _user_id: UserId,
        ) -> Result<(), RatingRepositoryError> {
            unimplemented!("not used in rate tests")
        }
    }

    struct StubQuery {
        view: Option<RatingView>,
    }

    #[async_trait]
    impl RatingQuery for StubQuery {
        async fn find_view_by_id(
            &self,
            _rating_id: Uuid,
        ) -> Result<Option<RatingView>, RatingQueryError> {
            Ok(self.view.clone())
        }

        async fn find_by_user_and_recipe(
            &self,
            _recipe_id: Uuid,
            _user_id: UserId,
        ) -> Result<Option<RatingView>, RatingQueryError> {
            unimplemented!("not used in rate tests")
        }

        async fn list_for_recipe(
            &self,
            _recipe_id: Uuid,
        ) -> Result<Vec<RatingView>, RatingQueryError> {
            unimplemented!("not used in rate tests")
        }
    }

    fn view(rating_id: Uuid, recipe_id: Uuid, rater: UserId, value: i16) -> RatingView {
        RatingView {
            id: rating_id,
            recipe_id,
            user_id: rater,
            user_name: "Jane Doe".to_string(),
            value,
            comment: None,
            rated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn rating_missing_recipe_is_not_found() {
        let service = RateRecipeService::new(
            StubLookup { exists: false },
            CapturingRepo {
                captured: Mutex::new(None),
                rating_id: Uuid::new_v4(),
            },
            StubQuery { view: None },
        );

        let command = RateRecipeCommand::new(Uuid::new_v4(), 5, None).unwrap();
        let result = service.execute(command, UserId::from(Uuid::new_v4())).await;

        assert!(matches!(result, Err(RateRecipeError::RecipeNotFound)));
        assert!(service.repository.captured.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn rating_is_upserted_and_returned_with_rater_name() {
        let rating_id = Uuid::new_v4();
        let recipe_id = Uuid::new_v4();
        let rater = UserId::from(Uuid::new_v4());

        let service = RateRecipeService::new(
            StubLookup { exists: true },
            CapturingRepo {
                captured: Mutex::new(None),
                rating_id,
            },
            StubQuery {
                view: Some(view(rating_id, recipe_id, rater, 5)),
            },
        );

        let command =
            RateRecipeCommand::new(recipe_id, 5, Some("Excellent".to_string())).unwrap();
        let result = service.execute(command, rater).await.unwrap();

        assert_eq!(result.id, rating_id);
        assert_eq!(result.user_name, "Jane Doe");

        let captured = service.repository.captured.lock().unwrap().clone().unwrap();
        assert_eq!(captured.recipe_id, recipe_id);
        assert_eq!(captured.user_id, rater);
        assert_eq!(captured.score.value(), 5);
        assert_eq!(captured.comment.as_deref(), Some("Excellent"));
    }
}
