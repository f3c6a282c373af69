use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// Read model of a rating, annotated with the rater's display name.
#[derive(Debug, Clone, Serialize)]
pub struct RatingView {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub user_id: UserId,
    pub user_name: String,
    pub value: i16,
    pub comment: Option<String>,
    pub rated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RatingQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait RatingQuery: Send + Sync {
    async fn find_view_by_id(
        &self,
        rating_id: Uuid,
    ) -> Result<Option<RatingView>, RatingQueryError>;

    async fn find_by_user_and_recipe(
        &self,
        recipe_id: Uuid,
        user_id: UserId,
    ) -> Result<Option<RatingView>, RatingQueryError>;

    /// All live ratings for a recipe, newest first.
    async fn list_for_recipe(&self, recipe_id: Uuid)
        -> Result<Vec<RatingView>, RatingQueryError>;
}
