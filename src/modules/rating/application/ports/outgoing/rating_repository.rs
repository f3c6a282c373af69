use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::rating::application::domain::entities::RatingScore;

// Write-side input. One live rating per (user, recipe): an upsert
// overwrites value, comment and rated_at in place when the pair exists.
#[derive(Debug, Clone)]
pub struct UpsertRatingData {
    pub recipe_id: Uuid,
    pub user_id: UserId,
    pub score: RatingScore,
    pub comment: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RatingRecord {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub user_id: UserId,
    pub value: i16,
    pub comment: Option<String>,
    pub rated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RatingRepositoryError {
    #[error("Rating not found")]
    RatingNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Update the live rating for the pair when one exists, insert
    /// otherwise. Never creates a second live row for the same pair.
    async fn upsert_rating(
        &self,
        data: UpsertRatingData,
    ) -> Result<RatingRecord, RatingRepositoryError>;

    /// Soft-delete the live rating for the pair; `RatingNotFound` when
    /// there is none.
    async fn soft_delete_by_pair(
        &self,
        recipe_id: Uuid,
        user_id: UserId,
    ) -> Result<(), RatingRepositoryError>;
}
