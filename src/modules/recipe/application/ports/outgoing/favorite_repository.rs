use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FavoriteRepositoryError {
    #[error("Recipe is already in favorites")]
    AlreadyFavorited,

    #[error("Favorite not found")]
    FavoriteNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Whether a live favorite exists for the pair.
    async fn exists(&self, owner: UserId, recipe_id: Uuid)
        -> Result<bool, FavoriteRepositoryError>;

    /// Insert a favorite. A unique-index violation from a concurrent insert
    /// surfaces as `AlreadyFavorited`.
    async fn add_favorite(
        &self,
        owner: UserId,
        recipe_id: Uuid,
    ) -> Result<(), FavoriteRepositoryError>;

    /// Soft-delete the live favorite for the pair; `FavoriteNotFound` when
    /// there is none.
    async fn soft_delete_favorite(
        &self,
        owner: UserId,
        recipe_id: Uuid,
    ) -> Result<(), FavoriteRepositoryError>;
}
