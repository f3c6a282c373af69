use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddFavoriteError {
    #[error("Recipe not found")]
    RecipeNotFound,

    #[error("Recipe is already in favorites")]
    AlreadyFavorited,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Favoriting an already-favorited recipe is an explicit rejection, not a
/// silent no-op.
#[async_trait]
pub trait AddFavoriteUseCase: Send + Sync {
    async fn execute(&self, recipe_id: Uuid, owner: UserId) -> Result<(), AddFavoriteError>;
}
