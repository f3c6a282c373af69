use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteRecipeError {
    #[error("Recipe not found")]
    NotFound,

    #[error("Only the recipe owner can delete it")]
    NotOwner,

    #[error("Recipes imported from the external catalog cannot be deleted")]
    ExternalReadOnly,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteRecipeUseCase: Send + Sync {
    async fn execute(&self, recipe_id: Uuid, caller: UserId) -> Result<(), DeleteRecipeError>;
}
