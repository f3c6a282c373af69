use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::ports::incoming::use_cases::recipe_form::RecipeForm;
use crate::recipe::application::ports::outgoing::recipe_repository::RecipeRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateRecipeError {
    #[error("Recipe not found")]
    NotFound,

    #[error("Only the recipe owner can modify it")]
    NotOwner,

    #[error("Recipes imported from the external catalog cannot be modified")]
    ExternalReadOnly,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateRecipeUseCase: Send + Sync {
    async fn execute(
        &self,
        recipe_id: Uuid,
        form: RecipeForm,
        caller: UserId,
    ) -> Result<RecipeRecord, UpdateRecipeError>;
}
