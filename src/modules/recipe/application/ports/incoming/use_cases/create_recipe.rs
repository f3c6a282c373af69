use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::ports::incoming::use_cases::recipe_form::RecipeForm;
use crate::recipe::application::ports::outgoing::recipe_repository::RecipeRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateRecipeError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Persist a user-authored recipe. Implementations bind the caller as owner
/// and always mark the row as not externally sourced.
#[async_trait]
pub trait CreateRecipeUseCase: Send + Sync {
    async fn execute(&self, form: RecipeForm, owner: UserId)
        -> Result<RecipeRecord, CreateRecipeError>;
}
