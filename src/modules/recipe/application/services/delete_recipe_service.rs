use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::ports::incoming::use_cases::{
    DeleteRecipeError, DeleteRecipeUseCase,
};
use crate::recipe::application::ports::outgoing::recipe_repository::RecipeRepository;

pub struct DeleteRecipeService<R>
where
    R: RecipeRepository,
{
    repository: R,
}

impl<R> DeleteRecipeService<R>
where
    R: RecipeRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteRecipeUseCase for DeleteRecipeService<R>
where
    R: RecipeRepository + Send + Sync,
{
    async fn execute(&self, recipe_id: Uuid, caller: UserId) -> Result<(), DeleteRecipeError> {
        let recipe = self
            .repository
            .find_by_id(recipe_id)
            .await
            .map_err(|e| DeleteRecipeError::RepositoryError(e.to_string()))?
            .ok_or(DeleteRecipeError::NotFound)?;

        // Same guard ladder as update
        if recipe.is_external {
            return Err(DeleteRecipeError::ExternalReadOnly);
        }
        if recipe.owner != Some(caller) {
            return Err(DeleteRecipeError::NotOwner);
        }

        self.repository
            .soft_delete_recipe(recipe_id)
            .await
            .map_err(|e| DeleteRecipeError::RepositoryError(e.to_string()))
    }
}
