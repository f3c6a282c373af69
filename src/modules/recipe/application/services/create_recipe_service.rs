use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::ports::incoming::use_cases::recipe_form::RecipeForm;
use crate::recipe::application::ports::incoming::use_cases::{
    CreateRecipeError, CreateRecipeUseCase,
};
use crate::recipe::application::ports::outgoing::recipe_repository::{
    CreateRecipeData, RecipeRecord, RecipeRepository,
};

pub struct CreateRecipeService<R>
where
    R: RecipeRepository,
{
    repository: R,
}

impl<R> CreateRecipeService<R>
where
    R: RecipeRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateRecipeUseCase for CreateRecipeService<R>
where
    R: RecipeRepository + Send + Sync,
{
    async fn execute(
        &self,
        form: RecipeForm,
        owner: UserId,
    ) -> Result<RecipeRecord, CreateRecipeError> {
        let data = CreateRecipeData {
            name: form.name().to_string(),
            description: form.description().to_string(),
            ingredients: form.ingredients().to_vec(),
            instructions: form.instructions().to_string(),
            category: form.category(),
            prep_time_minutes: form.prep_time_minutes(),
            cook_time_minutes: form.cook_time_minutes(),
            servings: form.servings(),
            image_url: form.image_url().cloned(),
            // User-authored, never a catalog import
            external_id: None,
            is_external: false,
            owner: Some(owner),
        };

        self.repository
            .create_recipe(data)
            .await
            .map_err(|e| CreateRecipeError::RepositoryError(e.to_string()))
    }
}
