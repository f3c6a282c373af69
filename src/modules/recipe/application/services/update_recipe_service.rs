use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::ports::incoming::use_cases::recipe_form::RecipeForm;
use crate::recipe::application::ports::incoming::use_cases::{
    UpdateRecipeError, UpdateRecipeUseCase,
};
use crate::recipe::application::ports::outgoing::recipe_repository::{
    RecipeRecord, RecipeRepository, UpdateRecipeData,
};

pub struct UpdateRecipeService<R>
where
    R: RecipeRepository,
{
    repository: R,
}

impl<R> UpdateRecipeService<R>
where
    R: RecipeRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateRecipeUseCase for UpdateRecipeService<R>
where
    R: RecipeRepository + Send + Sync,
{
    async fn execute(
        &self,
        recipe_id: Uuid,
        form: RecipeForm,
        caller: UserId,
    ) -> Result<RecipeRecord, UpdateRecipeError> {
        let recipe = self
            .repository
            .find_by_id(recipe_id)
            .await
            .map_err(|e| UpdateRecipeError::RepositoryError(e.to_string()))?
            .ok_or(UpdateRecipeError::NotFound)?;

        // Provenance before ownership: imported rows have no owner, and
        // they are immutable for every caller
        if recipe.is_external {
            return Err(UpdateRecipeError::ExternalReadOnly);
        }
        if recipe.owner != Some(caller) {
            return Err(UpdateRecipeError::NotOwner);
        }

        self.repository
            .update_recipe(
                recipe_id,
                UpdateRecipeData {
                    name: form.name().to_string(),
                    description: form.description().to_string(),
                    ingredients: form.ingredients().to_vec(),
                    instructions: form.instructions().to_string(),
                    category: form.category(),
                    prep_time_minutes: form.prep_time_minutes(),
                    cook_time_minutes: form.cook_time_minutes(),
                    servings: form.servings(),
                    image_url: form.image_url().cloned(),
                },
            )
            .await
            .map_err(|e| UpdateRecipeError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::recipe::application::domain::entities::RecipeCategory;
    use crate::recipe::application::ports::outgoing::recipe_repository::{
        CreateRecipeData, RecipeRepositoryError,
    };
    use crate::tests::support::recipe_test_fixtures::{
        external_recipe_record, sample_recipe_record,
    };

    struct StubRepo {
        found: Option<RecipeRecord>,
        updated: Result<RecipeRecord, RecipeRepositoryError>,
    }

    #[async_trait]
    impl RecipeRepository for StubRepo {
        async fn create_recipe(
            &self,
            _data: CreateRecipeData,
        ) -> Result<RecipeRecord, RecipeRepositoryError> {
            unimplemented!("not used in update tests")
        }

        async fn find_by_id(
            &self,
            _recipe_id: Uuid,
        ) -> Result<Option<RecipeRecord>, RecipeRepositoryError> {
            Ok(self.found.clone())
        }

        async fn update_recipe(
            &self,
            _recipe_id: Uuid,
            _data: UpdateRecipeData,
        ) -> Result<RecipeRecord, RecipeRepositoryError> {
            self.updated.clone()
        }

        async fn soft_delete_recipe(&self, _recipe_id: Uuid) -> Result<(), RecipeRepositoryError> {
            unimplemented!("not used in update tests")
        }
    }

    fn form() -> RecipeForm {
        RecipeForm::new(
            "New Name".to_string(),
            "New description".to_string(),
            vec!["salt".to_string()],
            "Stir".to_string(),
            RecipeCategory::Other,
            5,
            5,
            2,
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn absent_recipe_is_not_found() {
        let caller = UserId::from(Uuid::new_v4());
        let service = UpdateRecipeService::new(StubRepo {
            found: None,
            updated: Err(RecipeRepositoryError::RecipeNotFound),
        });

        let result = service.execute(Uuid::new_v4(), form(), caller).await;

        assert!(matches!(result, Err(UpdateRecipeError::NotFound)));
    }

    #[tokio::test]
    async fn non_owner_is_rejected() {
        let owner = UserId::from(Uuid::new_v4());
        let caller = UserId::from(Uuid::new_v4());

        let existing = sample_recipe_record(Some(owner));
        let service = UpdateRecipeService::new(StubRepo {
            found: Some(existing.clone()),
            updated: Ok(existing),
        });

        let result = service.execute(Uuid::new_v4(), form(), caller).await;

        assert!(matches!(result, Err(UpdateRecipeError::NotOwner)));
    }

    #[tokio::test]
    async fn external_recipe_is_immutable_for_every_caller() {
        let caller = UserId::from(Uuid::new_v4());

        let existing = external_recipe_record(42);
        let service = UpdateRecipeService::new(StubRepo {
            found: Some(existing.clone()),
            updated: Ok(existing),
        });

        let result = service.execute(Uuid::new_v4(), form(), caller).await;

        assert!(matches!(result, Err(UpdateRecipeError::ExternalReadOnly)));
    }

    #[tokio::test]
    async fn owner_updates_successfully() {
        let owner = UserId::from(Uuid::new_v4());

        let existing = sample_recipe_record(Some(owner));
        let mut updated = existing.clone();
        updated.name = "New Name".to_string();

        let service = UpdateRecipeService::new(StubRepo {
            found: Some(existing),
            updated: Ok(updated),
        });

        let result = service.execute(Uuid::new_v4(), form(), owner).await.unwrap();

        assert_eq!(result.name, "New Name");
    }
}
