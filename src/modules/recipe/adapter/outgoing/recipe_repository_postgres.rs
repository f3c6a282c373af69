use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::recipe::application::ports::outgoing::recipe_repository::{
    CreateRecipeData, RecipeRecord, RecipeRepository, RecipeRepositoryError, UpdateRecipeData,
};

use super::sea_orm_entity::recipes::{
    ActiveModel as RecipeActiveModel, Column, Entity as Recipes, Model as RecipeModel,
};

#[derive(Debug, Clone)]
pub struct RecipeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RecipeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: sea_orm::DbErr) -> RecipeRepositoryError {
    RecipeRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl RecipeRepository for RecipeRepositoryPostgres {
    async fn create_recipe(
        &self,
        data: CreateRecipeData,
    ) -> Result<RecipeRecord, RecipeRepositoryError> {
        let active = RecipeActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            description: Set(data.description),
            ingredients: Set(data.ingredients),
            instructions: Set(data.instructions),
            category: Set(data.category.as_str().to_string()),
            prep_time_minutes: Set(data.prep_time_minutes),
            cook_time_minutes: Set(data.cook_time_minutes),
            servings: Set(data.servings),
            image_url: Set(data.image_url),
            external_id: Set(data.external_id),
            is_external: Set(data.is_external),
            user_id: Set(data.owner.map(Into::into)),
            is_deleted: Set(false),
            ..Default::default()
        };

        let inserted: RecipeModel = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_record())
    }

    async fn find_by_id(
        &self,
        recipe_id: Uuid,
    ) -> Result<Option<RecipeRecord>, RecipeRepositoryError> {
        let recipe = Recipes::find_by_id(recipe_id)
            .filter(Column::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(recipe.map(|m| m.to_record()))
    }

    async fn update_recipe(
        &self,
        recipe_id: Uuid,
        data: UpdateRecipeData,
    ) -> Result<RecipeRecord, RecipeRepositoryError> {
        let active = RecipeActiveModel {
            id: Set(recipe_id),
            name: Set(data.name),
            description: Set(data.description),
            ingredients: Set(data.ingredients),
            instructions: Set(data.instructions),
            category: Set(data.category.as_str().to_string()),
            prep_time_minutes: Set(data.prep_time_minutes),
            cook_time_minutes: Set(data.cook_time_minutes),
            servings: Set(data.servings),
            image_url: Set(data.image_url),
            ..Default::default()
        };

        let updated: RecipeModel = active.update(&*self.db).await.map_err(map_db_err)?;

        Ok(updated.to_record())
    }

    async fn soft_delete_recipe(&self, recipe_id: Uuid) -> Result<(), RecipeRepositoryError> {
        let active = RecipeActiveModel {
            id: Set(recipe_id),
            is_deleted: Set(true),
            ..Default::default()
        };

        let result = active.update(&*self.db).await.map_err(map_db_err)?;

        if !result.is_deleted {
            return Err(RecipeRepositoryError::RecipeNotFound);
        }

        Ok(())
    }
}
