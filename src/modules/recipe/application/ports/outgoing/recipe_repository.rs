use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::domain::entities::RecipeCategory;

// Input DTO for inserting a recipe. Services decide provenance: user
// creations carry an owner, catalog imports an external id.
#[derive(Debug, Clone)]
pub struct CreateRecipeData {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub category: RecipeCategory,
    pub prep_time_minutes: i32,
    pub cook_time_minutes: i32,
    pub servings: i32,
    pub image_url: Option<String>,
    pub external_id: Option<i64>,
    pub is_external: bool,
    pub owner: Option<UserId>,
}

// Replacement payload for an update; provenance fields are immutable
#[derive(Debug, Clone)]
pub struct UpdateRecipeData {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub category: RecipeCategory,
    pub prep_time_minutes: i32,
    pub cook_time_minutes: i32,
    pub servings: i32,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct RecipeRecord {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub category: RecipeCategory,
    pub prep_time_minutes: i32,
    pub cook_time_minutes: i32,
    pub servings: i32,
    pub image_url: Option<String>,
    pub external_id: Option<i64>,
    pub is_external: bool,
    pub owner: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RecipeRepositoryError {
    #[error("Recipe not found")]
    RecipeNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn create_recipe(
        &self,
        data: CreateRecipeData,
    ) -> Result<RecipeRecord, RecipeRepositoryError>;

    /// Live rows only; soft-deleted recipes are invisible here.
    async fn find_by_id(
        &self,
        recipe_id: Uuid,
    ) -> Result<Option<RecipeRecord>, RecipeRepositoryError>;

    async fn update_recipe(
        &self,
        recipe_id: Uuid,
        data: UpdateRecipeData,
    ) -> Result<RecipeRecord, RecipeRepositoryError>;

    async fn soft_delete_recipe(&self, recipe_id: Uuid) -> Result<(), RecipeRepositoryError>;
}
