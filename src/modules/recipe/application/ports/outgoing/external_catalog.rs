use async_trait::async_trait;

use crate::recipe::application::domain::entities::RecipeCategory;

/// A catalog record normalized into the internal recipe shape.
#[derive(Debug, Clone)]
pub struct ExternalRecipe {
    pub external_id: i64,
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

/// Third-party catalog boundary. Transport and decoding failures are
/// absorbed by the adapter (logged, turned into an empty batch) - this
/// port cannot fail.
#[async_trait]
pub trait ExternalCatalog: Send + Sync {
    async fn fetch_batch(&self, limit: u32) -> Vec<ExternalRecipe>;
}
