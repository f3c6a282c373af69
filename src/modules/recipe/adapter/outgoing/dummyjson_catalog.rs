use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

use crate::recipe::application::domain::entities::RecipeCategory;
use crate::recipe::application::ports::outgoing::external_catalog::{
    ExternalCatalog, ExternalRecipe,
};

const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// DummyJSON recipe catalog. Failure contract: any transport or decoding
/// problem is logged and turned into an empty batch - callers never see an
/// error from this adapter.
#[derive(Debug, Clone)]
pub struct DummyJsonCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl DummyJsonCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build catalog HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        let base_url =
            std::env::var("CATALOG_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self::new(base_url)
    }

    async fn try_fetch(&self, limit: u32) -> Result<Vec<ExternalRecipe>, reqwest::Error> {
        let url = format!("{}/recipes?limit={}", self.base_url, limit);

        let payload: CatalogPayload = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(payload.recipes.into_iter().map(map_recipe).collect())
    }
}

#[async_trait]
impl ExternalCatalog for DummyJsonCatalog {
    async fn fetch_batch(&self, limit: u32) -> Vec<ExternalRecipe> {
        match self.try_fetch(limit).await {
            Ok(recipes) => recipes,
            Err(e) => {
                warn!(error = %e, "Catalog fetch failed, returning empty batch");
                vec![]
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// DummyJSON payload shapes
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct CatalogPayload {
    #[serde(default)]
    recipes: Vec<CatalogRecipe>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogRecipe {
    id: i64,
    name: Option<String>,
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    instructions: Vec<String>,
    #[serde(default)]
    prep_time_minutes: i32,
    #[serde(default)]
    cook_time_minutes: i32,
    #[serde(default)]
    servings: i32,
    image: Option<String>,
    #[serde(default)]
    meal_type: Vec<String>,
}

fn map_recipe(source: CatalogRecipe) -> ExternalRecipe {
    // No dedicated description upstream; the first step stands in
    let description = source
        .instructions
        .first()
        .cloned()
        .unwrap_or_else(|| "No description available".to_string());

    ExternalRecipe {
        external_id: source.id,
        name: source.name.unwrap_or_else(|| "Unknown Recipe".to_string()),
        description,
        ingredients: source.ingredients,
        instructions: source.instructions.join("\n"),
        category: map_meal_type(source.meal_type.first().map(String::as_str)),
        prep_time_minutes: source.prep_time_minutes,
        cook_time_minutes: source.cook_time_minutes,
        servings: source.servings,
        image_url: source.image,
    }
}

/// Fixed lookup from DummyJSON meal types onto the internal categories.
fn map_meal_type(meal_type: Option<&str>) -> RecipeCategory {
    match meal_type.map(|m| m.to_lowercase()).as_deref() {
        Some("breakfast") => RecipeCategory::Breakfast,
        Some("lunch") | Some("dinner") => RecipeCategory::MainCourse,
        Some("dessert") => RecipeCategory::Dessert,
        Some("snack") | Some("snacks") => RecipeCategory::Snack,
        Some("appetizer") => RecipeCategory::Appetizer,
        Some("beverage") => RecipeCategory::Beverage,
        Some("soup") => RecipeCategory::Soup,
        Some("salad") => RecipeCategory::Salad,
        _ => RecipeCategory::Other,
    }
}
