use async_trait::async_trait;
use uuid::Uuid;

use crate::rating::application::ports::incoming::use_cases::{
    GetRecipeRatingsError, GetRecipeRatingsUseCase,
};
use crate::rating::application::ports::outgoing::rating_query::{RatingQuery, RatingView};
use crate::rating::application::ports::outgoing::recipe_lookup::RecipeLookup;

pub struct GetRecipeRatingsService<L, Q>
where
    L: RecipeLookup,
    Q: RatingQuery,
{
    recipes: L,
    query: Q,
}

impl<L, Q> GetRecipeRatingsService<L, Q>
where
    L: RecipeLookup,
    Q: RatingQuery,
{
    pub fn new(recipes: L, query: Q) -> Self {
        Self { recipes, query }
    }
}

#[async_trait]
impl<L, Q> GetRecipeRatingsUseCase for GetRecipeRatingsService<L, Q>
where
    L: RecipeLookup + Send + Sync,
    Q: RatingQuery + Send + Sync,
{
    async fn execute(&self, recipe_id: Uuid) -> Result<Vec<RatingView>, GetRecipeRatingsError> {
        let recipe_exists = self
            .recipes
            .recipe_exists(recipe_id)
            .await
            .map_err(|e| GetRecipeRatingsError::QueryFailed(e.to_string()))?;

        if !recipe_exists {
            return Err(GetRecipeRatingsError::RecipeNotFound);
        }

        self.query
            .list_for_recipe(recipe_id)
            .await
            .map_err(|e| GetRecipeRatingsError::QueryFailed(e.to_string()))
    }
}
