use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::ports::incoming::use_cases::{
    GetSingleRecipeError, GetSingleRecipeUseCase,
};
use crate::recipe::application::ports::outgoing::recipe_query::{
    RecipeQuery, RecipeQueryError, RecipeView,
};

pub struct GetSingleRecipeService<Q>
where
    Q: RecipeQuery,
{
    query: Q,
}

impl<Q> GetSingleRecipeService<Q>
where
    Q: RecipeQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleRecipeUseCase for GetSingleRecipeService<Q>
where
    Q: RecipeQuery + Send + Sync,
{
    async fn execute(
        &self,
        recipe_id: Uuid,
        viewer: Option<UserId>,
    ) -> Result<RecipeView, GetSingleRecipeError> {
        self.query
            .get_by_id(recipe_id, viewer)
            .await
            .map_err(|e| match e {
                RecipeQueryError::NotFound => GetSingleRecipeError::NotFound,
                other => GetSingleRecipeError::QueryFailed(other.to_string()),
            })
    }
}
