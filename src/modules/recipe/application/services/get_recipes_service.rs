use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::ports::incoming::use_cases::{GetRecipesError, GetRecipesUseCase};
use crate::recipe::application::ports::outgoing::recipe_query::{
    PageRequest, PageResult, RecipeListFilter, RecipeQuery, RecipeView,
};

pub struct GetRecipesService<Q>
where
    Q: RecipeQuery,
{
    query: Q,
}

impl<Q> GetRecipesService<Q>
where
    Q: RecipeQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetRecipesUseCase for GetRecipesService<Q>
where
    Q: RecipeQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: RecipeListFilter,
        page: u32,
        per_page: u32,
        viewer: Option<UserId>,
    ) -> Result<PageResult<RecipeView>, GetRecipesError> {
        let page = PageRequest::clamped(page, per_page);

        self.query
            .list(filter, page, viewer)
            .await
            .map_err(|e| GetRecipesError::QueryFailed(e.to_string()))
    }
}
