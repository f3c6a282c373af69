use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::ports::incoming::use_cases::{
    GetFavoritesError, GetFavoritesUseCase,
};
use crate::recipe::application::ports::outgoing::recipe_query::{
    PageRequest, PageResult, RecipeQuery, RecipeView,
};

pub struct GetFavoritesService<Q>
where
    Q: RecipeQuery,
{
    query: Q,
}

impl<Q> GetFavoritesService<Q>
where
    Q: RecipeQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetFavoritesUseCase for GetFavoritesService<Q>
where
    Q: RecipeQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        page: u32,
        per_page: u32,
    ) -> Result<PageResult<RecipeView>, GetFavoritesError> {
        let page = PageRequest::clamped(page, per_page);

        self.query
            .list_favorites(owner, page)
            .await
            .map_err(|e| GetFavoritesError::QueryFailed(e.to_string()))
    }
}
