use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::ports::incoming::use_cases::{
    AddFavoriteError, AddFavoriteUseCase,
};
use crate::recipe::application::ports::outgoing::favorite_repository::{
    FavoriteRepository, FavoriteRepositoryError,
};
use crate::recipe::application::ports::outgoing::recipe_query::RecipeQuery;

pub struct AddFavoriteService<Q, F>
where
    Q: RecipeQuery,
    F: FavoriteRepository,
{
    query: Q,
    favorites: F,
}

impl<Q, F> AddFavoriteService<Q, F>
where
    Q: RecipeQuery,
    F: FavoriteRepository,
{
    pub fn new(query: Q, favorites: F) -> Self {
        Self { query, favorites }
    }
}

#[async_trait]
impl<Q, F> AddFavoriteUseCase for AddFavoriteService<Q, F>
where
    Q: RecipeQuery + Send + Sync,
    F: FavoriteRepository + Send + Sync,
{
    async fn execute(&self, recipe_id: Uuid, owner: UserId) -> Result<(), AddFavoriteError> {
        let recipe_exists = self
            .query
            .exists(recipe_id)
            .await
            .map_err(|e| AddFavoriteError::RepositoryError(e.to_string()))?;

        if !recipe_exists {
            return Err(AddFavoriteError::RecipeNotFound);
        }

        let already = self
            .favorites
            .exists(owner, recipe_id)
            .await
            .map_err(|e| AddFavoriteError::RepositoryError(e.to_string()))?;

        if already {
            return Err(AddFavoriteError::AlreadyFavorited);
        }

        self.favorites
            .add_favorite(owner, recipe_id)
            .await
            .map_err(|e| match e {
                // Lost the insert race against a concurrent favorite
                FavoriteRepositoryError::AlreadyFavorited => AddFavoriteError::AlreadyFavorited,
                other => AddFavoriteError::RepositoryError(other.to_string()),
            })
    }
}
