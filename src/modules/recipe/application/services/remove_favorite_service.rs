use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::ports::incoming::use_cases::{
    RemoveFavoriteError, RemoveFavoriteUseCase,
};
use crate::recipe::application::ports::outgoing::favorite_repository::{
    FavoriteRepository, FavoriteRepositoryError,
};

pub struct RemoveFavoriteService<F>
where
    F: FavoriteRepository,
{
    favorites: F,
}

impl<F> RemoveFavoriteService<F>
where
    F: FavoriteRepository,
{
    pub fn new(favorites: F) -> Self {
        Self { favorites }
    }
}

#[async_trait]
impl<F> RemoveFavoriteUseCase for RemoveFavoriteService<F>
where
    F: FavoriteRepository + Send + Sync,
{
    async fn execute(&self, recipe_id: Uuid, owner: UserId) -> Result<(), RemoveFavoriteError> {
        self.favorites
            .soft_delete_favorite(owner, recipe_id)
            .await
            .map_err(|e| match e {
                FavoriteRepositoryError::FavoriteNotFound => RemoveFavoriteError::FavoriteNotFound,
                other => RemoveFavoriteError::RepositoryError(other.to_string()),
            })
    }
}
