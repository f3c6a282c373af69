use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::ports::outgoing::favorite_repository::{
    FavoriteRepository, FavoriteRepositoryError,
};

use super::sea_orm_entity::favorites::{
    ActiveModel as FavoriteActiveModel, Column, Entity as Favorites,
};

#[derive(Debug, Clone)]
pub struct FavoriteRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FavoriteRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FavoriteRepository for FavoriteRepositoryPostgres {
    async fn exists(
        &self,
        owner: UserId,
        recipe_id: Uuid,
    ) -> Result<bool, FavoriteRepositoryError> {
        let found = Favorites::find()
            .filter(Column::UserId.eq(Uuid::from(owner)))
            .filter(Column::RecipeId.eq(recipe_id))
            .filter(Column::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(|e| FavoriteRepositoryError::DatabaseError(e.to_string()))?;

        Ok(found.is_some())
    }

    async fn add_favorite(
        &self,
        owner: UserId,
        recipe_id: Uuid,
    ) -> Result<(), FavoriteRepositoryError> {
        let active = FavoriteActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(owner.into()),
            recipe_id: Set(recipe_id),
            is_deleted: Set(false),
            ..Default::default()
        };

        active.insert(&*self.db).await.map_err(|e| {
            // Partial unique index on the live pair decides concurrent adds
            match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    FavoriteRepositoryError::AlreadyFavorited
                }
                _ => FavoriteRepositoryError::DatabaseError(e.to_string()),
            }
        })?;

        Ok(())
    }

    async fn soft_delete_favorite(
        &self,
        owner: UserId,
        recipe_id: Uuid,
    ) -> Result<(), FavoriteRepositoryError> {
        let result = Favorites::update_many()
            .col_expr(Column::IsDeleted, Expr::value(true))
            .filter(Column::UserId.eq(Uuid::from(owner)))
            .filter(Column::RecipeId.eq(recipe_id))
            .filter(Column::IsDeleted.eq(false))
            .exec(&*self.db)
            .await
            .map_err(|e| FavoriteRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(FavoriteRepositoryError::FavoriteNotFound);
        }

        Ok(())
    }
}
