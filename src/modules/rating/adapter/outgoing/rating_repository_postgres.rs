use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::rating::application::ports::outgoing::rating_repository::{
    RatingRecord, RatingRepository, RatingRepositoryError, UpsertRatingData,
};

use super::sea_orm_entity::ratings::{
    ActiveModel as RatingActiveModel, Column, Entity as Ratings, Model as RatingModel,
};

#[derive(Debug, Clone)]
pub struct RatingRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RatingRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: sea_orm::DbErr) -> RatingRepositoryError {
    RatingRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl RatingRepository for RatingRepositoryPostgres {
    async fn upsert_rating(
        &self,
        data: UpsertRatingData,
    ) -> Result<RatingRecord, RatingRepositoryError> {
        let existing = Ratings::find()
            .filter(Column::UserId.eq(Uuid::from(data.user_id)))
            .filter(Column::RecipeId.eq(data.recipe_id))
            .filter(Column::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        let saved: RatingModel = match existing {
            Some(current) => {
                // Second submission wins: overwrite in place
                let active = RatingActiveModel {
                    id: Set(current.id),
                    value: Set(data.score.value()),
                    comment: Set(data.comment),
                    rated_at: Set(Utc::now().into()),
                    ..Default::default()
                };

                active.update(&*self.db).await.map_err(map_db_err)?
            }
            None => {
                let active = RatingActiveModel {
                    id: Set(Uuid::new_v4()),
                    user_id: Set(data.user_id.into()),
                    recipe_id: Set(data.recipe_id),
                    value: Set(data.score.value()),
                    comment: Set(data.comment),
                    rated_at: Set(Utc::now().into()),
                    is_deleted: Set(false),
                    ..Default::default()
                };

                active.insert(&*self.db).await.map_err(map_db_err)?
            }
        };

        Ok(saved.to_record())
    }

    async fn soft_delete_by_pair(
        &self,
        recipe_id: Uuid,
        user_id: UserId,
    ) -> Result<(), RatingRepositoryError> {
        let result = Ratings::update_many()
            .col_expr(Column::IsDeleted, Expr::value(true))
            .filter(Column::UserId.eq(Uuid::from(user_id)))
            .filter(Column::RecipeId.eq(recipe_id))
            .filter(Column::IsDeleted.eq(false))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RatingRepositoryError::RatingNotFound);
        }

        Ok(())
    }
}
