use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::auth::application::domain::entities::UserId;
use crate::rating::application::ports::outgoing::rating_query::{
    RatingQuery, RatingQueryError, RatingView,
};

use super::sea_orm_entity::ratings::{Column, Entity as Ratings, Model as RatingModel};

#[derive(Debug, Clone)]
pub struct RatingQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RatingQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Resolve rater display names for a set of rating rows in one users
    /// query, then zip them together.
    async fn to_views(&self, models: Vec<RatingModel>) -> Result<Vec<RatingView>, RatingQueryError> {
        if models.is_empty() {
            return Ok(vec![]);
        }

        let user_ids: Vec<Uuid> = models
            .iter()
            .map(|m| m.user_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let raters = users::Entity::find()
            .filter(users::Column::Id.is_in(user_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let names: HashMap<Uuid, String> = raters
            .into_iter()
            .map(|u| (u.id, format!("{} {}", u.first_name, u.last_name)))
            .collect();

        Ok(models
            .into_iter()
            .map(|model| {
                let user_name = names.get(&model.user_id).cloned().unwrap_or_default();

                RatingView {
                    id: model.id,
                    recipe_id: model.recipe_id,
                    user_id: UserId::from(model.user_id),
                    user_name,
                    value: model.value,
                    comment: model.comment,
                    rated_at: model.rated_at.into(),
                }
            })
            .collect())
    }
}

fn map_db_err(e: sea_orm::DbErr) -> RatingQueryError {
    RatingQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl RatingQuery for RatingQueryPostgres {
    async fn find_view_by_id(
        &self,
        rating_id: Uuid,
    ) -> Result<Option<RatingView>, RatingQueryError> {
        let model = Ratings::find_by_id(rating_id)
            .filter(Column::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        let Some(model) = model else {
            return Ok(None);
        };

        Ok(self.to_views(vec![model]).await?.pop())
    }

    async fn find_by_user_and_recipe(
        &self,
        recipe_id: Uuid,
        user_id: UserId,
    ) -> Result<Option<RatingView>, RatingQueryError> {
        let model = Ratings::find()
            .filter(Column::UserId.eq(Uuid::from(user_id)))
            .filter(Column::RecipeId.eq(recipe_id))
            .filter(Column::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        let Some(model) = model else {
            return Ok(None);
        };

        Ok(self.to_views(vec![model]).await?.pop())
    }

    async fn list_for_recipe(
        &self,
        recipe_id: Uuid,
    ) -> Result<Vec<RatingView>, RatingQueryError> {
        let models = Ratings::find()
            .filter(Column::RecipeId.eq(recipe_id))
            .filter(Column::IsDeleted.eq(false))
            .order_by_desc(Column::RatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.to_views(models).await
    }
}
