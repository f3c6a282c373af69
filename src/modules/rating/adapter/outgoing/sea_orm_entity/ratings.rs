use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::rating::application::ports::outgoing::rating_repository::RatingRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ratings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub user_id: Uuid,

    pub recipe_id: Uuid,

    pub value: i16,

    pub comment: Option<String>,

    pub rated_at: DateTimeWithTimeZone,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,

    pub is_deleted: bool,
}

impl Model {
    pub fn to_record(&self) -> RatingRecord {
        RatingRecord {
            id: self.id,
            recipe_id: self.recipe_id,
            user_id: UserId::from(self.user_id),
            value: self.value,
            comment: self.comment.clone(),
            rated_at: self.rated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id"
    )]
    User,

    #[sea_orm(
        belongs_to = "crate::modules::recipe::adapter::outgoing::sea_orm_entity::recipes::Entity",
        from = "Column::RecipeId",
        to = "crate::modules::recipe::adapter::outgoing::sea_orm_entity::recipes::Column::Id"
    )]
    Recipe,
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
