use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::domain::entities::RecipeCategory;
use crate::recipe::application::ports::outgoing::recipe_repository::RecipeRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    // Ordered ingredient list, stored as JSONB
    #[sea_orm(column_type = "JsonBinary")]
    pub ingredients: Vec<String>,

    #[sea_orm(column_type = "Text")]
    pub instructions: String,

    // Category tag; unknown values read back as "other"
    pub category: String,

    pub prep_time_minutes: i32,

    pub cook_time_minutes: i32,

    pub servings: i32,

    pub image_url: Option<String>,

    pub external_id: Option<i64>,

    pub is_external: bool,

    pub user_id: Option<Uuid>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,

    pub is_deleted: bool,
}

impl Model {
    pub fn to_record(&self) -> RecipeRecord {
        RecipeRecord {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
            category: RecipeCategory::from_tag(&self.category),
            prep_time_minutes: self.prep_time_minutes,
            cook_time_minutes: self.cook_time_minutes,
            servings: self.servings,
            image_url: self.image_url.clone(),
            external_id: self.external_id,
            is_external: self.is_external,
            owner: self.user_id.map(UserId::from),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
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
