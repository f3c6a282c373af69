use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::rating::application::ports::outgoing::recipe_lookup::{
    RecipeLookup, RecipeLookupError,
};
use crate::recipe::adapter::outgoing::sea_orm_entity::recipes;

#[derive(Debug, Clone)]
pub struct RecipeLookupPostgres {
    db: Arc<DatabaseConnection>,
}

impl RecipeLookupPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RecipeLookup for RecipeLookupPostgres {
    async fn recipe_exists(&self, recipe_id: Uuid) -> Result<bool, RecipeLookupError> {
        let found = recipes::Entity::find_by_id(recipe_id)
            .filter(recipes::Column::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(|e| RecipeLookupError::DatabaseError(e.to_string()))?;

        Ok(found.is_some())
    }
}
