use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, SqlErr, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UserRecord, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Model as UserModel};

#[derive(Debug, Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<UserRecord, UserRepositoryError> {
        let active = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            is_deleted: Set(false),
            ..Default::default()
        };

        let inserted: UserModel = active.insert(&*self.db).await.map_err(|e| {
            // The partial unique index on active emails decides insert races
            match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    UserRepositoryError::EmailAlreadyExists
                }
                _ => UserRepositoryError::DatabaseError(e.to_string()),
            }
        })?;

        Ok(inserted.to_record())
    }
}
