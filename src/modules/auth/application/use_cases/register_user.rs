use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::{Deserialize, Deserializer, Serialize};

use crate::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserQuery, UserRepository, UserRepositoryError,
};
use crate::auth::application::ports::outgoing::user_repository::CreateUserData;

// ========================= Register Request =========================

/// Validated registration request - can be deserialized directly from JSON
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    email: String,
    password: String,
    first_name: String,
    last_name: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterRequestError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("First name cannot be empty")]
    EmptyFirstName,

    #[error("Last name cannot be empty")]
    EmptyLastName,

    #[error("Name must not exceed 100 characters")]
    NameTooLong,
}

impl RegisterRequest {
    pub fn new(
        email: String,
        password: String,
        first_name: String,
        last_name: String,
    ) -> Result<Self, RegisterRequestError> {
        // Emails are kept exactly as given; lookups are byte-for-byte
        let email = email.trim().to_string();

        if email.is_empty() {
            return Err(RegisterRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(&email) {
            return Err(RegisterRequestError::InvalidEmailFormat);
        }

        if password.len() < 6 {
            return Err(RegisterRequestError::PasswordTooShort);
        }

        let first_name = first_name.trim().to_string();
        let last_name = last_name.trim().to_string();

        if first_name.is_empty() {
            return Err(RegisterRequestError::EmptyFirstName);
        }
        if last_name.is_empty() {
            return Err(RegisterRequestError::EmptyLastName);
        }
        if first_name.len() > 100 || last_name.len() > 100 {
            return Err(RegisterRequestError::NameTooLong);
        }

        Ok(Self {
            email,
            password,
            first_name,
            last_name,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

// Validate while parsing, so handlers only ever see well-formed requests
impl<'de> Deserialize<'de> for RegisterRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RegisterRequestHelper {
            email: String,
            password: String,
            first_name: String,
            last_name: String,
        }

        let helper = RegisterRequestHelper::deserialize(deserializer)?;
        RegisterRequest::new(
            helper.email,
            helper.password,
            helper.first_name,
            helper.last_name,
        )
        .map_err(serde::de::Error::custom)
    }
}

// ========================= Register Error =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterError {
    #[error("Email is already registered")]
    EmailAlreadyRegistered,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ========================= Register Response =========================

#[derive(Debug, Clone, Serialize)]
pub struct RegisteredUser {
    pub id: uuid::Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterUserResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: RegisteredUser,
}

// ========================= Use Case =========================

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, request: RegisterRequest)
        -> Result<RegisterUserResponse, RegisterError>;
}

#[derive(Clone)]
pub struct RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R> RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> RegisterUserUseCase for RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        request: RegisterRequest,
    ) -> Result<RegisterUserResponse, RegisterError> {
        let existing = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|e| RegisterError::QueryError(e.to_string()))?;

        if existing.is_some() {
            return Err(RegisterError::EmailAlreadyRegistered);
        }

        let password_hash = self
            .password_hasher
            .hash_password(request.password())
            .await
            .map_err(|e| RegisterError::HashingFailed(e.to_string()))?;

        let record = self
            .repository
            .create_user(CreateUserData {
                email: request.email().to_string(),
                password_hash,
                first_name: request.first_name().to_string(),
                last_name: request.last_name().to_string(),
            })
            .await
            .map_err(|e| match e {
                // A concurrent register won the unique index; same outcome
                UserRepositoryError::EmailAlreadyExists => RegisterError::EmailAlreadyRegistered,
                other => RegisterError::RepositoryError(other.to_string()),
            })?;

        let issued = self
            .token_provider
            .generate_token(record.id)
            .map_err(|e| RegisterError::TokenGenerationFailed(e.to_string()))?;

        Ok(RegisterUserResponse {
            token: issued.token,
            expires_at: issued.expires_at,
            user: RegisteredUser {
                id: record.id,
                email: record.email,
                first_name: record.first_name,
                last_name: record.last_name,
            },
        })
    }
}
