use async_trait::async_trait;
use bcrypt::{hash, verify, DEFAULT_COST};

use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

/// Bcrypt hashing behind the async port. Hashing is CPU-bound, so both
/// operations run on the blocking pool.
#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Lower cost for test environments where wall clock matters.
    pub fn fast_env() -> Self {
        Self { cost: 4 }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || hash(password, cost).map_err(|_| HashError::HashFailed))
            .await
            .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hashed = hashed.to_string();

        tokio::task::spawn_blocking(move || {
            verify(password, &hashed).map_err(|_| HashError::VerifyFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}

#[cfg(test)]
mod tests {
    use super::BcryptHasher;
    use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

    #[tokio::test]
    async fn test_bcrypt_hash_and_verify_password() {
        let hasher = BcryptHasher::fast_env();
        let password = "SecurePassword123";

        let hashed_password = hasher.hash_password(password).await;
        assert!(hashed_password.is_ok());

        let hashed_password = hashed_password.unwrap();
        assert_ne!(hashed_password, password);

        let verify_correct = hasher.verify_password(password, &hashed_password).await;
        assert!(verify_correct.is_ok());
        assert!(verify_correct.unwrap());

        let verify_wrong = hasher.verify_password("WrongPassword", &hashed_password).await;
        assert!(verify_wrong.is_ok());
        assert!(!verify_wrong.unwrap());

        let verify_invalid_hash = hasher.verify_password(password, "invalid-hash").await;
        assert!(matches!(verify_invalid_hash, Err(HashError::VerifyFailed)));
    }
}
