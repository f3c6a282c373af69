use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token issuer or audience mismatch")]
    ClaimMismatch,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// JWT claim set carried by every issued token
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,   // User ID
    pub exp: i64,    // Expiration timestamp
    pub iat: i64,    // Issued at timestamp
    pub nbf: i64,    // Not before timestamp
    pub iss: String, // Issuer
    pub aud: String, // Audience
}

/// A freshly signed token together with its expiry instant
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

pub trait TokenProvider: Send + Sync {
    fn generate_token(&self, user_id: Uuid) -> Result<IssuedToken, TokenError>;

    /// Full verification: signature, issuer, audience and lifetime must all
    /// hold. There is no revocation state to consult.
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;

    fn is_valid(&self, token: &str) -> bool {
        self.verify_token(token).is_ok()
    }

    /// Extract the subject claim of a verified token.
    fn user_id_from_token(&self, token: &str) -> Result<Uuid, TokenError> {
        Ok(self.verify_token(token)?.sub)
    }
}
