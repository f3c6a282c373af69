use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub audience: String,
    pub token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET must be set");

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "recipeapp".to_string());
        let audience = env::var("JWT_AUDIENCE").unwrap_or_else(|_| "recipeapp-web".to_string());

        let token_expiry = env::var("JWT_EXPIRY")
            .unwrap_or_else(|_| "604800".to_string()) // Default 7 days
            .parse::<i64>()
            .expect("Invalid JWT_EXPIRY value");

        Self {
            secret_key,
            issuer,
            audience,
            token_expiry,
        }
    }
}
