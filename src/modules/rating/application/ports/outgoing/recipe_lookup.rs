use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RecipeLookupError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// The slice of the recipe store this module needs: ratings are never
/// created or listed against a recipe that does not (or no longer) exist.
#[async_trait]
pub trait RecipeLookup: Send + Sync {
    async fn recipe_exists(&self, recipe_id: Uuid) -> Result<bool, RecipeLookupError>;
}
