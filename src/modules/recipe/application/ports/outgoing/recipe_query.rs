// src/modules/recipe/application/ports/outgoing/recipe_query.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::domain::entities::RecipeCategory;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// Full read model of a recipe. `average_rating` and `ratings_count` are
/// recomputed from the live rating set on every read; `is_favorited` is
/// viewer-dependent and false for anonymous callers.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeView {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub category: RecipeCategory,
    pub prep_time_minutes: i32,
    pub cook_time_minutes: i32,
    pub servings: i32,
    pub image_url: Option<String>,
    pub is_external: bool,
    pub owner: Option<UserId>,
    pub average_rating: f64,
    pub ratings_count: u64,
    pub is_favorited: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct RecipeListFilter {
    pub category: Option<RecipeCategory>,
}

#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    /// Normalize raw pagination input: page below 1 becomes 1, size 0
    /// becomes the default 10, anything above 100 is capped at 100.
    pub fn clamped(page: u32, per_page: u32) -> Self {
        let page = if page < 1 { 1 } else { page };
        let per_page = match per_page {
            0 => 10,
            n if n > 100 => 100,
            n => n,
        };

        Self { page, per_page }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RecipeQueryError {
    #[error("Recipe not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side; aggregates ratings and viewer favorites)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RecipeQuery: Send + Sync {
    async fn list(
        &self,
        filter: RecipeListFilter,
        page: PageRequest,
        viewer: Option<UserId>,
    ) -> Result<PageResult<RecipeView>, RecipeQueryError>;

    async fn get_by_id(
        &self,
        recipe_id: Uuid,
        viewer: Option<UserId>,
    ) -> Result<RecipeView, RecipeQueryError>;

    /// Viewer-scoped favorites, newest recipe first; every item comes back
    /// with `is_favorited = true`.
    async fn list_favorites(
        &self,
        owner: UserId,
        page: PageRequest,
    ) -> Result<PageResult<RecipeView>, RecipeQueryError>;

    async fn exists(&self, recipe_id: Uuid) -> Result<bool, RecipeQueryError>;

    /// Which of the given catalog ids already have a live imported recipe.
    async fn existing_external_ids(
        &self,
        external_ids: &[i64],
    ) -> Result<HashSet<i64>, RecipeQueryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_defaults_zero_page_and_size() {
        let page = PageRequest::clamped(0, 0);

        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, 10);
    }

    #[test]
    fn clamp_caps_oversized_page_size() {
        let page = PageRequest::clamped(3, 500);

        assert_eq!(page.page, 3);
        assert_eq!(page.per_page, 100);
    }

    #[test]
    fn clamp_keeps_values_in_range() {
        let page = PageRequest::clamped(2, 25);

        assert_eq!(page.page, 2);
        assert_eq!(page.per_page, 25);
    }
}
