// src/modules/recipe/adapter/outgoing/recipe_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::rating::adapter::outgoing::sea_orm_entity::ratings;
use crate::recipe::application::domain::entities::{RatingSummary, RecipeCategory};
use crate::recipe::application::ports::outgoing::recipe_query::{
    PageRequest, PageResult, RecipeListFilter, RecipeQuery, RecipeQueryError, RecipeView,
};

use super::sea_orm_entity::favorites;
use super::sea_orm_entity::recipes::{self, Column, Entity as Recipes, Model as RecipeModel};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct RecipeQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RecipeQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Decorate a page of recipe rows with rating aggregates and the
    /// viewer's favorite marks. Two follow-up queries over the page's ids,
    /// merged in memory.
    async fn annotate(
        &self,
        models: Vec<RecipeModel>,
        viewer: Option<UserId>,
    ) -> Result<Vec<RecipeView>, RecipeQueryError> {
        if models.is_empty() {
            return Ok(vec![]);
        }

        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();

        let rating_rows: Vec<(Uuid, i16)> = ratings::Entity::find()
            .filter(ratings::Column::RecipeId.is_in(ids.clone()))
            .filter(ratings::Column::IsDeleted.eq(false))
            .select_only()
            .column(ratings::Column::RecipeId)
            .column(ratings::Column::Value)
            .into_tuple()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut values_by_recipe: HashMap<Uuid, Vec<i16>> = HashMap::new();
        for (recipe_id, value) in rating_rows {
            values_by_recipe.entry(recipe_id).or_default().push(value);
        }

        let favorited: HashSet<Uuid> = match viewer {
            Some(owner) => favorites::Entity::find()
                .filter(favorites::Column::UserId.eq(Uuid::from(owner)))
                .filter(favorites::Column::RecipeId.is_in(ids))
                .filter(favorites::Column::IsDeleted.eq(false))
                .select_only()
                .column(favorites::Column::RecipeId)
                .into_tuple::<Uuid>()
                .all(&*self.db)
                .await
                .map_err(map_db_err)?
                .into_iter()
                .collect(),
            None => HashSet::new(),
        };

        Ok(models
            .into_iter()
            .map(|model| {
                let summary = values_by_recipe
                    .get(&model.id)
                    .map(|values| RatingSummary::from_values(values))
                    .unwrap_or_else(RatingSummary::empty);
                let is_favorited = favorited.contains(&model.id);

                model_to_view(model, summary, is_favorited)
            })
            .collect())
    }
}

#[async_trait]
impl RecipeQuery for RecipeQueryPostgres {
    async fn list(
        &self,
        filter: RecipeListFilter,
        page: PageRequest,
        viewer: Option<UserId>,
    ) -> Result<PageResult<RecipeView>, RecipeQueryError> {
        let mut query = Recipes::find().filter(Column::IsDeleted.eq(false));

        if let Some(category) = filter.category {
            query = query.filter(Column::Category.eq(category.as_str()));
        }

        query = query.order_by_desc(Column::CreatedAt);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let offset = ((page.page.saturating_sub(1)) * page.per_page) as u64;
        let models = query
            .offset(offset)
            .limit(page.per_page as u64)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items = self.annotate(models, viewer).await?;

        Ok(PageResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn get_by_id(
        &self,
        recipe_id: Uuid,
        viewer: Option<UserId>,
    ) -> Result<RecipeView, RecipeQueryError> {
        let model = Recipes::find_by_id(recipe_id)
            .filter(Column::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(RecipeQueryError::NotFound)?;

        let mut views = self.annotate(vec![model], viewer).await?;

        // annotate keeps one view per input row
        views.pop().ok_or(RecipeQueryError::NotFound)
    }

    async fn list_favorites(
        &self,
        owner: UserId,
        page: PageRequest,
    ) -> Result<PageResult<RecipeView>, RecipeQueryError> {
        let favorite_recipe_ids: Vec<Uuid> = favorites::Entity::find()
            .filter(favorites::Column::UserId.eq(Uuid::from(owner)))
            .filter(favorites::Column::IsDeleted.eq(false))
            .select_only()
            .column(favorites::Column::RecipeId)
            .into_tuple()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if favorite_recipe_ids.is_empty() {
            return Ok(PageResult {
                items: vec![],
                page: page.page,
                per_page: page.per_page,
                total: 0,
            });
        }

        let query = Recipes::find()
            .filter(Column::Id.is_in(favorite_recipe_ids))
            .filter(Column::IsDeleted.eq(false))
            .order_by_desc(Column::CreatedAt);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let offset = ((page.page.saturating_sub(1)) * page.per_page) as u64;
        let models = query
            .offset(offset)
            .limit(page.per_page as u64)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        // Every row on this page is a favorite by construction
        let items = self
            .annotate(models, Some(owner))
            .await?
            .into_iter()
            .map(|mut view| {
                view.is_favorited = true;
                view
            })
            .collect();

        Ok(PageResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn exists(&self, recipe_id: Uuid) -> Result<bool, RecipeQueryError> {
        let found = Recipes::find_by_id(recipe_id)
            .filter(Column::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.is_some())
    }

    async fn existing_external_ids(
        &self,
        external_ids: &[i64],
    ) -> Result<HashSet<i64>, RecipeQueryError> {
        if external_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let found: Vec<i64> = Recipes::find()
            .filter(Column::ExternalId.is_in(external_ids.to_vec()))
            .filter(Column::IsDeleted.eq(false))
            .select_only()
            .column(Column::ExternalId)
            .into_tuple()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.into_iter().collect())
    }
}

fn map_db_err(e: sea_orm::DbErr) -> RecipeQueryError {
    RecipeQueryError::DatabaseError(e.to_string())
}

fn model_to_view(model: RecipeModel, summary: RatingSummary, is_favorited: bool) -> RecipeView {
    RecipeView {
        id: model.id,
        name: model.name,
        description: model.description,
        ingredients: model.ingredients,
        instructions: model.instructions,
        category: RecipeCategory::from_tag(&model.category),
        prep_time_minutes: model.prep_time_minutes,
        cook_time_minutes: model.cook_time_minutes,
        servings: model.servings,
        image_url: model.image_url,
        is_external: model.is_external,
        owner: model.user_id.map(UserId::from),
        average_rating: summary.average,
        ratings_count: summary.count,
        is_favorited,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}
