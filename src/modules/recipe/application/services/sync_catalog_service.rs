use async_trait::async_trait;
use tracing::info;

use crate::recipe::application::ports::incoming::use_cases::{
    SyncCatalogError, SyncCatalogUseCase, SyncReport,
};
use crate::recipe::application::ports::outgoing::external_catalog::ExternalCatalog;
use crate::recipe::application::ports::outgoing::recipe_query::RecipeQuery;
use crate::recipe::application::ports::outgoing::recipe_repository::{
    CreateRecipeData, RecipeRepository,
};

/// Fixed batch size for a single catalog pull.
const SYNC_BATCH_SIZE: u32 = 50;

pub struct SyncCatalogService<C, Q, R>
where
    C: ExternalCatalog,
    Q: RecipeQuery,
    R: RecipeRepository,
{
    catalog: C,
    query: Q,
    repository: R,
}

impl<C, Q, R> SyncCatalogService<C, Q, R>
where
    C: ExternalCatalog,
    Q: RecipeQuery,
    R: RecipeRepository,
{
    pub fn new(catalog: C, query: Q, repository: R) -> Self {
        Self {
            catalog,
            query,
            repository,
        }
    }
}

#[async_trait]
impl<C, Q, R> SyncCatalogUseCase for SyncCatalogService<C, Q, R>
where
    C: ExternalCatalog + Send + Sync,
    Q: RecipeQuery + Send + Sync,
    R: RecipeRepository + Send + Sync,
{
    async fn execute(&self) -> Result<SyncReport, SyncCatalogError> {
        // A failed fetch surfaces here as an empty batch, not an error
        let batch = self.catalog.fetch_batch(SYNC_BATCH_SIZE).await;
        let fetched = batch.len();

        let external_ids: Vec<i64> = batch.iter().map(|r| r.external_id).collect();
        let existing = self
            .query
            .existing_external_ids(&external_ids)
            .await
            .map_err(|e| SyncCatalogError::QueryFailed(e.to_string()))?;

        let mut imported = 0;
        for record in batch {
            if existing.contains(&record.external_id) {
                // Already imported once; resync never updates
                continue;
            }

            self.repository
                .create_recipe(CreateRecipeData {
                    name: record.name,
                    description: record.description,
                    ingredients: record.ingredients,
                    instructions: record.instructions,
                    category: record.category,
                    prep_time_minutes: record.prep_time_minutes,
                    cook_time_minutes: record.cook_time_minutes,
                    servings: record.servings,
                    image_url: record.image_url,
                    external_id: Some(record.external_id),
                    is_external: true,
                    owner: None,
                })
                .await
                .map_err(|e| SyncCatalogError::RepositoryError(e.to_string()))?;

            imported += 1;
        }

        let report = SyncReport {
            fetched,
            imported,
            skipped: fetched - imported,
        };

        info!(
            fetched = report.fetched,
            imported = report.imported,
            skipped = report.skipped,
            "Catalog sync finished"
        );

        Ok(report)
    }
}
