use actix_web::{post, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::recipe::application::ports::incoming::use_cases::SyncCatalogError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Caller-initiated catalog sync; there is no timer behind this.
#[post("/api/recipes/sync")]
pub async fn sync_catalog_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.recipes.sync_catalog.execute().await {
        Ok(report) => ApiResponse::success(report),

        Err(err) => {
            error!(error = %err, "Catalog sync failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::recipe::application::ports::incoming::use_cases::{
        SyncCatalogUseCase, SyncReport,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubTokenProvider;

    #[derive(Clone)]
    struct StubSyncCatalog {
        result: Result<SyncReport, SyncCatalogError>,
    }

    #[async_trait]
    impl SyncCatalogUseCase for StubSyncCatalog {
        async fn execute(&self) -> Result<SyncReport, SyncCatalogError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn sync_reports_counts() {
        let state = TestAppStateBuilder::default()
            .with_sync_catalog(StubSyncCatalog {
                result: Ok(SyncReport {
                    fetched: 50,
                    imported: 3,
                    skipped: 47,
                }),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(StubTokenProvider::accepting_arc(
                    Uuid::new_v4(),
                )))
                .service(sync_catalog_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/recipes/sync")
            .insert_header(("Authorization", "Bearer test-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["fetched"], 50);
        assert_eq!(body["data"]["imported"], 3);
        assert_eq!(body["data"]["skipped"], 47);
    }

    #[actix_web::test]
    async fn sync_requires_authentication() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(StubTokenProvider::denying_arc()))
                .service(sync_catalog_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/recipes/sync")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
