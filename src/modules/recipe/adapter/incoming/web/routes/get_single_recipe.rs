use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::MaybeUser;
use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::ports::incoming::use_cases::GetSingleRecipeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/recipes/{id}")]
pub async fn get_single_recipe_handler(
    user: MaybeUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let recipe_id = path.into_inner();
    let viewer = user.user_id.map(UserId::from);

    match data.recipes.get_single.execute(recipe_id, viewer).await {
        Ok(recipe) => ApiResponse::success(recipe),

        Err(GetSingleRecipeError::NotFound) => {
            ApiResponse::not_found("RECIPE_NOT_FOUND", "Recipe not found")
        }

        Err(GetSingleRecipeError::QueryFailed(msg)) => {
            error!(recipe_id = %recipe_id, "Failed to fetch recipe: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;

    use crate::recipe::application::ports::incoming::use_cases::GetSingleRecipeUseCase;
    use crate::recipe::application::ports::outgoing::recipe_query::RecipeView;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::recipe_test_fixtures::sample_recipe_view;
    use crate::tests::support::stubs::StubTokenProvider;

    #[derive(Clone)]
    struct StubGetSingle {
        result: Result<RecipeView, GetSingleRecipeError>,
    }

    #[async_trait]
    impl GetSingleRecipeUseCase for StubGetSingle {
        async fn execute(
            &self,
            _recipe_id: Uuid,
            _viewer: Option<UserId>,
        ) -> Result<RecipeView, GetSingleRecipeError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn found_recipe_is_returned() {
        let view = sample_recipe_view();
        let id = view.id;

        let state = TestAppStateBuilder::default()
            .with_get_single_recipe(StubGetSingle { result: Ok(view) })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(StubTokenProvider::denying_arc()))
                .service(get_single_recipe_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/recipes/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], id.to_string());
    }

    #[actix_web::test]
    async fn absent_recipe_returns_not_found() {
        let state = TestAppStateBuilder::default()
            .with_get_single_recipe(StubGetSingle {
                result: Err(GetSingleRecipeError::NotFound),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(StubTokenProvider::denying_arc()))
                .service(get_single_recipe_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/recipes/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "RECIPE_NOT_FOUND");
    }
}
