use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::MaybeUser;
use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::domain::entities::RecipeCategory;
use crate::recipe::application::ports::incoming::use_cases::GetRecipesError;
use crate::recipe::application::ports::outgoing::recipe_query::RecipeListFilter;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct GetRecipesQuery {
    #[serde(default, rename = "pageNumber")]
    pub page_number: u32,

    #[serde(default, rename = "pageSize")]
    pub page_size: u32,

    pub category: Option<RecipeCategory>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[get("/api/recipes")]
pub async fn get_recipes_handler(
    user: MaybeUser,
    query: web::Query<GetRecipesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let viewer = user.user_id.map(UserId::from);
    let query = query.into_inner();

    let filter = RecipeListFilter {
        category: query.category,
    };

    match data
        .recipes
        .get_list
        .execute(filter, query.page_number, query.page_size, viewer)
        .await
    {
        Ok(result) => ApiResponse::success(result),

        Err(GetRecipesError::QueryFailed(msg)) => {
            error!("Failed to list recipes: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    use crate::recipe::application::ports::incoming::use_cases::GetRecipesUseCase;
    use crate::recipe::application::ports::outgoing::recipe_query::{PageResult, RecipeView};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::recipe_test_fixtures::sample_recipe_view;
    use crate::tests::support::stubs::StubTokenProvider;

    /// Records the raw pagination values the handler forwards.
    #[derive(Clone, Default)]
    struct CapturingGetRecipes {
        seen: Arc<Mutex<Option<(u32, u32, Option<RecipeCategory>)>>>,
    }

    #[async_trait]
    impl GetRecipesUseCase for CapturingGetRecipes {
        async fn execute(
            &self,
            filter: RecipeListFilter,
            page: u32,
            per_page: u32,
            _viewer: Option<UserId>,
        ) -> Result<PageResult<RecipeView>, GetRecipesError> {
            *self.seen.lock().unwrap() = Some((page, per_page, filter.category));

            Ok(PageResult {
                items: vec![sample_recipe_view()],
                page: 1,
                per_page: 10,
                total: 1,
            })
        }
    }

    #[actix_web::test]
    async fn list_parses_pagination_and_category_params() {
        let use_case = CapturingGetRecipes::default();
        let seen = use_case.seen.clone();

        let state = TestAppStateBuilder::default()
            .with_get_recipes(use_case)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(StubTokenProvider::denying_arc()))
                .service(get_recipes_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/recipes?pageNumber=2&pageSize=25&category=dessert")
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            *seen.lock().unwrap(),
            Some((2, 25, Some(RecipeCategory::Dessert)))
        );
    }

    #[actix_web::test]
    async fn list_defaults_absent_params_to_zero() {
        let use_case = CapturingGetRecipes::default();
        let seen = use_case.seen.clone();

        let state = TestAppStateBuilder::default()
            .with_get_recipes(use_case)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(StubTokenProvider::denying_arc()))
                .service(get_recipes_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/recipes").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        // Normalization happens in the service, so the handler passes 0s
        assert_eq!(*seen.lock().unwrap(), Some((0, 0, None)));

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);
    }
}
