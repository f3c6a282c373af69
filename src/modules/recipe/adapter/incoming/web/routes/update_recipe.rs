use actix_web::{put, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::recipe::adapter::incoming::web::routes::create_recipe::RecipePayload;
use crate::recipe::application::ports::incoming::use_cases::UpdateRecipeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_update_error(err: UpdateRecipeError, recipe_id: Uuid) -> HttpResponse {
    match err {
        UpdateRecipeError::NotFound => {
            ApiResponse::not_found("RECIPE_NOT_FOUND", "Recipe not found")
        }
        UpdateRecipeError::NotOwner => {
            ApiResponse::forbidden("NOT_RECIPE_OWNER", "Only the recipe owner can modify it")
        }
        UpdateRecipeError::ExternalReadOnly => ApiResponse::bad_request(
            "EXTERNAL_RECIPE_READONLY",
            "Recipes imported from the external catalog cannot be modified",
        ),
        UpdateRecipeError::RepositoryError(msg) => {
            error!(recipe_id = %recipe_id, "Failed to update recipe: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/recipes/{id}")]
pub async fn update_recipe_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: web::Json<RecipePayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    let recipe_id = path.into_inner();
    let caller = UserId::from(user.user_id);

    let form = match payload.into_inner().into_form() {
        Ok(form) => form,
        Err(response) => return response,
    };

    match data.recipes.update.execute(recipe_id, form, caller).await {
        Ok(recipe) => ApiResponse::success(recipe),
        Err(err) => map_update_error(err, recipe_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;

    use crate::recipe::application::ports::incoming::use_cases::recipe_form::RecipeForm;
    use crate::recipe::application::ports::incoming::use_cases::UpdateRecipeUseCase;
    use crate::recipe::application::ports::outgoing::recipe_repository::RecipeRecord;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::recipe_test_fixtures::sample_recipe_record;
    use crate::tests::support::stubs::StubTokenProvider;

    #[derive(Clone)]
    struct StubUpdateRecipe {
        result: Result<RecipeRecord, UpdateRecipeError>,
    }

    #[async_trait]
    impl UpdateRecipeUseCase for StubUpdateRecipe {
        async fn execute(
            &self,
            _recipe_id: Uuid,
            _form: RecipeForm,
            _caller: UserId,
        ) -> Result<RecipeRecord, UpdateRecipeError> {
            self.result.clone()
        }
    }

    fn payload() -> serde_json::Value {
        serde_json::json!({
            "name": "Updated Soup",
            "description": "Still hearty",
            "ingredients": ["lentils"],
            "instructions": "Boil",
            "category": "soup",
            "prep_time_minutes": 10,
            "cook_time_minutes": 30,
            "servings": 4
        })
    }

    async fn run(
        result: Result<RecipeRecord, UpdateRecipeError>,
    ) -> actix_web::dev::ServiceResponse {
        let user_id = Uuid::new_v4();

        let state = TestAppStateBuilder::default()
            .with_update_recipe(StubUpdateRecipe { result })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(StubTokenProvider::accepting_arc(user_id)))
                .service(update_recipe_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/recipes/{}", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer test-token"))
            .set_json(payload())
            .to_request();

        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn update_success_returns_recipe() {
        let owner = UserId::from(Uuid::new_v4());
        let resp = run(Ok(sample_recipe_record(Some(owner)))).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn update_not_owner_is_forbidden() {
        let resp = run(Err(UpdateRecipeError::NotOwner)).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "NOT_RECIPE_OWNER");
    }

    #[actix_web::test]
    async fn update_external_recipe_is_bad_request() {
        let resp = run(Err(UpdateRecipeError::ExternalReadOnly)).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "EXTERNAL_RECIPE_READONLY");
    }

    #[actix_web::test]
    async fn update_absent_recipe_is_not_found() {
        let resp = run(Err(UpdateRecipeError::NotFound)).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
