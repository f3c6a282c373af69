use actix_web::{delete, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::ports::incoming::use_cases::DeleteRecipeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_delete_error(err: DeleteRecipeError, recipe_id: Uuid) -> HttpResponse {
    match err {
        DeleteRecipeError::NotFound => {
            ApiResponse::not_found("RECIPE_NOT_FOUND", "Recipe not found")
        }
        DeleteRecipeError::NotOwner => {
            ApiResponse::forbidden("NOT_RECIPE_OWNER", "Only the recipe owner can delete it")
        }
        DeleteRecipeError::ExternalReadOnly => ApiResponse::bad_request(
            "EXTERNAL_RECIPE_READONLY",
            "Recipes imported from the external catalog cannot be deleted",
        ),
        DeleteRecipeError::RepositoryError(msg) => {
            error!(recipe_id = %recipe_id, "Failed to delete recipe: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/recipes/{id}")]
pub async fn delete_recipe_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let recipe_id = path.into_inner();
    let caller = UserId::from(user.user_id);

    match data.recipes.delete.execute(recipe_id, caller).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_delete_error(err, recipe_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;

    use crate::recipe::application::ports::incoming::use_cases::DeleteRecipeUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubTokenProvider;

    #[derive(Clone)]
    struct StubDeleteRecipe {
        result: Result<(), DeleteRecipeError>,
    }

    #[async_trait]
    impl DeleteRecipeUseCase for StubDeleteRecipe {
        async fn execute(&self, _recipe_id: Uuid, _caller: UserId) -> Result<(), DeleteRecipeError> {
            self.result.clone()
        }
    }

    async fn run(result: Result<(), DeleteRecipeError>) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_delete_recipe(StubDeleteRecipe { result })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(StubTokenProvider::accepting_arc(
                    Uuid::new_v4(),
                )))
                .service(delete_recipe_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/recipes/{}", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer test-token"))
            .to_request();

        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn delete_success_is_no_content() {
        let resp = run(Ok(())).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn delete_not_owner_is_forbidden() {
        let resp = run(Err(DeleteRecipeError::NotOwner)).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn delete_external_recipe_is_bad_request() {
        let resp = run(Err(DeleteRecipeError::ExternalReadOnly)).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn delete_absent_recipe_is_not_found() {
        let resp = run(Err(DeleteRecipeError::NotFound)).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
