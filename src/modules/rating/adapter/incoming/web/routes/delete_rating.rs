use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::rating::application::ports::incoming::use_cases::DeleteRatingError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/ratings/recipe/{recipeId}")]
pub async fn delete_rating_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let recipe_id = path.into_inner();
    let rater = UserId::from(user.user_id);

    match data.ratings.delete.execute(recipe_id, rater).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteRatingError::RatingNotFound) => {
            ApiResponse::not_found("RATING_NOT_FOUND", "Rating not found")
        }

        Err(DeleteRatingError::RepositoryError(msg)) => {
            error!(recipe_id = %recipe_id, "Failed to delete rating: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;

    use crate::rating::application::ports::incoming::use_cases::DeleteRatingUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubTokenProvider;

    #[derive(Clone)]
    struct StubDeleteRating {
        result: Result<(), DeleteRatingError>,
    }

    #[async_trait]
    impl DeleteRatingUseCase for StubDeleteRating {
        async fn execute(&self, _recipe_id: Uuid, _rater: UserId) -> Result<(), DeleteRatingError> {
            self.result.clone()
        }
    }

    async fn run(result: Result<(), DeleteRatingError>) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_delete_rating(StubDeleteRating { result })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(StubTokenProvider::accepting_arc(
                    Uuid::new_v4(),
                )))
                .service(delete_rating_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/ratings/recipe/{}", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer test-token"))
            .to_request();

        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn delete_existing_rating_is_no_content() {
        let resp = run(Ok(())).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn delete_missing_rating_is_not_found() {
        let resp = run(Err(DeleteRatingError::RatingNotFound)).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "RATING_NOT_FOUND");
    }
}
