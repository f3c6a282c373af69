use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::rating::application::ports::incoming::use_cases::{
    RateRecipeCommand, RateRecipeError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct RateRecipeRequest {
    pub recipe_id: Uuid,
    pub value: i16,
    pub comment: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

fn map_rate_error(err: RateRecipeError, recipe_id: Uuid) -> HttpResponse {
    match err {
        RateRecipeError::RecipeNotFound => {
            ApiResponse::not_found("RECIPE_NOT_FOUND", "Recipe not found")
        }
        other => {
            error!(recipe_id = %recipe_id, error = %other, "Failed to save rating");
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/ratings")]
pub async fn rate_recipe_handler(
    user: AuthenticatedUser,
    payload: web::Json<RateRecipeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let rater = UserId::from(user.user_id);
    let payload = payload.into_inner();
    let recipe_id = payload.recipe_id;

    let command = match RateRecipeCommand::new(payload.recipe_id, payload.value, payload.comment) {
        Ok(command) => command,
        Err(err) => return ApiResponse::bad_request("INVALID_RATING", &err.to_string()),
    };

    match data.ratings.rate.execute(command, rater).await {
        Ok(rating) => ApiResponse::success(rating),
        Err(err) => map_rate_error(err, recipe_id),
    }
}
