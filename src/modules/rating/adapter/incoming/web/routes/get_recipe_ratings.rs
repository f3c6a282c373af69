use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::rating::application::ports::incoming::use_cases::GetRecipeRatingsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/ratings/recipe/{recipeId}")]
pub async fn get_recipe_ratings_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let recipe_id = path.into_inner();

    match data.ratings.get_for_recipe.execute(recipe_id).await {
        Ok(ratings) => ApiResponse::success(ratings),

        Err(GetRecipeRatingsError::RecipeNotFound) => {
            ApiResponse::not_found("RECIPE_NOT_FOUND", "Recipe not found")
        }

        Err(GetRecipeRatingsError::QueryFailed(msg)) => {
            error!(recipe_id = %recipe_id, "Failed to list ratings: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
