use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::ports::incoming::use_cases::AddFavoriteError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_add_favorite_error(err: AddFavoriteError, recipe_id: Uuid) -> HttpResponse {
    match err {
        AddFavoriteError::RecipeNotFound => {
            ApiResponse::not_found("RECIPE_NOT_FOUND", "Recipe not found")
        }
        AddFavoriteError::AlreadyFavorited => {
            ApiResponse::conflict("ALREADY_FAVORITED", "Recipe is already in favorites")
        }
        AddFavoriteError::RepositoryError(msg) => {
            error!(recipe_id = %recipe_id, "Failed to add favorite: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/recipes/{id}/favorite")]
pub async fn add_favorite_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let recipe_id = path.into_inner();
    let owner = UserId::from(user.user_id);

    match data.recipes.add_favorite.execute(recipe_id, owner).await {
        Ok(()) => ApiResponse::success(serde_json::json!({
            "message": "Recipe added to favorites"
        })),
        Err(err) => map_add_favorite_error(err, recipe_id),
    }
}
