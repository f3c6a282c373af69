use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::ports::incoming::use_cases::RemoveFavoriteError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/recipes/{id}/favorite")]
pub async fn remove_favorite_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let recipe_id = path.into_inner();
    let owner = UserId::from(user.user_id);

    match data.recipes.remove_favorite.execute(recipe_id, owner).await {
        Ok(()) => ApiResponse::no_content(),

        Err(RemoveFavoriteError::FavoriteNotFound) => {
            ApiResponse::not_found("FAVORITE_NOT_FOUND", "Favorite not found")
        }

        Err(RemoveFavoriteError::RepositoryError(msg)) => {
            error!(recipe_id = %recipe_id, "Failed to remove favorite: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
