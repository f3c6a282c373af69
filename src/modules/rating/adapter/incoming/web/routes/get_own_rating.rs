use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::rating::application::ports::incoming::use_cases::GetOwnRatingError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The caller's rating for a recipe. A missing rating is a successful
/// `null`, not a 404.
#[get("/api/ratings/recipe/{recipeId}/my-rating")]
pub async fn get_own_rating_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let recipe_id = path.into_inner();
    let rater = UserId::from(user.user_id);

    match data.ratings.get_own.execute(recipe_id, rater).await {
        Ok(rating) => ApiResponse::success(rating),

        Err(GetOwnRatingError::QueryFailed(msg)) => {
            error!(recipe_id = %recipe_id, "Failed to fetch own rating: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
