use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::ports::incoming::use_cases::GetFavoritesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct GetFavoritesQuery {
    #[serde(default, rename = "pageNumber")]
    pub page_number: u32,

    #[serde(default, rename = "pageSize")]
    pub page_size: u32,
}

#[get("/api/recipes/favorites")]
pub async fn get_favorites_handler(
    user: AuthenticatedUser,
    query: web::Query<GetFavoritesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);
    let query = query.into_inner();

    match data
        .recipes
        .get_favorites
        .execute(owner, query.page_number, query.page_size)
        .await
    {
        Ok(result) => ApiResponse::success(result),

        Err(GetFavoritesError::QueryFailed(msg)) => {
            error!("Failed to list favorites: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
