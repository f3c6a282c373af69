use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::recipe::application::domain::entities::RecipeCategory;
use crate::recipe::application::ports::incoming::use_cases::recipe_form::RecipeForm;
use crate::recipe::application::ports::incoming::use_cases::CreateRecipeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO (shared with the update route)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct RecipePayload {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub category: RecipeCategory,
    pub prep_time_minutes: i32,
    pub cook_time_minutes: i32,
    pub servings: i32,
    pub image_url: Option<String>,
}

impl RecipePayload {
    pub fn into_form(self) -> Result<RecipeForm, HttpResponse> {
        RecipeForm::new(
            self.name,
            self.description,
            self.ingredients,
            self.instructions,
            self.category,
            self.prep_time_minutes,
            self.cook_time_minutes,
            self.servings,
            self.image_url,
        )
        .map_err(|err| ApiResponse::bad_request("INVALID_RECIPE", &err.to_string()))
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/recipes")]
pub async fn create_recipe_handler(
    user: AuthenticatedUser,
    payload: web::Json<RecipePayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);

    let form = match payload.into_inner().into_form() {
        Ok(form) => form,
        Err(response) => return response,
    };

    match data.recipes.create.execute(form, owner).await {
        Ok(recipe) => ApiResponse::created(recipe),

        Err(CreateRecipeError::RepositoryError(msg)) => {
            error!("Failed to create recipe: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
