use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

// Auth
use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponseBody, LoginUserBody, RegisterRequestDto, RegisterResponseBody,
    RegisteredUserBody,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "RecipeApp API",
        version = "1.0.0",
        description = "API documentation for the recipe sharing backend",
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user::login_user_handler,

        // Recipe endpoints (pending annotation)
        // get_recipes_handler,
        // get_single_recipe_handler,
        // create_recipe_handler,
        // update_recipe_handler,
        // delete_recipe_handler,
        // get_favorites_handler,
        // add_favorite_handler,
        // remove_favorite_handler,
        // sync_catalog_handler,

        // Rating endpoints (pending annotation)
        // rate_recipe_handler,
        // get_recipe_ratings_handler,
        // get_own_rating_handler,
        // delete_rating_handler,
    ),
    components(schemas(
        ErrorResponse,
        ErrorDetail,
        RegisterRequestDto,
        RegisterResponseBody,
        RegisteredUserBody,
        LoginRequestDto,
        LoginResponseBody,
        LoginUserBody,
    )),
    tags(
        (name = "auth", description = "Registration and login"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
