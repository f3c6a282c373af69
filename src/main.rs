pub mod api;
pub mod modules;
pub use modules::auth;
pub use modules::rating;
pub use modules::recipe;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::BcryptHasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::use_cases::login_user::LoginUserService;
use crate::auth::application::use_cases::register_user::RegisterUserService;

use crate::rating::adapter::outgoing::rating_query_postgres::RatingQueryPostgres;
use crate::rating::adapter::outgoing::rating_repository_postgres::RatingRepositoryPostgres;
use crate::rating::adapter::outgoing::recipe_lookup_postgres::RecipeLookupPostgres;
use crate::rating::application::rating_use_cases::RatingUseCases;
use crate::rating::application::services::delete_rating_service::DeleteRatingService;
use crate::rating::application::services::get_own_rating_service::GetOwnRatingService;
use crate::rating::application::services::get_recipe_ratings_service::GetRecipeRatingsService;
use crate::rating::application::services::rate_recipe_service::RateRecipeService;

use crate::recipe::adapter::outgoing::dummyjson_catalog::DummyJsonCatalog;
use crate::recipe::adapter::outgoing::favorite_repository_postgres::FavoriteRepositoryPostgres;
use crate::recipe::adapter::outgoing::recipe_query_postgres::RecipeQueryPostgres;
use crate::recipe::adapter::outgoing::recipe_repository_postgres::RecipeRepositoryPostgres;
use crate::recipe::application::recipe_use_cases::RecipeUseCases;
use crate::recipe::application::services::add_favorite_service::AddFavoriteService;
use crate::recipe::application::services::create_recipe_service::CreateRecipeService;
use crate::recipe::application::services::delete_recipe_service::DeleteRecipeService;
use crate::recipe::application::services::get_favorites_service::GetFavoritesService;
use crate::recipe::application::services::get_recipes_service::GetRecipesService;
use crate::recipe::application::services::get_single_recipe_service::GetSingleRecipeService;
use crate::recipe::application::services::remove_favorite_service::RemoveFavoriteService;
use crate::recipe::application::services::sync_catalog_service::SyncCatalogService;
use crate::recipe::application::services::update_recipe_service::UpdateRecipeService;

use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub recipes: RecipeUseCases,
    pub ratings: RatingUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env_name = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Auth components
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());

    let password_hasher = if env_name == "production" {
        BcryptHasher::new()
    } else {
        BcryptHasher::fast_env()
    };

    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));

    let register_user_service = RegisterUserService::new(
        user_query.clone(),
        user_repo.clone(),
        Arc::new(password_hasher.clone()),
        Arc::new(jwt_service.clone()),
    );
    let login_user_service = LoginUserService::new(
        user_query.clone(),
        Arc::new(password_hasher),
        Arc::new(jwt_service.clone()),
    );

    // Recipe components
    let recipe_repo = RecipeRepositoryPostgres::new(Arc::clone(&db_arc));
    let recipe_query = RecipeQueryPostgres::new(Arc::clone(&db_arc));
    let favorite_repo = FavoriteRepositoryPostgres::new(Arc::clone(&db_arc));
    let catalog = DummyJsonCatalog::from_env();

    let recipes = RecipeUseCases {
        get_list: Arc::new(GetRecipesService::new(recipe_query.clone())),
        get_single: Arc::new(GetSingleRecipeService::new(recipe_query.clone())),
        create: Arc::new(CreateRecipeService::new(recipe_repo.clone())),
        update: Arc::new(UpdateRecipeService::new(recipe_repo.clone())),
        delete: Arc::new(DeleteRecipeService::new(recipe_repo.clone())),
        get_favorites: Arc::new(GetFavoritesService::new(recipe_query.clone())),
        add_favorite: Arc::new(AddFavoriteService::new(
            recipe_query.clone(),
            favorite_repo.clone(),
        )),
        remove_favorite: Arc::new(RemoveFavoriteService::new(favorite_repo)),
        sync_catalog: Arc::new(SyncCatalogService::new(catalog, recipe_query, recipe_repo)),
    };

    // Rating components
    let recipe_lookup = RecipeLookupPostgres::new(Arc::clone(&db_arc));
    let rating_repo = RatingRepositoryPostgres::new(Arc::clone(&db_arc));
    let rating_query = RatingQueryPostgres::new(Arc::clone(&db_arc));

    let ratings = RatingUseCases {
        rate: Arc::new(RateRecipeService::new(
            recipe_lookup.clone(),
            rating_repo.clone(),
            rating_query.clone(),
        )),
        get_for_recipe: Arc::new(GetRecipeRatingsService::new(
            recipe_lookup,
            rating_query.clone(),
        )),
        get_own: Arc::new(GetOwnRatingService::new(rating_query)),
        delete: Arc::new(DeleteRatingService::new(rating_repo)),
    };

    let state = AppState {
        auth: AuthUseCases {
            register: Arc::new(register_user_service),
            login: Arc::new(login_user_service),
        },
        recipes,
        ratings,
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(shared::api::json_config::custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user::login_user_handler);
    // Recipes - the literal /favorites route must precede /{id}
    cfg.service(crate::recipe::adapter::incoming::web::routes::get_favorites::get_favorites_handler);
    cfg.service(crate::recipe::adapter::incoming::web::routes::sync_catalog::sync_catalog_handler);
    cfg.service(crate::recipe::adapter::incoming::web::routes::get_recipes::get_recipes_handler);
    cfg.service(
        crate::recipe::adapter::incoming::web::routes::get_single_recipe::get_single_recipe_handler,
    );
    cfg.service(crate::recipe::adapter::incoming::web::routes::create_recipe::create_recipe_handler);
    cfg.service(crate::recipe::adapter::incoming::web::routes::update_recipe::update_recipe_handler);
    cfg.service(crate::recipe::adapter::incoming::web::routes::delete_recipe::delete_recipe_handler);
    cfg.service(crate::recipe::adapter::incoming::web::routes::add_favorite::add_favorite_handler);
    cfg.service(
        crate::recipe::adapter::incoming::web::routes::remove_favorite::remove_favorite_handler,
    );
    // Ratings - my-rating before the bare recipe route
    cfg.service(
        crate::rating::adapter::incoming::web::routes::get_own_rating::get_own_rating_handler,
    );
    cfg.service(
        crate::rating::adapter::incoming::web::routes::get_recipe_ratings::get_recipe_ratings_handler,
    );
    cfg.service(crate::rating::adapter::incoming::web::routes::rate_recipe::rate_recipe_handler);
    cfg.service(crate::rating::adapter::incoming::web::routes::delete_rating::delete_rating_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
