use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Email address
    #[schema(example = "jane@example.com")]
    pub email: String,

    /// Password
    #[schema(example = "SecurePass123")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponseBody {
    /// Signed bearer token, valid for 7 days
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,

    /// Token expiry instant
    pub expires_at: chrono::DateTime<chrono::Utc>,

    pub user: LoginUserBody,
}

#[derive(Serialize, ToSchema)]
pub struct LoginUserBody {
    /// User ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    #[schema(example = "jane@example.com")]
    pub email: String,

    #[schema(example = "Jane")]
    pub first_name: String,

    #[schema(example = "Doe")]
    pub last_name: String,
}

fn map_login_error(err: LoginError, email: &str) -> HttpResponse {
    match err {
        // One code for unknown email and wrong password alike
        LoginError::InvalidCredentials => {
            warn!(email = %email, "Login rejected");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        other => {
            error!(email = %email, error = %other, "Login failed");
            ApiResponse::internal_error()
        }
    }
}

/// User login
///
/// Authenticates with email and password, returns a 7-day bearer token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<LoginResponseBody>),
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid email or password"
                }
            })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
        ),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(email = %dto.email, "Login attempt");

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(request) => request,
        Err(_) => {
            // Malformed credentials get the same opaque rejection
            return ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password");
        }
    };

    let email = request.email().to_string();

    match data.auth.login.execute(request).await {
        Ok(response) => ApiResponse::success(response),
        Err(err) => map_login_error(err, &email),
    }
}
