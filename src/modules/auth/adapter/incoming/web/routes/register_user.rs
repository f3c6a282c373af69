use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::register_user::{
    RegisterError, RegisterRequest, RegisterRequestError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Request body for user registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterRequestDto {
    /// Email address (stored exactly as given)
    #[schema(example = "jane@example.com")]
    pub email: String,

    /// Password (minimum 6 characters)
    #[schema(example = "SecurePass123")]
    pub password: String,

    /// First name
    #[schema(example = "Jane")]
    pub first_name: String,

    /// Last name
    #[schema(example = "Doe")]
    pub last_name: String,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterResponseBody {
    /// Signed bearer token, valid for 7 days
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,

    /// Token expiry instant
    pub expires_at: chrono::DateTime<chrono::Utc>,

    pub user: RegisteredUserBody,
}

#[derive(Serialize, ToSchema)]
pub struct RegisteredUserBody {
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

fn map_request_error(err: RegisterRequestError) -> HttpResponse {
    match err {
        RegisterRequestError::EmptyEmail | RegisterRequestError::InvalidEmailFormat => {
            ApiResponse::bad_request("INVALID_EMAIL", &err.to_string())
        }
        RegisterRequestError::PasswordTooShort => {
            ApiResponse::bad_request("INVALID_PASSWORD", &err.to_string())
        }
        RegisterRequestError::EmptyFirstName
        | RegisterRequestError::EmptyLastName
        | RegisterRequestError::NameTooLong => {
            ApiResponse::bad_request("INVALID_NAME", &err.to_string())
        }
    }
}

fn map_register_error(err: RegisterError, email: &str) -> HttpResponse {
    match err {
        RegisterError::EmailAlreadyRegistered => {
            warn!(email = %email, "Registration rejected: email taken");
            ApiResponse::conflict("EMAIL_ALREADY_REGISTERED", "Email is already registered")
        }
        other => {
            error!(email = %email, error = %other, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new user
///
/// Creates an account and returns a bearer token for immediate use.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterRequestDto,
    responses(
        (
            status = 201,
            description = "Account created",
            body = inline(SuccessResponse<RegisterResponseBody>),
        ),
        (
            status = 400,
            description = "Invalid registration input",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_EMAIL",
                    "message": "Invalid email format"
                }
            })
        ),
        (
            status = 409,
            description = "Email already registered",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "EMAIL_ALREADY_REGISTERED",
                    "message": "Email is already registered"
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
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(email = %dto.email, "Registration attempt");

    let request = match RegisterRequest::new(dto.email, dto.password, dto.first_name, dto.last_name)
    {
        Ok(request) => request,
        Err(err) => return map_request_error(err),
    };

    let email = request.email().to_string();

    match data.auth.register.execute(request).await {
        Ok(response) => ApiResponse::created(response),
        Err(err) => map_register_error(err, &email),
    }
}
