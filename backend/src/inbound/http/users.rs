//! Account creation handler.
//!
//! ```text
//! POST /api/v1/users {"email":"test@gmail.com","password":"password","name":"Name"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::ports::RegistrationRequest;
use crate::domain::AccountProfile;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Registration request body for `POST /api/v1/users`.
///
/// Missing `email` or `password` deserialise as empty strings so they are
/// reported as field validation errors rather than opaque JSON failures.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    #[serde(default)]
    #[schema(example = "test@gmail.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "password", format = Password)]
    pub password: String,
    #[serde(default)]
    #[schema(example = "Name")]
    pub name: Option<String>,
}

impl From<CreateUserRequest> for RegistrationRequest {
    fn from(value: CreateUserRequest) -> Self {
        Self {
            email: value.email,
            password: value.password,
            name: value.name,
        }
    }
}

/// Public account fields returned after registration.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateUserResponse {
    #[schema(example = "test@gmail.com")]
    pub email: String,
    #[schema(example = "Name")]
    pub name: String,
}

impl From<AccountProfile> for CreateUserResponse {
    fn from(value: AccountProfile) -> Self {
        Self {
            email: value.email.into(),
            name: value.name.into(),
        }
    }
}

/// Register a new account.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Account created", body = CreateUserResponse),
        (status = 400, description = "Invalid input or email already registered", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let profile = state
        .registration
        .register(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(CreateUserResponse::from(profile)))
}

#[cfg(test)]
mod tests;
