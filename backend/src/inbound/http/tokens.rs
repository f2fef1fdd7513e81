//! Token issuance handler.
//!
//! ```text
//! POST /api/v1/tokens {"email":"test@gmail.com","password":"password"}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{Error, LoginCredentials, LoginValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Token request body for `POST /api/v1/tokens`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateTokenRequest {
    #[serde(default)]
    #[schema(example = "test@gmail.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "password", format = Password)]
    pub password: String,
}

impl TryFrom<CreateTokenRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: CreateTokenRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.email, &value.password)
    }
}

/// Body returned with a freshly issued token.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateTokenResponse {
    #[schema(example = "9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b")]
    pub token: String,
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::EmptyEmail => Error::invalid_request("email must not be empty")
            .with_details(json!({ "field": "email", "code": "missing_field" })),
        LoginValidationError::EmptyPassword => Error::invalid_request("password must not be empty")
            .with_details(json!({ "field": "password", "code": "missing_field" })),
    }
}

/// Exchange email and password for a bearer token.
#[utoipa::path(
    post,
    path = "/api/v1/tokens",
    request_body = CreateTokenRequest,
    responses(
        (status = 200, description = "Token issued", body = CreateTokenResponse),
        (status = 400, description = "Missing fields or invalid credentials", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["tokens"],
    operation_id = "createToken"
)]
#[post("/tokens")]
pub async fn create_token(
    state: web::Data<HttpState>,
    payload: web::Json<CreateTokenRequest>,
) -> ApiResult<web::Json<CreateTokenResponse>> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    let token = state.tokens.issue_token(&credentials).await?;
    Ok(web::Json(CreateTokenResponse {
        token: token.expose().to_owned(),
    }))
}
