//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the account and token endpoints, the health probes,
//! and the schema wrappers from [`crate::inbound::http::schemas`]. The document
//! is served by Swagger UI in debug builds. Both API endpoints are anonymous,
//! so no security scheme is declared.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::tokens::{CreateTokenRequest, CreateTokenResponse};
use crate::inbound::http::users::{CreateUserRequest, CreateUserResponse};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Account API",
        description = "User registration and token issuance.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::tokens::create_token,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateUserRequest,
        CreateUserResponse,
        CreateTokenRequest,
        CreateTokenResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "users", description = "Account registration"),
        (name = "tokens", description = "Credential exchange for bearer tokens"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
