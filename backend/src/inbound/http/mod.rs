//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod tokens;
pub mod users;

use actix_web::web;

pub use error::{ApiResult, json_error_handler};

/// Register the versioned API scope.
///
/// JSON body failures are routed through [`json_error_handler`] so clients
/// always receive the standard error payload.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use account_api::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(users::create_user)
            .service(tokens::create_token),
    );
}
