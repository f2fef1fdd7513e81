//! Wiring of outbound adapters into the driving-port services.

use std::sync::Arc;

use actix_web::web;

use account_api::domain::{AccountRegistryService, TokenIssuerService};
use account_api::inbound::http::state::HttpState;
use account_api::outbound::persistence::{InMemoryAccountRepository, InMemoryTokenStore};
use account_api::outbound::security::Argon2PasswordHasher;

use super::ServerConfig;

/// Build the handler state shared by every worker.
///
/// Both services share one account repository so accounts registered through
/// one endpoint are visible to the other.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let hasher = Arc::new(Argon2PasswordHasher::new());
    let tokens = Arc::new(InMemoryTokenStore::new());

    let registration = AccountRegistryService::new(
        accounts.clone(),
        hasher.clone(),
        config.password_policy,
    );
    let issuer = TokenIssuerService::new(accounts, hasher, tokens);

    web::Data::new(HttpState::new(Arc::new(registration), Arc::new(issuer)))
}
