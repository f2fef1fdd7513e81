//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use account_api::domain::PasswordPolicy;
use account_api::settings::AppSettings;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) password_policy: PasswordPolicy,
}

impl ServerConfig {
    /// Construct a server configuration bound to `bind_addr` with the default
    /// password policy.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            password_policy: PasswordPolicy::default(),
        }
    }

    /// Override the password policy enforced at registration.
    #[must_use]
    pub fn with_password_policy(mut self, policy: PasswordPolicy) -> Self {
        self.password_policy = policy;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

impl From<&AppSettings> for ServerConfig {
    fn from(settings: &AppSettings) -> Self {
        Self::new(settings.bind_addr()).with_password_policy(settings.password_policy())
    }
}
