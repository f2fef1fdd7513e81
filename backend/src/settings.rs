//! Application settings loaded via OrthoConfig.
//!
//! Values come from `ACCOUNT_API_*` environment variables, an optional
//! configuration file, or command-line flags; unset fields fall back to the
//! defaults exposed by the accessors.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{DEFAULT_MIN_PASSWORD_LENGTH, PasswordPolicy};

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ACCOUNT_API")]
pub struct AppSettings {
    /// Interface to bind.
    pub host: Option<IpAddr>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Minimum password length in characters.
    pub min_password_length: Option<usize>,
    /// Emit human-readable logs instead of JSON.
    #[ortho_config(default = false)]
    pub pretty_logs: bool,
}

impl AppSettings {
    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Password policy enforced at registration.
    pub fn password_policy(&self) -> PasswordPolicy {
        PasswordPolicy::new(
            self.min_password_length
                .unwrap_or(DEFAULT_MIN_PASSWORD_LENGTH),
        )
    }
}
