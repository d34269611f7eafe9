//! Process configuration.

use std::env;
use std::net::SocketAddr;

use tracing::warn;

/// Environment variable holding the listen address.
pub const ADDR_ENV: &str = "QUASAR_ADDR";

/// Server runtime settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
}

impl ServerConfig {
    /// Read settings from the environment. A missing or unparseable
    /// address falls back to the default rather than aborting startup.
    pub fn from_env() -> Self {
        let bind = match env::var(ADDR_ENV) {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "ignoring unparseable QUASAR_ADDR");
                default_addr()
            }),
            Err(_) => default_addr(),
        };
        Self { bind }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_addr(),
        }
    }
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env() {
        env::remove_var(ADDR_ENV);
        assert_eq!(
            ServerConfig::from_env().bind,
            SocketAddr::from(([0, 0, 0, 0], 8080))
        );

        env::set_var(ADDR_ENV, "127.0.0.1:9000");
        assert_eq!(
            ServerConfig::from_env().bind,
            SocketAddr::from(([127, 0, 0, 1], 9000))
        );

        env::set_var(ADDR_ENV, "not-an-address");
        assert_eq!(ServerConfig::from_env().bind, ServerConfig::default().bind);

        env::remove_var(ADDR_ENV);
    }
}
