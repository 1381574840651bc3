use std::net::SocketAddr;
use std::str::FromStr;

use blobd_types::DEFAULT_MAX_REPOSITORY_LENGTH;

use crate::error::{ServerError, ServerResult};

/// Default cap on accepted request body size, in bytes.
pub const DEFAULT_MAX_BLOB_LENGTH: usize = 10_000_000;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub max_blob_length: usize,
    pub max_repository_length: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)),
            max_blob_length: DEFAULT_MAX_BLOB_LENGTH,
            max_repository_length: DEFAULT_MAX_REPOSITORY_LENGTH,
        }
    }
}

impl ServerConfig {
    /// Build a configuration from the process environment.
    ///
    /// Recognized variables: `MAX_BLOB_LENGTH`, `MAX_REPOSITORY_LENGTH`,
    /// `PORT`. Unset variables fall back to defaults; a set-but-malformed
    /// value is a startup error rather than a silent fallback.
    pub fn from_env() -> ServerResult<Self> {
        let mut config = Self::default();
        if let Some(max) = optional_number("MAX_BLOB_LENGTH")? {
            config.max_blob_length = max;
        }
        if let Some(max) = optional_number("MAX_REPOSITORY_LENGTH")? {
            config.max_repository_length = max;
        }
        if let Some(port) = optional_number("PORT")? {
            config.bind_addr.set_port(port);
        }
        Ok(config)
    }
}

fn optional_number<T: FromStr>(name: &str) -> ServerResult<Option<T>> {
    match std::env::var(name) {
        Ok(value) => value.trim().parse().map(Some).map_err(|_| {
            ServerError::Config(format!("{name} must be a number, got {value:?}"))
        }),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(ServerError::Config(format!(
            "{name} is not valid unicode"
        ))),
    }
}
