use std::net::{IpAddr, SocketAddr};

/// Database name used when `DATABASE_NAME` is unset.
pub const DEFAULT_DATABASE_NAME: &str = "animal_home";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("HOST must be an IP address, got {0:?}")]
    InvalidHost(String),

    #[error("PORT must be a valid u16, got {0:?}")]
    InvalidPort(String),
}

/// Which document store backs the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// No store: reads return empty lists and writes fail.
    Disabled,
    /// Process-local store, emptied on restart.
    Memory,
    /// MongoDB reached through a connection string.
    MongoDb { url: String, database: String },
}

impl StoreConfig {
    /// Interprets `DATABASE_URL` and `DATABASE_NAME`.
    ///
    /// `memory` and any `memory://` URL select the in-memory store; every other
    /// non-empty value is handed to the MongoDB driver as is.
    pub fn from_parts(url: Option<String>, database: Option<String>) -> Self {
        let Some(url) = url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) else {
            return StoreConfig::Disabled;
        };

        if url == "memory" || url.starts_with("memory://") {
            return StoreConfig::Memory;
        }

        StoreConfig::MongoDb {
            url,
            database: database
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string()),
        }
    }

    /// A short label for logs; never includes credentials.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreConfig::Disabled => "none",
            StoreConfig::Memory => "memory",
            StoreConfig::MongoDb { .. } => "mongodb",
        }
    }
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `8000`).
    pub port: u16,
    pub store: StoreConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var         | Default       |
    /// |-----------------|---------------|
    /// | `HOST`          | `0.0.0.0`     |
    /// | `PORT`          | `8000`        |
    /// | `DATABASE_URL`  | unset         |
    /// | `DATABASE_NAME` | `animal_home` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match lookup("HOST") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost(raw))?,
            None => IpAddr::from([0, 0, 0, 0]),
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 8000,
        };

        let store = StoreConfig::from_parts(lookup("DATABASE_URL"), lookup("DATABASE_NAME"));

        Ok(Self { host, port, store })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
