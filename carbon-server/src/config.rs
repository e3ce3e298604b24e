//! Server configuration loaded from environment variables.

use std::net::SocketAddr;

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Default directory for static assets.
const DEFAULT_STATIC_DIR: &str = "static";

/// Default geocoding API base URL.
const DEFAULT_GEOCODE_BASE_URL: &str = "https://maps.googleapis.com";

/// Default geocoding request timeout in seconds.
const DEFAULT_GEOCODE_TIMEOUT_SECS: u64 = 10;

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but can't be parsed
    #[error("invalid {name}: {value:?} ({reason})")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Configuration for the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: SocketAddr,
    /// Directory served under `/static`
    pub static_dir: String,
    /// Google Maps API key; the mock location search is used without one
    pub google_maps_api_key: Option<String>,
    /// Base URL for the geocoding API
    pub geocode_base_url: String,
    /// Geocoding request timeout in seconds
    pub geocode_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
            google_maps_api_key: None,
            geocode_base_url: DEFAULT_GEOCODE_BASE_URL.to_string(),
            geocode_timeout_secs: DEFAULT_GEOCODE_TIMEOUT_SECS,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// Reads `CARBON_BIND_ADDR`, `CARBON_STATIC_DIR`, `GOOGLE_MAPS_API_KEY`,
    /// `GEOCODE_BASE_URL` and `GEOCODE_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let bind_addr = get("CARBON_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                name: "CARBON_BIND_ADDR",
                value: bind_addr.clone(),
                reason: e.to_string(),
            })?;

        let geocode_timeout_secs = match get("GEOCODE_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                name: "GEOCODE_TIMEOUT_SECS",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_GEOCODE_TIMEOUT_SECS,
        };

        Ok(Self {
            bind_addr,
            static_dir: get("CARBON_STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            google_maps_api_key: get("GOOGLE_MAPS_API_KEY"),
            geocode_base_url: get("GEOCODE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEOCODE_BASE_URL.to_string()),
            geocode_timeout_secs,
        })
    }

    /// Set the listen address.
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Set the static asset directory.
    pub fn with_static_dir(mut self, dir: impl Into<String>) -> Self {
        self.static_dir = dir.into();
        self
    }

    /// Set the Google Maps API key.
    pub fn with_google_maps_api_key(mut self, key: impl Into<String>) -> Self {
        self.google_maps_api_key = Some(key.into());
        self
    }
}
