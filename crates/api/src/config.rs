use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderValue;

/// Invalid value in the server environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Which origins may make cross-origin requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// Any origin (`CORS_ORIGINS=*`, the default).
    Any,
    /// Only the listed origins.
    List(Vec<HeaderValue>),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Start with the seed records (default: `true`).
    pub seed_movies: bool,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default   |
    /// |------------------------|-----------|
    /// | `HOST`                 | `0.0.0.0` |
    /// | `PORT`                 | `3000`    |
    /// | `CORS_ORIGINS`         | `*`       |
    /// | `REQUEST_TIMEOUT_SECS` | `30`      |
    /// | `SEED_MOVIES`          | `true`    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host_raw = var("HOST", "0.0.0.0");
        let host = host_raw
            .parse::<IpAddr>()
            .map_err(|_| invalid("HOST", "an IP address", &host_raw))?;

        let port_raw = var("PORT", "3000");
        let port = port_raw
            .parse::<u16>()
            .map_err(|_| invalid("PORT", "a valid u16", &port_raw))?;

        let cors_origins = parse_cors_origins(&var("CORS_ORIGINS", "*"))?;

        let timeout_raw = var("REQUEST_TIMEOUT_SECS", "30");
        let request_timeout_secs = timeout_raw
            .parse::<u64>()
            .map_err(|_| invalid("REQUEST_TIMEOUT_SECS", "a valid u64", &timeout_raw))?;

        let seed_raw = var("SEED_MOVIES", "true");
        let seed_movies = match seed_raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => true,
            "false" | "0" | "no" => false,
            _ => return Err(invalid("SEED_MOVIES", "a boolean", &seed_raw)),
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            seed_movies,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// `*` (or an empty list) allows any origin; otherwise every entry must be a
/// valid header value.
fn parse_cors_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if entries.is_empty() || entries.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    entries
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|_| invalid("CORS_ORIGINS", "a list of valid origins", origin))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}

fn invalid(var: &'static str, expected: &'static str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        var,
        expected,
        value: value.to_string(),
    }
}
