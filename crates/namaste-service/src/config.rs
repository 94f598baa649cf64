//! Service configuration from environment variables.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use namaste_resolver::ResolverConfig;

/// Default mapping file.
pub const DEFAULT_DATA_PATH: &str = "data/namaste_codes.csv";
/// Default bind host.
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Default bind port.
pub const DEFAULT_PORT: u16 = 8082;
/// Default per-query timeout in milliseconds.
pub const DEFAULT_QUERY_TIMEOUT_MS: u64 = 5000;

/// Runtime settings for the terminology server.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// CSV or JSON file with the code mappings.
    pub data_path: PathBuf,
    /// Host to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Upper bound on a single store query.
    pub query_timeout: Duration,
    /// Resolver tunables.
    pub resolver: ResolverConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            query_timeout: Duration::from_millis(DEFAULT_QUERY_TIMEOUT_MS),
            resolver: ResolverConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Reads `NAMASTE_DATA_PATH`, `NAMASTE_HOST`, `NAMASTE_PORT` and
    /// `NAMASTE_QUERY_TIMEOUT_MS`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    ///
    /// Values that fail to parse are logged and replaced by their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let timeout_ms = parsed_or(&lookup, "NAMASTE_QUERY_TIMEOUT_MS", DEFAULT_QUERY_TIMEOUT_MS);

        Self {
            data_path: lookup("NAMASTE_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            host: lookup("NAMASTE_HOST").unwrap_or(defaults.host),
            port: parsed_or(&lookup, "NAMASTE_PORT", DEFAULT_PORT),
            query_timeout: Duration::from_millis(timeout_ms),
            resolver: defaults.resolver,
        }
    }

    /// Address to bind, as `host:port`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parsed_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid value '{}' for {}, using default {}", raw, key, default);
            default
        }),
        None => default,
    }
}
