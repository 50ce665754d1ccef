//! Server settings read from the environment.

use std::time::Duration;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_INACTIVITY_TIMEOUT_HOURS: u64 = 12;
const DEFAULT_CLEANUP_INTERVAL_MINUTES: u64 = 30;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tournaments not accessed for this long are dropped from memory.
    pub inactivity_timeout: Duration,
    /// How often the cleanup task runs.
    pub cleanup_interval: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            inactivity_timeout: Duration::from_secs(DEFAULT_INACTIVITY_TIMEOUT_HOURS * 3600),
            cleanup_interval: Duration::from_secs(DEFAULT_CLEANUP_INTERVAL_MINUTES * 60),
        }
    }
}

/// Parse `key` with `lookup`, falling back to `default` when unset or invalid.
fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                log::warn!("Ignoring invalid {}={:?}, using default", key, raw);
                default
            }
        },
    }
}

impl ServerConfig {
    /// Read HOST, PORT, INACTIVITY_TIMEOUT_HOURS and CLEANUP_INTERVAL_MINUTES.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key/value source (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT);
        let timeout_hours = parse_or(&lookup, "INACTIVITY_TIMEOUT_HOURS", DEFAULT_INACTIVITY_TIMEOUT_HOURS);
        let mut interval_minutes =
            parse_or(&lookup, "CLEANUP_INTERVAL_MINUTES", DEFAULT_CLEANUP_INTERVAL_MINUTES);
        // tokio intervals panic on a zero period
        if interval_minutes == 0 {
            log::warn!("CLEANUP_INTERVAL_MINUTES must be positive, using default");
            interval_minutes = DEFAULT_CLEANUP_INTERVAL_MINUTES;
        }
        Self {
            host,
            port,
            inactivity_timeout: Duration::from_secs(timeout_hours.saturating_mul(3600)),
            cleanup_interval: Duration::from_secs(interval_minutes.saturating_mul(60)),
        }
    }

    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
