//! Host configuration.
//!
//! DESIGN
//! ======
//! Everything comes from the environment (a `.env` file is loaded first when
//! present). Numeric settings fall back to their defaults when missing or
//! unparseable; a malformed store origin is a startup error because every
//! proxied request would fail with it.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:3001";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PROXY_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PROXY_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid GAME_HAVEN_API_ORIGIN {0:?}: expected an http:// or https:// origin")]
    InvalidOrigin(String),
}

/// Limits applied to every proxied request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProxyLimits {
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub max_body_bytes: usize,
}

impl Default for ProxyLimits {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_PROXY_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_PROXY_CONNECT_TIMEOUT_SECS,
            max_body_bytes: DEFAULT_PROXY_MAX_BODY_BYTES,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Store API origin without a trailing slash, e.g. `http://localhost:3001`.
    pub api_origin: String,
    pub proxy: ProxyLimits,
}

impl HostConfig {
    /// Read configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOrigin`] when `GAME_HAVEN_API_ORIGIN` is
    /// set to something that is not an http(s) origin.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_origin = parse_origin(lookup("GAME_HAVEN_API_ORIGIN").as_deref())?;
        let proxy = ProxyLimits {
            timeout_secs: parse_or(&lookup, "GAME_HAVEN_PROXY_TIMEOUT_SECS", DEFAULT_PROXY_TIMEOUT_SECS),
            connect_timeout_secs: parse_or(
                &lookup,
                "GAME_HAVEN_PROXY_CONNECT_TIMEOUT_SECS",
                DEFAULT_PROXY_CONNECT_TIMEOUT_SECS,
            ),
            max_body_bytes: parse_or(&lookup, "GAME_HAVEN_PROXY_MAX_BODY_BYTES", DEFAULT_PROXY_MAX_BODY_BYTES),
        };
        Ok(Self { port: parse_or(&lookup, "PORT", DEFAULT_PORT), api_origin, proxy })
    }
}

fn parse_or<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_origin(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_API_ORIGIN.to_owned());
    };
    let origin = raw.trim_end_matches('/');
    let host = origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"))
        .ok_or_else(|| ConfigError::InvalidOrigin(raw.to_owned()))?;
    if host.is_empty() || host.contains(char::is_whitespace) {
        return Err(ConfigError::InvalidOrigin(raw.to_owned()));
    }
    Ok(origin.to_owned())
}
