//! Server configuration from the environment.

use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

use sl_recovery::RecoveryConfig;

/// Where and how to serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Lineup seed. `None` serves the classic ten.
    pub lineup_seed: Option<u64>,
    /// Response seed. `None` seeds from the OS.
    pub quip_seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            lineup_seed: None,
            quip_seed: None,
        }
    }
}

impl ServerConfig {
    /// Load from `SECURELOGIN_*` environment variables.
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using `lookup` in place of the environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: try_load(&lookup, "SECURELOGIN_HOST", defaults.host),
            port: try_load(&lookup, "SECURELOGIN_PORT", defaults.port),
            lineup_seed: try_load_optional(&lookup, "SECURELOGIN_SEED"),
            quip_seed: try_load_optional(&lookup, "SECURELOGIN_QUIP_SEED"),
        }
    }

    /// Override the host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Override the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Override the lineup seed.
    pub fn with_lineup_seed(mut self, seed: u64) -> Self {
        self.lineup_seed = Some(seed);
        self
    }

    /// Override the response seed.
    pub fn with_quip_seed(mut self, seed: u64) -> Self {
        self.quip_seed = Some(seed);
        self
    }

    /// `host:port`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The desk configuration this server runs with.
    pub fn recovery_config(&self) -> RecoveryConfig {
        RecoveryConfig {
            lineup_seed: self.lineup_seed,
            quip_seed: self.quip_seed,
            ..RecoveryConfig::default()
        }
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };
    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}

fn try_load_optional<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = lookup(key)?;
    raw.trim()
        .parse()
        .map_err(|e| warn!("Invalid {key} value {raw:?}: {e}, ignoring"))
        .ok()
}
