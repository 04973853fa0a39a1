use anyhow::{Context, Result};
use std::time::Duration;
use tracing::info;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_RELAY_TIMEOUT_SECS: u64 = 30;
const DEFAULT_RELAY_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub cors_permissive: bool,
    pub cors_allowed_origins: Vec<String>,
    /// Upper bound on a whole relay round-trip.
    pub relay_timeout: Duration,
    pub relay_connect_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_addr = lookup("BIND_ADDR")
            .or_else(|| lookup("PORT").map(|p| format!("0.0.0.0:{p}")))
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let cors_permissive = lookup("CORS_PERMISSIVE").is_some();

        let cors_allowed_origins = if cors_permissive {
            Vec::new() // Not used in permissive mode
        } else {
            lookup("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|| "http://localhost:3000".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        };

        let relay_timeout = seconds(&lookup, "RELAY_TIMEOUT_SECS", DEFAULT_RELAY_TIMEOUT_SECS)?;
        let relay_connect_timeout = seconds(
            &lookup,
            "RELAY_CONNECT_TIMEOUT_SECS",
            DEFAULT_RELAY_CONNECT_TIMEOUT_SECS,
        )?;

        Ok(Self {
            bind_addr,
            cors_permissive,
            cors_allowed_origins,
            relay_timeout,
            relay_connect_timeout,
        })
    }

    pub fn log_startup_info(&self) {
        info!("Listening on {}", self.bind_addr);
        info!(
            "Relay timeout {}s (connect {}s)",
            self.relay_timeout.as_secs(),
            self.relay_connect_timeout.as_secs()
        );

        if self.cors_permissive {
            info!("CORS: permissive");
        } else {
            info!("CORS allowed origins: {}", self.cors_allowed_origins.join(", "));
        }
    }
}

fn seconds(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: u64) -> Result<Duration> {
    let Some(raw) = lookup(name) else {
        return Ok(Duration::from_secs(default));
    };
    let secs: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("{name} must be a whole number of seconds, got '{raw}'"))?;
    if secs == 0 {
        anyhow::bail!("{name} must be greater than zero");
    }
    Ok(Duration::from_secs(secs))
}
