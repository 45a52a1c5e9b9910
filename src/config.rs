use clap::Parser;
use std::time::Duration;

use crate::constants::{FORECAST_DAYS, REQUEST_TIMEOUT_SECS, WEATHER_API_BASE};

/// Runtime configuration, read once at startup
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mcp-weatherapi-server",
    about = "MCP server exposing weatherapi.com alerts and forecasts over stdio",
    version
)]
pub struct Config {
    /// weatherapi.com API key (sent as-is, even when empty)
    #[arg(long, env = "WEATHER_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// Base URL of the weather API
    #[arg(long, env = "WEATHER_API_BASE", default_value = WEATHER_API_BASE)]
    pub api_base: String,

    /// Upstream request timeout in seconds
    #[arg(long, env = "WEATHER_API_TIMEOUT_SECS", default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl Config {
    /// Loads `.env` from the working directory, then parses flags and environment
    pub fn load() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("Ignoring unreadable .env file: {}", e);
            }
        }
        Self::parse()
    }

    #[cfg(test)]
    pub fn new(api_key: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: api_base.into(),
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Forecast URL requesting the alerts section too
    pub fn alerts_url(&self, latitude: f64, longitude: f64) -> String {
        format!("{}&alerts=yes&key={}", self.forecast_query(latitude, longitude), self.api_key)
    }

    /// Forecast URL without alerts
    pub fn forecast_url(&self, latitude: f64, longitude: f64) -> String {
        format!("{}&key={}", self.forecast_query(latitude, longitude), self.api_key)
    }

    fn forecast_query(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/forecast.json?q={},{}&days={}",
            self.base_url(),
            latitude,
            longitude,
            FORECAST_DAYS
        )
    }
}
