use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Number;

// ============================================================================
// weatherapi.com Forecast Models
// ============================================================================

// Only the forecast path is typed. Alerts are read field by field from the raw
// document so that each missing field can fall back to its own default.

#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub forecast: Forecast,
}

#[derive(Debug, Deserialize)]
pub struct Forecast {
    #[serde(rename = "forecastday")]
    pub forecast_days: Vec<ForecastDay>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    pub day: DaySummary,
}

/// Numbers are kept as received so `25.0` and `80` print the way upstream sent them.
#[derive(Debug, Deserialize)]
pub struct DaySummary {
    #[serde(rename = "maxtemp_c")]
    pub max_temp_c: Number,
    #[serde(rename = "mintemp_c")]
    pub min_temp_c: Number,
    pub condition: Condition,
    #[serde(rename = "maxwind_kph")]
    pub max_wind_kph: Number,
    #[serde(rename = "avghumidity")]
    pub avg_humidity: Number,
    pub daily_chance_of_rain: Number,
}

#[derive(Debug, Deserialize)]
pub struct Condition {
    pub text: String,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Clone, Copy, Deserialize, Serialize, JsonSchema)]
pub struct GetAlertsRequest {
    /// Latitude of the location
    pub latitude: f64,
    /// Longitude of the location
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, JsonSchema)]
pub struct GetForecastRequest {
    /// Latitude of the location
    pub latitude: f64,
    /// Longitude of the location
    pub longitude: f64,
}
