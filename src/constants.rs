/// User agent string for HTTP requests
pub const USER_AGENT: &str = "weather-app/1.0";

/// weatherapi.com API base URL
pub const WEATHER_API_BASE: &str = "https://api.weatherapi.com/v1";

/// Upstream request timeout, in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Number of forecast days requested from the upstream
pub const FORECAST_DAYS: u8 = 3;

/// Separator placed between formatted alert or forecast blocks
pub const BLOCK_SEPARATOR: &str = "\n---\n";

pub const ALERTS_UNAVAILABLE: &str = "Unable to fetch alerts or no alerts found.";
pub const NO_ACTIVE_ALERTS: &str = "No active alerts for this location.";
pub const FORECAST_UNAVAILABLE: &str = "Unable to fetch forecast data for this location.";
