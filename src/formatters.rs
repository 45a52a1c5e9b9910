use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::constants::{ALERTS_UNAVAILABLE, BLOCK_SEPARATOR, FORECAST_UNAVAILABLE, NO_ACTIVE_ALERTS};
use crate::models::{ForecastDay, ForecastResponse};

/// Formats the alerts section of a forecast document into a human-readable string
///
/// Fails only when `alerts` is present but carries no usable `alert` list.
pub fn format_alerts(document: Option<&Value>) -> Result<String> {
    let Some(alerts) = usable(document).and_then(|d| d.get("alerts")) else {
        return Ok(ALERTS_UNAVAILABLE.to_string());
    };

    let entries = alerts
        .get("alert")
        .context("Alerts section has no `alert` list")?;
    if is_falsy(entries) {
        return Ok(NO_ACTIVE_ALERTS.to_string());
    }

    let entries = entries
        .as_array()
        .context("Alerts section `alert` is not a list")?;
    Ok(entries
        .iter()
        .map(format_alert)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR))
}

/// Formats a single alert; every missing field falls back to fixed text
pub fn format_alert(alert: &Value) -> String {
    format!(
        "\nHeadline: {}\nEvent: {}\nSeverity: {}\nUrgency: {}\nCertainty: {}\nCategory: {}\nEffective: {}\nExpires: {}\nDescription: {}\nInstructions: {}\n",
        field_or(alert, "headline", "No headline available"),
        field_or(alert, "event", "Unknown"),
        field_or(alert, "severity", "Unknown"),
        field_or(alert, "urgency", "Unknown"),
        field_or(alert, "certainty", "Unknown"),
        field_or(alert, "category", "Unknown"),
        field_or(alert, "effective", "Unknown"),
        field_or(alert, "expires", "Unknown"),
        field_or(alert, "desc", "No description available"),
        field_or(alert, "instruction", "No specific instructions provided"),
    )
}

/// Formats the daily forecast of a forecast document into a human-readable string
///
/// Day fields are required: a malformed document is an error, not a fallback.
pub fn format_forecast(document: Option<&Value>) -> Result<String> {
    let Some(document) = usable(document) else {
        return Ok(FORECAST_UNAVAILABLE.to_string());
    };

    let response =
        ForecastResponse::deserialize(document).context("Malformed forecast document")?;

    Ok(response
        .forecast
        .forecast_days
        .iter()
        .map(format_forecast_day)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR))
}

fn format_forecast_day(period: &ForecastDay) -> String {
    let day = &period.day;
    format!(
        "\n{}:\nMaxTemperature: {}\u{00b0}C\nMinTemperature: {}\u{00b0}C\nCondition: {}\nWind: {} kph\nHumidity: {}%\nChance of Rain: {}%\n",
        period.date,
        day.max_temp_c,
        day.min_temp_c,
        day.condition.text,
        day.max_wind_kph,
        day.avg_humidity,
        day.daily_chance_of_rain
    )
}

/// Looks up `key`, substituting `default` when it is missing or null
fn field_or(object: &Value, key: &str, default: &str) -> String {
    match object.get(key) {
        None | Some(Value::Null) => default.to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// An empty or null document carries nothing worth formatting
fn usable(document: Option<&Value>) -> Option<&Value> {
    document.filter(|d| !is_falsy(d))
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
