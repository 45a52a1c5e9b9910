use anyhow::Result;
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use std::sync::Arc;

use crate::client::WeatherClient;
use crate::config::Config;
use crate::formatters::{format_alerts, format_forecast};
use crate::models::{GetAlertsRequest, GetForecastRequest};

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    client: WeatherClient,
    config: Arc<Config>,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service instance
    pub fn new(config: Config) -> Result<Self> {
        let client = WeatherClient::new(config.timeout())?;

        Ok(Self {
            client,
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        })
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcp-weatherapi".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A weather information service powered by weatherapi.com. \
                Provides weather alerts and 3-day forecasts for any latitude and longitude."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets active weather alerts for a location
    #[tool(description = "Get weather alerts for a given location. Provide latitude and longitude (e.g., latitude: 52.52, longitude: 13.41 for Berlin).")]
    async fn get_alerts(
        &self,
        Parameters(request): Parameters<GetAlertsRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting alerts for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let url = self.config.alerts_url(request.latitude, request.longitude);
        let document = self.client.fetch(&url).await;

        let formatted = format_alerts(document.as_ref()).map_err(|e| {
            McpError::internal_error(format!("Failed to read alerts: {:#}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(formatted)]))
    }

    /// Gets a 3-day weather forecast for any location worldwide
    #[tool(description = "Get weather forecast for a location anywhere in the world. Provide latitude and longitude (e.g., latitude: 52.52, longitude: 13.41 for Berlin, or latitude: 40.7128, longitude: -74.0060 for New York).")]
    async fn get_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let url = self.config.forecast_url(request.latitude, request.longitude);
        let document = self.client.fetch(&url).await;

        let formatted = format_forecast(document.as_ref()).map_err(|e| {
            McpError::internal_error(format!("Failed to read forecast: {:#}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(formatted)]))
    }
}
