use crate::domain::model::IP_NOT_FOUND;
use crate::domain::ports::{ConfigProvider, UserDirectory};
use crate::utils::error::{LookupError, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;

pub const DEFAULT_BASE_URL: &str = "https://discord.com";

/// Client for the `/api/v9/users/{id}` endpoint. Requests go out with
/// reqwest's default headers and no authorization.
pub struct DiscordClient {
    base_url: String,
    client: Client,
}

impl DiscordClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.base_url())
    }

    /// The identifier is inserted as-is; no percent-encoding is applied here.
    pub fn user_url(&self, discord_id: &str) -> String {
        format!("{}/api/v9/users/{}", self.base_url, discord_id)
    }
}

impl Default for DiscordClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl UserDirectory for DiscordClient {
    async fn lookup_ip(&self, discord_id: &str) -> Result<String> {
        let url = self.user_url(discord_id);
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status != StatusCode::OK {
            return Err(LookupError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let user_data: Value = serde_json::from_slice(&body)?;
        extract_ip(&user_data)
    }
}

/// Reads `ip` from a user object. Non-string values are rendered as JSON text.
pub fn extract_ip(user_data: &Value) -> Result<String> {
    let obj = user_data
        .as_object()
        .ok_or_else(|| LookupError::UnexpectedBody {
            message: format!("expected a JSON object, got: {}", user_data),
        })?;

    Ok(match obj.get("ip") {
        Some(Value::String(ip)) => ip.clone(),
        Some(other) => other.to_string(),
        None => IP_NOT_FOUND.to_string(),
    })
}
