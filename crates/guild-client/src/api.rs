//! Typed HTTP client for `/api/guilds`

use std::time::Duration;

use guild_common::ErrorResponse;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, instrument};

use crate::error::{ClientError, ClientResult};

/// Request timeout applied by [`GuildApiClient::new`]
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Guild as returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildRecord {
    pub id: i64,
    pub name: String,
    pub level: i64,
}

/// Client for the guild REST API
#[derive(Debug, Clone)]
pub struct GuildApiClient {
    client: Client,
    base_url: String,
}

impl GuildApiClient {
    /// Create a client for the server at `base_url` (e.g. `http://127.0.0.1:3001`)
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client reusing an existing `reqwest::Client`
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn guilds_url(&self) -> String {
        format!("{}/api/guilds", self.base_url)
    }

    fn guild_url(&self, id: i64) -> String {
        format!("{}/api/guilds/{id}", self.base_url)
    }

    /// GET /api/guilds
    #[instrument(skip(self))]
    pub async fn list(&self) -> ClientResult<Vec<GuildRecord>> {
        let response = self.client.get(self.guilds_url()).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// POST /api/guilds; a `None` level lets the server pick the default
    #[instrument(skip(self))]
    pub async fn create(&self, name: &str, level: Option<i64>) -> ClientResult<GuildRecord> {
        let body = match level {
            Some(level) => json!({ "name": name, "level": level }),
            None => json!({ "name": name }),
        };
        let response = self.client.post(self.guilds_url()).json(&body).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// PUT /api/guilds/{id}
    #[instrument(skip(self))]
    pub async fn update(&self, id: i64, name: &str, level: i64) -> ClientResult<GuildRecord> {
        let body = json!({ "name": name, "level": level });
        let response = self.client.put(self.guild_url(id)).json(&body).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// DELETE /api/guilds/{id}
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        let response = self.client.delete(self.guild_url(id)).send().await?;
        check(response).await?;
        Ok(())
    }
}

/// Turn a non-2xx response into `ClientError::Api`
async fn check(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("(No details provided)")
            .to_string(),
    };
    debug!(status = status.as_u16(), %message, "Request rejected");

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
