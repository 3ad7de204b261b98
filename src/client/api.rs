//! HTTP access to the items API.

use crate::client::ClientError;
use crate::domain::{Player, PlayerDraft};
use crate::transport::http::types::ErrorBody;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// The five calls the client application makes.
#[async_trait]
pub trait PlayersApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Player>, ClientError>;
    async fn get(&self, id: &str) -> Result<Player, ClientError>;
    async fn create(&self, draft: &PlayerDraft) -> Result<Player, ClientError>;
    async fn update(&self, id: &str, draft: &PlayerDraft) -> Result<Player, ClientError>;
    async fn delete(&self, id: &str) -> Result<(), ClientError>;
}

/// `reqwest` client for `…/api/items`. No timeouts and no retries: a hung
/// request stays pending.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

/// Turns a non-2xx response into `ClientError::Status`, keeping the server's
/// `{error}` message when there is one.
async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let code = status.as_u16();
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("server error, code {}", code),
    };
    Err(ClientError::Status {
        status: code,
        message,
    })
}

async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let resp = check_status(resp).await?;
    Ok(resp.json::<T>().await?)
}

#[async_trait]
impl PlayersApi for ApiClient {
    async fn list(&self) -> Result<Vec<Player>, ClientError> {
        let resp = self.http.get(&self.base_url).send().await?;
        read_json(resp).await
    }

    async fn get(&self, id: &str) -> Result<Player, ClientError> {
        let resp = self.http.get(self.item_url(id)).send().await?;
        read_json(resp).await
    }

    async fn create(&self, draft: &PlayerDraft) -> Result<Player, ClientError> {
        let resp = self.http.post(&self.base_url).json(draft).send().await?;
        read_json(resp).await
    }

    async fn update(&self, id: &str, draft: &PlayerDraft) -> Result<Player, ClientError> {
        let resp = self.http.put(self.item_url(id)).json(draft).send().await?;
        read_json(resp).await
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let resp = self.http.delete(self.item_url(id)).send().await?;
        check_status(resp).await?;
        Ok(())
    }
}
