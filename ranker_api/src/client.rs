//! HTTP client for the remote scoring service.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::{
    types::{AiScoreRequest, AiScoreResponse, Candidate, RankRequest, RankResponse},
    Error,
};

/// HTTP client for the candidate scoring service.
///
/// The base URL is injected at construction and never read from ambient
/// process state. Each request builds a fresh `reqwest::Client` with a
/// 30-second timeout.
pub struct Client {
    /// Base URL for the service. Defaults to the local dev backend.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the local development backend.
    pub fn new() -> Self {
        Self {
            base_api_url: "http://127.0.0.1:8000".to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Also used for testing
    /// with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
        }
    }

    /// The base URL this client was constructed with.
    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })
    }

    fn http_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })
    }

    async fn read_body<T>(&self, resp: reqwest::Response) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse response: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        Ok(parsed)
    }

    async fn get<T>(&self, path: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(path)?;
        let resp = self
            .http_client()?
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;
        self.read_body(resp).await
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = self.get_url(path)?;
        let resp = self
            .http_client()?
            .post(url)
            .header("accept", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to post resource: {}", e);
                Error::RequestFailed
            })?;
        self.read_body(resp).await
    }

    /// Fetches the sample candidate list. The endpoint returns a raw JSON
    /// array with no envelope.
    pub async fn sample_data(&self) -> Result<Vec<Candidate>, Error> {
        self.get::<Vec<Candidate>>("/sample-data").await
    }

    /// Submits the given applicants for ranking and returns them in
    /// service-scored order.
    pub async fn rank(&self, request: &RankRequest) -> Result<RankResponse, Error> {
        self.post::<RankResponse, RankRequest>("/rank", request).await
    }

    /// Requests a secondary AI assessment for a single candidate.
    pub async fn ai_score(&self, request: &AiScoreRequest) -> Result<AiScoreResponse, Error> {
        self.post::<AiScoreResponse, AiScoreRequest>("/ai-score", request)
            .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Back off to the previous char boundary so the slice cannot land
    // inside a multibyte character.
    let mut cut = MAX;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...[truncated]", &body[..cut])
}
