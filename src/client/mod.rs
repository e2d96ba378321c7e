// File: src/client/mod.rs
use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::core::config::ApiConfig;
use crate::core::error::ApiError;
use crate::models::{Agent, AgentCreate, Resource};

mod resources;

/// Data-access client for the trading bot backend
///
/// One accessor per resource operation; every accessor performs exactly
/// one HTTP call and returns the decoded body or an [`ApiError`]. The base
/// URL is fixed at construction.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client bound to the configured backend
    pub fn new(cfg: &ApiConfig) -> Result<Self, ApiError> {
        let raw = cfg.base_url.trim();
        let base_url = Url::parse(raw)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", raw, e)))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(format!(
                "{}: expected an http(s) URL",
                raw
            )));
        }

        let mut builder = Client::builder();
        if let Some(agent) = &cfg.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        debug!("ApiClient initialized with base URL: {}", base_url);
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Build `<base>/<segments...>`, percent-encoding each segment
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot-be-a-base URLs are rejected in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<Response, ApiError> {
        debug!("Sending {} request to {}", method, url);

        let mut rb = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            rb = rb.json(body);
        }

        let response = rb.send().await.map_err(|e| {
            error!("Error during {} request to {}: {}", method, url, e);
            ApiError::Network {
                method: method.to_string(),
                url: url.to_string(),
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or("Unknown Status");
            let body = response.text().await.ok().filter(|b| !b.trim().is_empty());
            error!(
                "HTTP error during {} request to {}: {} {}",
                method,
                url,
                status.as_u16(),
                status_text
            );
            return Err(ApiError::Status {
                method: method.to_string(),
                url: url.to_string(),
                status: status.as_u16(),
                status_text: status_text.to_string(),
                body,
            });
        }

        debug!("Request to {} successful ({})", url, status);
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(method: &Method, response: Response) -> Result<T, ApiError> {
        let url = response.url().to_string();
        let bytes = response.bytes().await.map_err(|e| {
            error!("Error reading {} response from {}: {}", method, url, e);
            ApiError::Network {
                method: method.to_string(),
                url: url.clone(),
                message: e.to_string(),
            }
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            error!("Unexpected response body from {}: {}", url, e);
            ApiError::Decode {
                url,
                message: e.to_string(),
            }
        })
    }

    /// GET an arbitrary backend path and return the parsed body unmodified
    pub async fn get_json(&self, path: &str) -> Result<JsonValue, ApiError> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let response = self
            .send::<()>(Method::GET, self.endpoint(&segments), None)
            .await?;
        Self::decode(&Method::GET, response).await
    }

    /// GET `<base>/<collection>`
    pub async fn list<R: Resource>(&self) -> Result<Vec<R>, ApiError> {
        let response = self
            .send::<()>(Method::GET, self.endpoint(&[R::COLLECTION]), None)
            .await?;
        Self::decode(&Method::GET, response).await
    }

    /// GET `<base>/<collection>/<id>`
    pub async fn get<R: Resource>(&self, id: &str) -> Result<R, ApiError> {
        let response = self
            .send::<()>(Method::GET, self.endpoint(&[R::COLLECTION, id]), None)
            .await?;
        Self::decode(&Method::GET, response).await
    }

    /// POST `<base>/<collection>`
    pub async fn create<R: Resource>(&self, payload: &R::Create) -> Result<R, ApiError> {
        let response = self
            .send(Method::POST, self.endpoint(&[R::COLLECTION]), Some(payload))
            .await?;
        Self::decode(&Method::POST, response).await
    }

    /// PUT `<base>/<collection>/<id>`
    pub async fn update<R: Resource>(&self, id: &str, payload: &R::Create) -> Result<R, ApiError> {
        let response = self
            .send(Method::PUT, self.endpoint(&[R::COLLECTION, id]), Some(payload))
            .await?;
        Self::decode(&Method::PUT, response).await
    }

    /// DELETE `<base>/<collection>/<id>`; the acknowledgement body is ignored
    pub async fn delete<R: Resource>(&self, id: &str) -> Result<(), ApiError> {
        self.send::<()>(Method::DELETE, self.endpoint(&[R::COLLECTION, id]), None)
            .await?;
        Ok(())
    }
}

/// Agent accessors the dashboard views depend on
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AgentApi: Send + Sync {
    async fn list_agents(&self) -> Result<Vec<Agent>, ApiError>;

    async fn get_agent(&self, id: &str) -> Result<Agent, ApiError>;

    async fn create_agent(&self, agent: &AgentCreate) -> Result<Agent, ApiError>;

    async fn update_agent(&self, id: &str, agent: &AgentCreate) -> Result<Agent, ApiError>;

    async fn delete_agent(&self, id: &str) -> Result<(), ApiError>;
}

#[async_trait]
impl AgentApi for ApiClient {
    async fn list_agents(&self) -> Result<Vec<Agent>, ApiError> {
        ApiClient::list_agents(self).await
    }

    async fn get_agent(&self, id: &str) -> Result<Agent, ApiError> {
        ApiClient::get_agent(self, id).await
    }

    async fn create_agent(&self, agent: &AgentCreate) -> Result<Agent, ApiError> {
        ApiClient::create_agent(self, agent).await
    }

    async fn update_agent(&self, id: &str, agent: &AgentCreate) -> Result<Agent, ApiError> {
        ApiClient::update_agent(self, id, agent).await
    }

    async fn delete_agent(&self, id: &str) -> Result<(), ApiError> {
        ApiClient::delete_agent(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&ApiConfig::new(base)).unwrap()
    }

    #[test]
    fn test_endpoint_joins_collection_and_id() {
        let c = client("http://localhost:8000");
        assert_eq!(
            c.endpoint(&["agents", "1"]).as_str(),
            "http://localhost:8000/agents/1"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        let c = client("http://localhost:8000/api/");
        assert_eq!(
            c.endpoint(&["swarms"]).as_str(),
            "http://localhost:8000/api/swarms"
        );
    }

    #[test]
    fn test_endpoint_encodes_ids_as_single_segment() {
        let c = client("http://localhost:8000");
        assert_eq!(
            c.endpoint(&["agents", "a/b c"]).as_str(),
            "http://localhost:8000/agents/a%2Fb%20c"
        );
    }

    #[test]
    fn test_rejects_unusable_base_urls() {
        for bad in ["", "not a url", "mailto:ops@example.com", "ftp://host/"] {
            let err = ApiClient::new(&ApiConfig::new(bad)).unwrap_err();
            assert!(
                matches!(err, ApiError::InvalidBaseUrl(_)),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_unusable_user_agent_is_a_client_error() {
        let cfg = ApiConfig {
            base_url: "http://localhost:8000".to_string(),
            user_agent: Some("bad\nagent".to_string()),
        };
        let err = ApiClient::new(&cfg).unwrap_err();
        assert!(matches!(err, ApiError::Client(_)), "got {:?}", err);
    }
}
