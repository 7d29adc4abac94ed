//! HTTP implementation of the query client

use super::types::{QueryReply, QueryRequest};
use super::{QueryClient, QueryError};
use crate::config::{ClientConfig, ConfigError};
use async_trait::async_trait;
use reqwest::{Client, Url};

/// Posts `{"user_query": ...}` as JSON and reads back `{"response": ...}`
pub struct HttpQueryClient {
    client: Client,
    url: Url,
    endpoint: String,
}

impl HttpQueryClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let url = config.endpoint()?;
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            endpoint: url.to_string(),
            url,
        })
    }

    fn classify_transport_error(e: &reqwest::Error) -> QueryError {
        if e.is_timeout() {
            QueryError::network(format!("Request timeout: {e}"))
        } else if e.is_connect() {
            QueryError::network(format!("Connection failed: {e}"))
        } else {
            QueryError::network(format!("Request failed: {e}"))
        }
    }
}

#[async_trait]
impl QueryClient for HttpQueryClient {
    async fn query(&self, user_query: &str) -> Result<String, QueryError> {
        let response = self
            .client
            .post(self.url.clone())
            .json(&QueryRequest { user_query })
            .send()
            .await
            .map_err(|e| Self::classify_transport_error(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| QueryError::network(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(QueryError::protocol(format!("HTTP {status}: {body}")));
        }

        let reply: QueryReply = serde_json::from_str(&body).map_err(|e| {
            QueryError::protocol(format!("Failed to parse response: {e} - body: {body}"))
        })?;

        Ok(reply.response)
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
