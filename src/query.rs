//! Client side of the external query service
//!
//! The service is treated as a function of query text to answer text.

mod error;
mod http;
mod types;

pub use error::{QueryError, QueryErrorKind};
pub use http::HttpQueryClient;

use async_trait::async_trait;
use std::sync::Arc;

/// Common interface for reaching the query service
#[async_trait]
pub trait QueryClient: Send + Sync {
    /// Send one query and return the answer text
    async fn query(&self, user_query: &str) -> Result<String, QueryError>;

    /// Human-readable target, used in logs
    fn endpoint(&self) -> &str;
}

#[async_trait]
impl<T: QueryClient + ?Sized> QueryClient for Arc<T> {
    async fn query(&self, user_query: &str) -> Result<String, QueryError> {
        (**self).query(user_query).await
    }

    fn endpoint(&self) -> &str {
        (**self).endpoint()
    }
}

/// Logging wrapper for query clients
pub struct LoggingClient {
    inner: Arc<dyn QueryClient>,
    endpoint: String,
}

impl LoggingClient {
    pub fn new(inner: Arc<dyn QueryClient>) -> Self {
        let endpoint = inner.endpoint().to_string();
        Self { inner, endpoint }
    }
}

#[async_trait]
impl QueryClient for LoggingClient {
    async fn query(&self, user_query: &str) -> Result<String, QueryError> {
        let start = std::time::Instant::now();
        let result = self.inner.query(user_query).await;
        let duration = start.elapsed();

        match &result {
            Ok(answer) => {
                tracing::info!(
                    endpoint = %self.endpoint,
                    duration_ms = %duration.as_millis(),
                    query_chars = user_query.chars().count(),
                    answer_chars = answer.chars().count(),
                    "Query completed"
                );
            }
            Err(e) => {
                // Detail is logged once, when the cycle records the failure
                tracing::debug!(
                    endpoint = %self.endpoint,
                    duration_ms = %duration.as_millis(),
                    kind = e.kind.as_str(),
                    "Query returned an error"
                );
            }
        }

        result
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
