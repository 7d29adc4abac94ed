//! Wire types for the query service

use serde::{Deserialize, Serialize};

/// Body posted to the query endpoint
#[derive(Debug, Serialize)]
pub struct QueryRequest<'a> {
    pub user_query: &'a str,
}

/// Expected reply body. Extra fields are ignored.
#[derive(Debug, Deserialize)]
pub struct QueryReply {
    pub response: String,
}
