//! Events that drive the request cycle

use crate::query::QueryError;

/// Events that trigger state transitions
#[derive(Debug, Clone)]
pub enum Event {
    // User events
    /// Submit was pressed; carries the draft as it stands
    SubmitRequested { draft: String },

    // Query service events
    ReplyReceived { text: String },
    QueryFailed { error: QueryError },
}

impl Event {
    pub fn from_query_result(result: Result<String, QueryError>) -> Self {
        match result {
            Ok(text) => Event::ReplyReceived { text },
            Err(error) => Event::QueryFailed { error },
        }
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Event::SubmitRequested { .. } => "submit_requested",
            Event::ReplyReceived { .. } => "reply_received",
            Event::QueryFailed { .. } => "query_failed",
        }
    }
}
