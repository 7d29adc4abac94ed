//! Effects produced by state transitions

use crate::query::QueryErrorKind;

/// Effects to be executed after state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Commit the draft as a user message and clear it
    AcceptDraft,

    /// Set or clear the busy flag
    SetBusy(bool),

    /// Send the accepted text to the query service
    IssueQuery { query: String },

    /// Append a bot message to the transcript
    AppendBotMessage { content: String },

    /// Record a failed query on the operational log
    LogFailure {
        kind: QueryErrorKind,
        detail: String,
    },
}

impl Effect {
    pub fn issue_query(query: impl Into<String>) -> Self {
        Effect::IssueQuery {
            query: query.into(),
        }
    }

    pub fn append_bot_message(content: impl Into<String>) -> Self {
        Effect::AppendBotMessage {
            content: content.into(),
        }
    }

    pub fn log_failure(kind: QueryErrorKind, detail: impl Into<String>) -> Self {
        Effect::LogFailure {
            kind,
            detail: detail.into(),
        }
    }
}
