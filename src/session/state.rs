//! Mutable session record

use super::Message;

/// Transcript, draft and busy flag for one conversation.
///
/// `busy` is true exactly while one request cycle is outstanding. The
/// transcript is append-only.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    transcript: Vec<Message>,
    draft: String,
    busy: bool,
}

impl SessionState {
    #[allow(dead_code)] // Used by tests
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the draft unconditionally
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn append_message(&mut self, msg: Message) {
        self.transcript.push(msg);
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    /// Commit the draft as a user message.
    ///
    /// A blank (empty or all-whitespace) draft is silently discarded and
    /// `None` is returned. Otherwise the untrimmed draft is appended as a user
    /// message, the draft is cleared, and the accepted content is returned.
    pub fn accept_submission(&mut self) -> Option<String> {
        if self.draft.trim().is_empty() {
            return None;
        }

        let content = std::mem::take(&mut self.draft);
        self.transcript.push(Message::user(content.clone()));
        Some(content)
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.transcript.last()
    }
}
