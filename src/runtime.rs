//! Runtime for executing request cycles
//!
//! Feeds events through the pure state machine and applies the resulting
//! effects to the shared session.

mod executor;


pub use executor::ChatRuntime;

use crate::session::Message;

/// Events sent to presentation subscribers
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    MessageAppended { message: Message },
    BusyChanged { busy: bool },
    DraftCleared,
}

/// What became of a `submit()` call
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Draft was blank; nothing happened
    Empty,
    /// A reply is still pending; the draft was left in place
    Busy,
    /// The cycle ran to completion and this bot message was appended
    Completed { reply: Message },
}
