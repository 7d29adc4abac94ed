//! Pure state transition function

use super::{CyclePhase, Effect, Event};
use thiserror::Error;

/// Shown in place of a reply whenever the query fails, whatever the cause
pub const APOLOGY_MESSAGE: &str = "Sorry, there was an error processing your request.";

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_phase: CyclePhase,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(phase: CyclePhase) -> Self {
        Self {
            new_phase: phase,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Errors that can occur during transition
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("A reply is still pending, cannot accept another submission")]
    Busy,
    #[error("Unexpected event {event} while {phase:?}")]
    UnexpectedEvent {
        phase: CyclePhase,
        event: &'static str,
    },
}

/// Pure transition function
///
/// Given the same phase and event it always produces the same result and
/// performs no I/O. Message construction and the query itself are left to
/// the runtime through effects.
pub fn transition(phase: CyclePhase, event: Event) -> Result<TransitionResult, TransitionError> {
    match (phase, event) {
        // Blank drafts are dropped without a trace
        (CyclePhase::Idle, Event::SubmitRequested { draft }) if draft.trim().is_empty() => {
            Ok(TransitionResult::new(CyclePhase::Idle))
        }

        (CyclePhase::Idle, Event::SubmitRequested { draft }) => {
            Ok(TransitionResult::new(CyclePhase::AwaitingReply)
                .with_effect(Effect::AcceptDraft)
                .with_effect(Effect::SetBusy(true))
                .with_effect(Effect::issue_query(draft)))
        }

        // One outstanding query per session
        (CyclePhase::AwaitingReply, Event::SubmitRequested { .. }) => Err(TransitionError::Busy),

        (CyclePhase::AwaitingReply, Event::ReplyReceived { text }) => {
            Ok(TransitionResult::new(CyclePhase::Idle)
                .with_effect(Effect::append_bot_message(text))
                .with_effect(Effect::SetBusy(false)))
        }

        // Raw detail goes to the log, the transcript only sees the apology
        (CyclePhase::AwaitingReply, Event::QueryFailed { error }) => {
            Ok(TransitionResult::new(CyclePhase::Idle)
                .with_effect(Effect::log_failure(error.kind, error.message))
                .with_effect(Effect::append_bot_message(APOLOGY_MESSAGE))
                .with_effect(Effect::SetBusy(false)))
        }

        (phase @ CyclePhase::Idle, event @ (Event::ReplyReceived { .. } | Event::QueryFailed { .. })) => {
            Err(TransitionError::UnexpectedEvent {
                phase,
                event: event.name(),
            })
        }
    }
}
