//! Request cycle phase

use crate::session::SessionState;

/// Where a session is in its request cycle.
///
/// Derived from the session's busy flag rather than stored, so a busy
/// session always has exactly one outstanding cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CyclePhase {
    /// Ready for a submission
    #[default]
    Idle,

    /// Query in flight, waiting for the service to answer or fail
    AwaitingReply,
}

impl CyclePhase {
    pub fn of(state: &SessionState) -> Self {
        if state.is_busy() {
            CyclePhase::AwaitingReply
        } else {
            CyclePhase::Idle
        }
    }

    #[allow(dead_code)] // State query utility
    pub fn is_busy(self) -> bool {
        matches!(self, CyclePhase::AwaitingReply)
    }
}
