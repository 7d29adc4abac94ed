//! Session state for one conversation
//!
//! Owns the transcript, the draft input and the busy flag. Only the request
//! cycle in `runtime` writes to it; presentation layers read it through a
//! [`SessionHandle`].

mod handle;
mod message;
mod state;

#[cfg(test)]
mod proptests;

pub use handle::SessionHandle;
pub use message::{Message, Sender};
pub use state::SessionState;
