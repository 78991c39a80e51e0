//! Suggestion-aware key routing.
//!
//! * [`InputRouter`] - Idle/Suggesting state machine deciding which keys the
//!   suggestion dropdown claims before the buffer's default handling runs
//! * [`KeyResult`] - what the editor should do with a claimed key

pub mod router;
#[cfg(test)]
mod tests;
pub mod types;

pub use router::InputRouter;
pub use types::{KeyResult, RouterEvent, RouterState};
