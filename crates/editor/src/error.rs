use entrypad_buffer::BufferError;
use thiserror::Error;

/// Failures of the entry engine.
///
/// None of these are user-facing: they indicate the trigger detector, the
/// suggestion state, and the buffer disagree about where things are.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryEditError {
	/// The buffer rejected an edit the engine computed.
	#[error("buffer rejected entry edit: {0}")]
	Buffer(#[from] BufferError),

	/// A precondition of an entry operation does not hold.
	#[error("entry engine invariant violated: {0}")]
	InvariantViolation(String),
}
