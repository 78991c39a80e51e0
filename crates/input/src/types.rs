/// The router's two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouterState {
	/// No dropdown is showing; every key passes through.
	#[default]
	Idle,
	/// A dropdown with at least one candidate is showing.
	Suggesting,
}

/// Signals that drive router transitions outside of key handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterEvent {
	/// An edit or caret move produced a trigger with at least one candidate.
	SuggestionsShown,
	/// The trigger is no longer active (caret moved away, marker deleted).
	TriggerInactive,
	/// The trigger is active but nothing in the vocabulary matches.
	CandidatesEmptied,
	/// A candidate was accepted through a non-key path (pointer click).
	Accepted,
	/// The dropdown was dismissed without committing (blur, click-away).
	Dismissed,
}

/// Result of routing a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
	/// Move the highlighted candidate by `delta`, wrapping around.
	Navigate(isize),
	/// Insert the highlighted candidate as an entry.
	AcceptSelected,
	/// Insert the literal typed query as an entry.
	CommitQuery,
	/// Key was not claimed; the buffer's default handling applies.
	PassThrough,
}

impl KeyResult {
	/// Returns true if the key was claimed and default handling must be suppressed.
	pub fn is_consumed(self) -> bool {
		!matches!(self, KeyResult::PassThrough)
	}
}
