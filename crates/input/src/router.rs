//! Key router managing the Idle/Suggesting state.

use entrypad_primitives::{Key, KeyCode};
use tracing::debug;

use crate::types::{KeyResult, RouterEvent, RouterState};

/// Two-state machine that claims dropdown keys only while suggestions show.
///
/// Stateless with respect to the buffer and the candidate list. Returns
/// [`KeyResult`] values that the editor session interprets, and is told
/// about suggestion changes through [`InputRouter::apply`].
#[derive(Debug, Clone, Default)]
pub struct InputRouter {
	state: RouterState,
}

impl InputRouter {
	/// Creates a router in the idle state.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the current state.
	pub fn state(&self) -> RouterState {
		self.state
	}

	/// Returns true while the dropdown is showing.
	pub fn is_suggesting(&self) -> bool {
		self.state == RouterState::Suggesting
	}

	/// Applies a transition signal and returns the resulting state.
	pub fn apply(&mut self, event: RouterEvent) -> RouterState {
		let next = match (self.state, event) {
			(RouterState::Idle | RouterState::Suggesting, RouterEvent::SuggestionsShown) => RouterState::Suggesting,
			(RouterState::Suggesting, RouterEvent::TriggerInactive | RouterEvent::CandidatesEmptied | RouterEvent::Accepted | RouterEvent::Dismissed) => {
				RouterState::Idle
			}
			(RouterState::Idle, _) => RouterState::Idle,
		};
		self.transition(next, event);
		next
	}

	fn transition(&mut self, next: RouterState, cause: RouterEvent) {
		if self.state != next {
			debug!(from = ?self.state, to = ?next, ?cause, "Router transition");
		}
		self.state = next;
	}

	/// Routes a key.
	///
	/// While idle every key passes through. While suggesting, Down/Up
	/// navigate (Shift allowed), plain Enter/Tab accept the highlighted
	/// candidate, and plain Escape commits the typed query; accepting or
	/// committing returns the router to idle. Chords with Ctrl or Alt always
	/// pass through.
	pub fn handle_key(&mut self, key: Key) -> KeyResult {
		if self.state == RouterState::Idle || key.modifiers.is_chord() {
			return KeyResult::PassThrough;
		}

		let result = match key.code {
			KeyCode::Down => KeyResult::Navigate(1),
			KeyCode::Up => KeyResult::Navigate(-1),
			_ if key.is_enter() || key.is_tab() => KeyResult::AcceptSelected,
			_ if key.is_escape() => KeyResult::CommitQuery,
			_ => KeyResult::PassThrough,
		};

		if matches!(result, KeyResult::AcceptSelected | KeyResult::CommitQuery) {
			self.transition(RouterState::Idle, RouterEvent::Accepted);
		}
		result
	}
}
