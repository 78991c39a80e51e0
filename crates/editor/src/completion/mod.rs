//! Suggestion candidates and dropdown state.
//!
//! A suggestion state carries the offset where replacement begins
//! (`query_start`) together with the candidates. It only exists while a
//! trigger is active and at least one candidate matches.

use std::ops::Range;

use entrypad_primitives::CharIdx;
use tracing::trace;

use crate::trigger::Trigger;
use crate::vocabulary::Vocabulary;

/// Returns the vocabulary values that start with `query`, ignoring case.
///
/// Vocabulary order is preserved; an empty query matches every value.
pub fn compute_candidates(query: &str, vocabulary: &Vocabulary) -> Vec<String> {
	let query = query.to_lowercase();
	vocabulary.values().filter(|value| value.to_lowercase().starts_with(&query)).map(str::to_string).collect()
}

/// Dropdown state for an active trigger.
///
/// `candidates` is never empty and `selected` always indexes into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionState {
	query_start: CharIdx,
	query: String,
	candidates: Vec<String>,
	selected: usize,
	scroll_offset: usize,
}

impl SuggestionState {
	/// Returns the offset of the marker that opened the trigger.
	pub fn query_start(&self) -> CharIdx {
		self.query_start
	}

	/// Returns the text typed after the marker.
	pub fn query(&self) -> &str {
		&self.query
	}

	/// Returns the candidates in vocabulary order.
	pub fn candidates(&self) -> &[String] {
		&self.candidates
	}

	/// Returns the highlighted index.
	pub fn selected_index(&self) -> usize {
		self.selected
	}

	/// Returns the highlighted candidate.
	pub fn selected(&self) -> &str {
		&self.candidates[self.selected]
	}

	/// Returns the first visible candidate index of the dropdown window.
	pub fn scroll_offset(&self) -> usize {
		self.scroll_offset
	}

	fn ensure_selected_visible(&mut self, max_visible: usize) {
		if self.selected < self.scroll_offset {
			self.scroll_offset = self.selected;
		}
		let visible_end = self.scroll_offset + max_visible;
		if self.selected >= visible_end {
			self.scroll_offset = self.selected + 1 - max_visible;
		}
	}
}

/// Result of re-deriving suggestions after an edit or caret move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionUpdate {
	/// No trigger is active.
	Inactive,
	/// A trigger is active but nothing matches; the dropdown is hidden.
	NoCandidates,
	/// The trigger was dismissed and stays hidden until a new trigger starts.
	Suppressed,
	/// The dropdown shows at least one candidate.
	Showing,
}

/// Owns the optional [`SuggestionState`] and the dropdown window size.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
	state: Option<SuggestionState>,
	max_visible: usize,
	/// Marker offset of a dismissed trigger; suppresses the dropdown until the trigger changes.
	suppressed_at: Option<CharIdx>,
}

impl SuggestionEngine {
	/// Creates an engine showing at most `max_visible` candidates at once.
	pub fn new(max_visible: usize) -> Self {
		Self {
			state: None,
			max_visible: max_visible.max(1),
			suppressed_at: None,
		}
	}

	/// Returns the current state, if the dropdown is showing.
	pub fn state(&self) -> Option<&SuggestionState> {
		self.state.as_ref()
	}

	/// Returns true if the dropdown is showing.
	pub fn is_active(&self) -> bool {
		self.state.is_some()
	}

	/// Re-derives the state from the trigger detector's latest result.
	///
	/// The highlighted index resets to 0 whenever the query text or its
	/// start offset differs from the previous state, even if the candidate
	/// list is unchanged; otherwise the highlight is kept.
	pub fn update(&mut self, trigger: Option<Trigger>, vocabulary: &Vocabulary) -> SuggestionUpdate {
		let Some(trigger) = trigger else {
			self.suppressed_at = None;
			self.state = None;
			return SuggestionUpdate::Inactive;
		};

		if self.suppressed_at == Some(trigger.query_start) {
			self.state = None;
			return SuggestionUpdate::Suppressed;
		}
		self.suppressed_at = None;

		let candidates = compute_candidates(&trigger.query, vocabulary);
		trace!(query = %trigger.query, start = trigger.query_start, matches = candidates.len(), "Computed candidates");
		if candidates.is_empty() {
			self.state = None;
			return SuggestionUpdate::NoCandidates;
		}

		let keep = self
			.state
			.as_ref()
			.filter(|prev| prev.query == trigger.query && prev.query_start == trigger.query_start)
			.map(|prev| (prev.selected.min(candidates.len() - 1), prev.scroll_offset));
		let (selected, scroll_offset) = keep.unwrap_or((0, 0));

		let mut state = SuggestionState {
			query_start: trigger.query_start,
			query: trigger.query,
			candidates,
			selected,
			scroll_offset,
		};
		state.ensure_selected_visible(self.max_visible);
		self.state = Some(state);
		SuggestionUpdate::Showing
	}

	/// Moves the highlight by `delta`, wrapping at both ends.
	///
	/// Returns the new index, or `None` when no dropdown is showing.
	pub fn move_selection(&mut self, delta: isize) -> Option<usize> {
		let max_visible = self.max_visible;
		let state = self.state.as_mut()?;
		let len = state.candidates.len() as isize;
		state.selected = (state.selected as isize + delta).rem_euclid(len) as usize;
		state.ensure_selected_visible(max_visible);
		Some(state.selected)
	}

	/// Highlights the candidate at `index` (pointer hover).
	///
	/// Returns false and changes nothing if `index` is out of range.
	pub fn select(&mut self, index: usize) -> bool {
		let max_visible = self.max_visible;
		match self.state.as_mut() {
			Some(state) if index < state.candidates.len() => {
				state.selected = index;
				state.ensure_selected_visible(max_visible);
				true
			}
			_ => false,
		}
	}

	/// Returns the range of candidate indices visible in the dropdown window.
	pub fn visible_range(&self) -> Range<usize> {
		match &self.state {
			Some(state) => {
				let end = (state.scroll_offset + self.max_visible).min(state.candidates.len());
				state.scroll_offset..end
			}
			None => 0..0,
		}
	}

	/// Removes and returns the state, leaving the dropdown hidden.
	pub fn take(&mut self) -> Option<SuggestionState> {
		self.state.take()
	}

	/// Hides the dropdown.
	pub fn clear(&mut self) {
		self.state = None;
	}

	/// Hides the dropdown and keeps it hidden while the current trigger persists.
	pub fn dismiss(&mut self) {
		if let Some(state) = self.state.take() {
			self.suppress_at(state.query_start);
		}
	}

	/// Keeps the trigger whose marker sits at `query_start` from reopening the dropdown.
	pub fn suppress_at(&mut self, query_start: CharIdx) {
		self.state = None;
		self.suppressed_at = Some(query_start);
	}
}

#[cfg(test)]
mod tests;
