//! Session wiring for one editing surface.
//!
//! The host forwards three kinds of events: content or caret changes
//! ([`EditorSession::on_change`]), keystrokes ([`EditorSession::handle_key`])
//! and editing commands ([`EditorSession::handle_command`]). Pointer events on
//! the dropdown map to [`EditorSession::hover_candidate`],
//! [`EditorSession::accept_candidate`] and [`EditorSession::dismiss`].

use std::ops::Range;

use entrypad_buffer::TextBuffer;
use entrypad_config::EditorConfig;
use entrypad_input::{InputRouter, KeyResult, RouterEvent, RouterState};
use entrypad_primitives::{BlockKey, Key, Marker};
use tracing::{debug, trace};

use crate::completion::{SuggestionEngine, SuggestionState, SuggestionUpdate};
use crate::decoration::{Decoration, decorate_block};
use crate::entry_editor::{CommandOutcome, InsertedEntry, delete_entry_before_cursor, insert_entry, violation};
use crate::error::EntryEditError;
use crate::trigger::detect_trigger_at;
use crate::vocabulary::Vocabulary;

/// Whether a key was consumed by the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
	/// The key was claimed; the host must suppress its default handling.
	Handled,
	/// The host handles the key as usual.
	NotHandled,
}

/// Editing commands the host offers to the session before running its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
	/// Delete backward from the caret.
	Backspace,
	/// Delete forward from the caret.
	DeleteForward,
	/// Split the block at the caret.
	SplitBlock,
}

/// Owns the buffer, vocabulary, suggestions, and key router of one surface.
#[derive(Debug)]
pub struct EditorSession<B: TextBuffer> {
	buffer: B,
	vocabulary: Vocabulary,
	marker: Marker,
	placeholder: String,
	suggestions: SuggestionEngine,
	router: InputRouter,
}

impl<B: TextBuffer> EditorSession<B> {
	/// Creates a session over `buffer` with the vocabulary and marker from `config`.
	///
	/// Call [`Self::on_change`] if the buffer may already hold a trigger.
	pub fn new(buffer: B, config: &EditorConfig) -> Self {
		Self {
			buffer,
			vocabulary: Vocabulary::from_config(config),
			marker: config.marker.clone(),
			placeholder: config.placeholder.clone(),
			suggestions: SuggestionEngine::new(config.max_visible),
			router: InputRouter::new(),
		}
	}

	/// Replaces the vocabulary, hiding any dropdown built from the old one.
	#[must_use]
	pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
		self.vocabulary = vocabulary;
		self.suggestions.clear();
		self.router.apply(RouterEvent::CandidatesEmptied);
		self
	}

	/// Returns the buffer.
	pub fn buffer(&self) -> &B {
		&self.buffer
	}

	/// Mutable access for host default edits; follow each with [`Self::on_change`].
	pub fn buffer_mut(&mut self) -> &mut B {
		&mut self.buffer
	}

	/// Consumes the session and returns the buffer.
	pub fn into_buffer(self) -> B {
		self.buffer
	}

	/// Returns the completion vocabulary.
	pub fn vocabulary(&self) -> &Vocabulary {
		&self.vocabulary
	}

	/// Returns the trigger marker.
	pub fn marker(&self) -> &Marker {
		&self.marker
	}

	/// Placeholder text hosts show while the document is empty.
	pub fn placeholder(&self) -> &str {
		&self.placeholder
	}

	/// Returns whether the dropdown currently claims keys.
	pub fn router_state(&self) -> RouterState {
		self.router.state()
	}

	/// Returns the dropdown state, if it is showing.
	pub fn suggestions(&self) -> Option<&SuggestionState> {
		self.suggestions.state()
	}

	/// Candidate indices currently inside the dropdown window.
	pub fn visible_range(&self) -> Range<usize> {
		self.suggestions.visible_range()
	}

	/// Re-derives the trigger and suggestions after a content or caret change.
	///
	/// Only a collapsed caret can hold a trigger, and only text in the caret's
	/// own block is considered.
	pub fn on_change(&mut self) -> SuggestionUpdate {
		let selection = self.buffer.selection();
		let trigger = if selection.is_collapsed() {
			self.buffer
				.text(selection.block)
				.and_then(|text| detect_trigger_at(&text, selection.start(), &self.marker))
		} else {
			None
		};

		let update = self.suggestions.update(trigger, &self.vocabulary);
		let event = match update {
			SuggestionUpdate::Showing => RouterEvent::SuggestionsShown,
			SuggestionUpdate::Inactive => RouterEvent::TriggerInactive,
			SuggestionUpdate::NoCandidates => RouterEvent::CandidatesEmptied,
			SuggestionUpdate::Suppressed => RouterEvent::Dismissed,
		};
		self.router.apply(event);
		trace!(block = %selection.block, caret = selection.start(), ?update, "Synced suggestions");
		update
	}

	/// Key-binding hook.
	///
	/// While the dropdown shows, Down/Up move the highlight, Enter/Tab insert
	/// the highlighted candidate, and Escape inserts the typed query as is.
	/// Escape with nothing typed only closes the dropdown, which then stays
	/// closed until the caret leaves that trigger.
	///
	/// # Errors
	///
	/// Returns [`EntryEditError`] if the insertion fails or the router and
	/// suggestion state disagree.
	pub fn handle_key(&mut self, key: Key) -> Result<KeyOutcome, EntryEditError> {
		match self.router.handle_key(key) {
			KeyResult::PassThrough => Ok(KeyOutcome::NotHandled),
			KeyResult::Navigate(delta) => {
				self.suggestions
					.move_selection(delta)
					.ok_or_else(|| violation("navigation without suggestions".to_string()))?;
				Ok(KeyOutcome::Handled)
			}
			KeyResult::AcceptSelected => {
				let state = self.take_suggestions()?;
				insert_entry(&mut self.buffer, &self.marker, state.query_start(), state.selected())?;
				Ok(KeyOutcome::Handled)
			}
			KeyResult::CommitQuery => {
				let state = self.take_suggestions()?;
				if state.query().is_empty() {
					self.suggestions.suppress_at(state.query_start());
					debug!(start = state.query_start(), "Dismissed empty query");
				} else {
					insert_entry(&mut self.buffer, &self.marker, state.query_start(), state.query())?;
				}
				Ok(KeyOutcome::Handled)
			}
		}
	}

	fn take_suggestions(&mut self) -> Result<SuggestionState, EntryEditError> {
		self.suggestions
			.take()
			.ok_or_else(|| violation("router was suggesting without suggestion state".to_string()))
	}

	/// Command hook. Only [`EditorCommand::Backspace`] is intercepted.
	///
	/// # Errors
	///
	/// Returns [`EntryEditError`] if the entry removal fails.
	pub fn handle_command(&mut self, command: EditorCommand) -> Result<CommandOutcome, EntryEditError> {
		match command {
			EditorCommand::Backspace => {
				let outcome = delete_entry_before_cursor(&mut self.buffer, &self.marker)?;
				if outcome.is_handled() {
					self.on_change();
				}
				Ok(outcome)
			}
			EditorCommand::DeleteForward | EditorCommand::SplitBlock => Ok(CommandOutcome::NotHandled),
		}
	}

	/// Highlights the candidate under the pointer. Returns false if `index` is not a candidate.
	pub fn hover_candidate(&mut self, index: usize) -> bool {
		self.suggestions.select(index)
	}

	/// Inserts the candidate at `index` (pointer click).
	///
	/// Returns `Ok(None)` and changes nothing when no candidate has that index.
	///
	/// # Errors
	///
	/// Returns [`EntryEditError`] if the insertion fails.
	pub fn accept_candidate(&mut self, index: usize) -> Result<Option<InsertedEntry>, EntryEditError> {
		if !self.suggestions.select(index) {
			return Ok(None);
		}
		let state = self.take_suggestions()?;
		self.router.apply(RouterEvent::Accepted);
		insert_entry(&mut self.buffer, &self.marker, state.query_start(), state.selected()).map(Some)
	}

	/// Closes the dropdown without inserting anything.
	///
	/// It stays closed while the caret remains in the same trigger.
	pub fn dismiss(&mut self) {
		self.suggestions.dismiss();
		self.router.apply(RouterEvent::Dismissed);
	}

	/// Decorations for `block`; empty if the block does not exist.
	pub fn decorations(&self, block: BlockKey) -> Vec<Decoration> {
		self.buffer
			.text(block)
			.map(|text| decorate_block(&text, &self.marker, &self.vocabulary))
			.unwrap_or_default()
	}
}

#[cfg(test)]
mod tests;
