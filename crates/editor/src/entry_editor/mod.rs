//! Atomic entry insertion and removal.
//!
//! Each operation performs exactly one content mutation on the buffer, so an
//! entry appears and disappears as a single edit in the host's history.

use entrypad_buffer::{BufferSelection, TextBuffer};
use entrypad_primitives::{CharIdx, ContentVersion, Direction, Marker};
use tracing::{debug, error};

use crate::entry::{EntrySpan, entry_ending_at};
use crate::error::EntryEditError;

/// Whether an intercepted command was consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
	/// The engine performed the edit; the host must not apply its default.
	Handled,
	/// The host's default behavior applies.
	NotHandled,
}

impl CommandOutcome {
	/// Returns true for [`CommandOutcome::Handled`].
	pub fn is_handled(self) -> bool {
		self == Self::Handled
	}
}

/// Where an inserted entry landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertedEntry {
	/// Span of the new entry, marker included, trailing space excluded.
	pub span: EntrySpan,
	/// Caret offset after the insertion (just past the trailing space).
	pub caret: CharIdx,
	/// Content version produced by the edit.
	pub version: ContentVersion,
}

pub(crate) fn violation(message: String) -> EntryEditError {
	error!(%message, "Entry engine invariant violated");
	EntryEditError::InvariantViolation(message)
}

/// Replaces `[query_start, cursor)` in the focused block with the entry for `value`.
///
/// A single space follows the entry unless the character after the cursor
/// already is one; either way the caret ends up just past that space.
/// Dismissing the suggestions is left to the caller.
///
/// # Errors
///
/// Returns [`EntryEditError::InvariantViolation`] when `query_start` lies
/// after the cursor, the cursor lies past the block end, or `value` is empty
/// or contains a delimiter. Buffer failures are passed through.
pub fn insert_entry<B: TextBuffer + ?Sized>(buffer: &mut B, marker: &Marker, query_start: CharIdx, value: &str) -> Result<InsertedEntry, EntryEditError> {
	if value.is_empty() {
		return Err(violation("empty entry value".to_string()));
	}
	if let Some(delimiter) = value.chars().find(|&c| marker.is_delimiter(c)) {
		return Err(violation(format!("entry value {value:?} contains delimiter {delimiter:?}")));
	}

	let selection = buffer.selection();
	let cursor = selection.start();
	let text = buffer
		.text(selection.block)
		.ok_or_else(|| violation(format!("focused {} does not exist", selection.block)))?;
	let len = text.chars().count();
	if query_start > cursor || cursor > len {
		return Err(violation(format!("query start {query_start} and cursor {cursor} out of order for block of {len} chars")));
	}

	let space_follows = text.chars().nth(cursor) == Some(' ');
	let mut replacement = String::with_capacity(marker.as_str().len() + value.len() + 1);
	replacement.push_str(marker.as_str());
	replacement.push_str(value);
	if !space_follows {
		replacement.push(' ');
	}

	let span = EntrySpan {
		start: query_start,
		end: query_start + marker.char_len() + value.chars().count(),
	};
	let caret = span.end + 1;
	let version = buffer.replace_range(BufferSelection::new(selection.block, query_start, cursor), &replacement)?;
	if space_follows {
		buffer.set_selection(BufferSelection::caret(selection.block, caret))?;
	}

	debug!(block = %selection.block, value, start = span.start, caret, "Inserted entry");
	Ok(InsertedEntry { span, caret, version })
}

/// Removes the whole entry ending exactly at the caret.
///
/// Returns [`CommandOutcome::NotHandled`] for a non-collapsed selection or
/// when no entry ends at the caret, leaving single-character deletion to the
/// host.
///
/// # Errors
///
/// Returns [`EntryEditError::InvariantViolation`] when the caret lies past
/// the end of its block. Buffer failures are passed through.
pub fn delete_entry_before_cursor<B: TextBuffer + ?Sized>(buffer: &mut B, marker: &Marker) -> Result<CommandOutcome, EntryEditError> {
	let selection = buffer.selection();
	if !selection.is_collapsed() {
		return Ok(CommandOutcome::NotHandled);
	}

	let cursor = selection.start();
	let text = buffer
		.text(selection.block)
		.ok_or_else(|| violation(format!("focused {} does not exist", selection.block)))?;
	let len = text.chars().count();
	if cursor > len {
		return Err(violation(format!("cursor {cursor} past end of block of {len} chars")));
	}

	let Some(entry) = entry_ending_at(&text, marker, cursor) else {
		return Ok(CommandOutcome::NotHandled);
	};
	let span = entry.span;
	buffer.remove_range(BufferSelection::new(selection.block, span.start, span.end), Direction::Backward)?;
	debug!(block = %selection.block, value = entry.value, start = span.start, end = span.end, "Removed entry");
	Ok(CommandOutcome::Handled)
}
