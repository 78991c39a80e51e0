#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Text buffer contract consumed by the entry engine, and a reference implementation.
//!
//! * [`TextBuffer`] - the read/write operations the engine needs from a host buffer
//! * [`Document`] - ordered blocks of rope-backed text with a single-block selection
//!
//! Hosts with their own text model implement [`TextBuffer`] over it; hosts
//! without one use [`Document`] directly.

mod document;
mod edit;
mod error;
mod selection;

use entrypad_primitives::{BlockKey, ContentVersion, Direction};

pub use document::{Block, Document};
pub use edit::{EditKind, EditRecord};
pub use error::{BufferError, Result};
pub use selection::BufferSelection;

/// Read/write contract between the entry engine and the host text buffer.
///
/// Every mutating call edits exactly one block and returns the new content
/// version. After a mutation the caret is collapsed at the end of the
/// inserted text, or at the start of the removed range.
pub trait TextBuffer {
	/// Returns the text of `block`, or `None` if no such block exists.
	fn text(&self, block: BlockKey) -> Option<String>;

	/// Returns the current selection.
	fn selection(&self) -> BufferSelection;

	/// Returns the current content version.
	fn version(&self) -> ContentVersion;

	/// Replaces the selected range with `text`.
	fn replace_range(&mut self, range: BufferSelection, text: &str) -> Result<ContentVersion>;

	/// Removes the selected range.
	///
	/// `direction` records which way the removal was requested (backspace is
	/// [`Direction::Backward`]) so hosts can group it in their own undo history.
	fn remove_range(&mut self, range: BufferSelection, direction: Direction) -> Result<ContentVersion>;

	/// Inserts `text` at the range, replacing it when not collapsed.
	fn insert_text(&mut self, range: BufferSelection, text: &str) -> Result<ContentVersion>;

	/// Moves the selection without touching content.
	fn set_selection(&mut self, selection: BufferSelection) -> Result<()>;
}
