use entrypad_primitives::{BlockKey, CharIdx, ContentVersion, Direction};

/// What kind of mutation produced an [`EditRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
	/// Replacement of a range with new text.
	Replace,
	/// Insertion at a caret or over a selection.
	Insert,
	/// Removal of a range in the given direction.
	Remove(Direction),
	/// A block was split in two at `start`.
	Split,
	/// A block was joined onto the previous one.
	Join,
}

/// Description of the most recent content mutation.
///
/// A [`crate::Document`] keeps only the last record; hosts that maintain
/// undo history consume it after each mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRecord {
	/// Kind of mutation.
	pub kind: EditKind,
	/// Block that was edited (the surviving block for joins).
	pub block: BlockKey,
	/// Char offset where the edit starts.
	pub start: CharIdx,
	/// Text that was removed.
	pub removed: String,
	/// Text that was inserted.
	pub inserted: String,
	/// Content version after the edit.
	pub version: ContentVersion,
}
