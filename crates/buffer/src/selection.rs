use entrypad_primitives::{BlockKey, CharIdx, Range};

/// A selection confined to one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferSelection {
	/// Block the selection lives in.
	pub block: BlockKey,
	/// Anchor/focus offsets inside the block.
	pub range: Range,
}

impl BufferSelection {
	/// Creates a selection from anchor and focus offsets.
	pub fn new(block: BlockKey, anchor: CharIdx, focus: CharIdx) -> Self {
		Self {
			block,
			range: Range::new(anchor, focus),
		}
	}

	/// Creates a collapsed selection (caret).
	pub fn caret(block: BlockKey, offset: CharIdx) -> Self {
		Self::new(block, offset, offset)
	}

	/// Returns the anchor offset.
	pub fn anchor(&self) -> CharIdx {
		self.range.anchor
	}

	/// Returns the focus offset.
	pub fn focus(&self) -> CharIdx {
		self.range.head
	}

	/// Returns true for a caret.
	pub fn is_collapsed(&self) -> bool {
		self.range.is_empty()
	}

	/// Returns the start offset, which is the cursor position for the engine.
	pub fn start(&self) -> CharIdx {
		self.range.min()
	}

	/// Returns the end offset.
	pub fn end(&self) -> CharIdx {
		self.range.max()
	}

	/// Returns the same block with both ends moved to `anchor` and `focus`.
	#[must_use]
	pub fn merge(self, anchor: CharIdx, focus: CharIdx) -> Self {
		Self::new(self.block, anchor, focus)
	}
}
