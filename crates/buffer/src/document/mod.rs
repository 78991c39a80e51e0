//! Rope-backed block document.

use entrypad_primitives::graphemes::prev_grapheme_boundary;
use entrypad_primitives::{BlockKey, CharIdx, CharLen, ContentVersion, Direction, Rope};
use tracing::trace;

use crate::edit::{EditKind, EditRecord};
use crate::error::{BufferError, Result};
use crate::selection::BufferSelection;
use crate::TextBuffer;

/// One line of the document.
#[derive(Debug, Clone)]
pub struct Block {
	key: BlockKey,
	text: Rope,
}

impl Block {
	/// Returns the block's stable key.
	pub fn key(&self) -> BlockKey {
		self.key
	}

	/// Returns the block's text.
	pub fn text(&self) -> &Rope {
		&self.text
	}

	/// Returns the block length in chars.
	pub fn len_chars(&self) -> CharLen {
		self.text.len_chars()
	}
}

/// An ordered sequence of blocks with a single-block selection.
///
/// Block keys are never reused. Every content mutation bumps the version
/// and replaces [`Document::last_edit`].
#[derive(Debug, Clone)]
pub struct Document {
	blocks: Vec<Block>,
	selection: BufferSelection,
	version: ContentVersion,
	next_key: u64,
	last_edit: Option<EditRecord>,
}

impl Default for Document {
	fn default() -> Self {
		Self::new()
	}
}

impl Document {
	/// Creates a document holding one empty block with the caret in it.
	pub fn new() -> Self {
		let key = BlockKey(0);
		Self {
			blocks: vec![Block { key, text: Rope::new() }],
			selection: BufferSelection::caret(key, 0),
			version: ContentVersion::default(),
			next_key: 1,
			last_edit: None,
		}
	}

	/// Creates a document with one block per line of `text`.
	///
	/// The caret is placed at the end of the last block.
	pub fn from_text(text: &str) -> Self {
		let mut doc = Self {
			blocks: Vec::new(),
			selection: BufferSelection::caret(BlockKey(0), 0),
			version: ContentVersion::default(),
			next_key: 0,
			last_edit: None,
		};
		for line in text.split('\n') {
			let key = doc.alloc_key();
			doc.blocks.push(Block {
				key,
				text: Rope::from_str(line),
			});
		}
		if let Some(last) = doc.blocks.last() {
			doc.selection = BufferSelection::caret(last.key, last.len_chars());
		}
		doc
	}

	fn alloc_key(&mut self) -> BlockKey {
		let key = BlockKey(self.next_key);
		self.next_key += 1;
		key
	}

	/// Returns all blocks in order.
	pub fn blocks(&self) -> &[Block] {
		&self.blocks
	}

	/// Returns the block with the given key.
	pub fn block(&self, key: BlockKey) -> Option<&Block> {
		self.blocks.iter().find(|b| b.key == key)
	}

	/// Returns the key of the block holding the selection.
	pub fn focused_block(&self) -> BlockKey {
		self.selection.block
	}

	/// Returns the whole document with blocks joined by newlines.
	pub fn to_text(&self) -> String {
		self.blocks.iter().map(|b| b.text.to_string()).collect::<Vec<_>>().join("\n")
	}

	/// Returns the most recent content mutation, if any.
	pub fn last_edit(&self) -> Option<&EditRecord> {
		self.last_edit.as_ref()
	}

	/// Appends a new block after the last one and returns its key.
	pub fn push_block(&mut self, text: &str) -> Result<BlockKey> {
		if text.contains('\n') {
			return Err(BufferError::NewlineInBlock);
		}
		let key = self.alloc_key();
		self.blocks.push(Block {
			key,
			text: Rope::from_str(text),
		});
		self.version = self.version.next();
		Ok(key)
	}

	/// Collapses the selection at `offset` in `block`.
	pub fn set_cursor(&mut self, block: BlockKey, offset: CharIdx) -> Result<()> {
		self.set_selection(BufferSelection::caret(block, offset))
	}

	/// Host default for typed text: insert at the selection, caret after it.
	pub fn type_text(&mut self, text: &str) -> Result<ContentVersion> {
		self.insert_text(self.selection, text)
	}

	/// Host default for backspace.
	///
	/// Removes the selection if there is one, else the grapheme cluster before
	/// the caret, else joins the block onto the previous one. Returns `None`
	/// when there is nothing to delete (caret at the very start).
	pub fn delete_backward(&mut self) -> Result<Option<ContentVersion>> {
		let sel = self.selection;
		if !sel.is_collapsed() {
			return self.remove_range(sel, Direction::Backward).map(Some);
		}

		let idx = self.block_index(sel.block)?;
		let caret = sel.start();
		if caret > 0 {
			let start = prev_grapheme_boundary(self.blocks[idx].text.slice(..), caret);
			return self.remove_range(sel.merge(start, caret), Direction::Backward).map(Some);
		}
		if idx == 0 {
			return Ok(None);
		}
		self.join_with_previous(idx).map(Some)
	}

	/// Splits the focused block at the caret; the caret moves to the start of the new block.
	///
	/// A non-collapsed selection is removed first as part of the same edit.
	pub fn split_block(&mut self) -> Result<ContentVersion> {
		let (idx, start, end) = self.resolve(self.selection)?;
		let block = &mut self.blocks[idx];
		let removed: String = block.text.slice(start..end).into();
		let tail = block.text.split_off(end);
		block.text.remove(start..);
		let old_key = block.key;

		let key = self.alloc_key();
		self.blocks.insert(idx + 1, Block { key, text: tail });
		self.version = self.version.next();
		self.selection = BufferSelection::caret(key, 0);
		self.last_edit = Some(EditRecord {
			kind: EditKind::Split,
			block: old_key,
			start,
			removed,
			inserted: "\n".to_string(),
			version: self.version,
		});
		trace!(block = %old_key, new_block = %key, at = start, "Split block");
		Ok(self.version)
	}

	fn join_with_previous(&mut self, idx: usize) -> Result<ContentVersion> {
		let removed = self.blocks.remove(idx);
		let prev = &mut self.blocks[idx - 1];
		let at = prev.len_chars();
		prev.text.append(removed.text);
		let key = prev.key;

		self.version = self.version.next();
		self.selection = BufferSelection::caret(key, at);
		self.last_edit = Some(EditRecord {
			kind: EditKind::Join,
			block: key,
			start: at,
			removed: "\n".to_string(),
			inserted: String::new(),
			version: self.version,
		});
		trace!(block = %key, joined = %removed.key, at, "Joined blocks");
		Ok(self.version)
	}

	fn block_index(&self, key: BlockKey) -> Result<usize> {
		self.blocks.iter().position(|b| b.key == key).ok_or(BufferError::UnknownBlock(key))
	}

	/// Resolves a selection to `(block index, start, end)`, checking bounds.
	fn resolve(&self, sel: BufferSelection) -> Result<(usize, CharIdx, CharIdx)> {
		let idx = self.block_index(sel.block)?;
		let len = self.blocks[idx].len_chars();
		if sel.end() > len {
			return Err(BufferError::OutOfBounds {
				block: sel.block,
				offset: sel.end(),
				len,
			});
		}
		Ok((idx, sel.start(), sel.end()))
	}

	fn splice(&mut self, kind: EditKind, sel: BufferSelection, text: &str) -> Result<ContentVersion> {
		if text.contains('\n') {
			return Err(BufferError::NewlineInBlock);
		}
		let (idx, start, end) = self.resolve(sel)?;

		let rope = &mut self.blocks[idx].text;
		let removed: String = rope.slice(start..end).into();
		rope.remove(start..end);
		rope.insert(start, text);

		self.version = self.version.next();
		self.selection = BufferSelection::caret(sel.block, start + text.chars().count());
		trace!(block = %sel.block, start, end, inserted = text, version = self.version.0, "Buffer edit");
		self.last_edit = Some(EditRecord {
			kind,
			block: sel.block,
			start,
			removed,
			inserted: text.to_string(),
			version: self.version,
		});
		Ok(self.version)
	}
}

impl TextBuffer for Document {
	fn text(&self, block: BlockKey) -> Option<String> {
		self.block(block).map(|b| b.text.to_string())
	}

	fn selection(&self) -> BufferSelection {
		self.selection
	}

	fn version(&self) -> ContentVersion {
		self.version
	}

	fn replace_range(&mut self, range: BufferSelection, text: &str) -> Result<ContentVersion> {
		self.splice(EditKind::Replace, range, text)
	}

	fn remove_range(&mut self, range: BufferSelection, direction: Direction) -> Result<ContentVersion> {
		self.splice(EditKind::Remove(direction), range, "")
	}

	fn insert_text(&mut self, range: BufferSelection, text: &str) -> Result<ContentVersion> {
		self.splice(EditKind::Insert, range, text)
	}

	fn set_selection(&mut self, selection: BufferSelection) -> Result<()> {
		self.resolve(selection)?;
		self.selection = selection;
		Ok(())
	}
}
