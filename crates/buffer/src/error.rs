use entrypad_primitives::{BlockKey, CharIdx, CharLen};
use thiserror::Error;

/// Errors returned by buffer operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
	/// The block key does not name a block in this document.
	#[error("unknown block {0}")]
	UnknownBlock(BlockKey),

	/// An offset lies past the end of its block.
	#[error("offset {offset} out of bounds for {block} (len {len})")]
	OutOfBounds {
		/// Block the offset was resolved against.
		block: BlockKey,
		/// The offending offset.
		offset: CharIdx,
		/// Length of the block in chars.
		len: CharLen,
	},

	/// Block text cannot contain line breaks; splitting is a separate operation.
	#[error("line break in single-block edit")]
	NewlineInBlock,
}

/// Result type for buffer operations.
pub type Result<T> = std::result::Result<T, BufferError>;
