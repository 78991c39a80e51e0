//! Active-trigger detection.

use entrypad_primitives::{CharIdx, Marker};

/// A trigger in progress: the marker and the partial query typed after it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Trigger {
	/// Char offset of the marker within the block.
	pub query_start: CharIdx,
	/// Text typed after the marker, case preserved. May be empty.
	pub query: String,
}

/// Looks for `<marker><non-delimiters>*` anchored at the end of `text_before_cursor`.
///
/// With nested or repeated markers only the rightmost one can be active,
/// since marker characters are themselves delimiters.
pub fn detect_trigger(text_before_cursor: &str, marker: &Marker) -> Option<Trigger> {
	let query_bytes: usize = text_before_cursor
		.chars()
		.rev()
		.take_while(|&c| !marker.is_delimiter(c))
		.map(char::len_utf8)
		.sum();
	let (head, query) = text_before_cursor.split_at(text_before_cursor.len() - query_bytes);
	let before_marker = head.strip_suffix(marker.as_str())?;

	Some(Trigger {
		query_start: before_marker.chars().count(),
		query: query.to_string(),
	})
}

/// Runs [`detect_trigger`] on the part of `block_text` before char offset `cursor`.
///
/// A cursor past the end of the block is clamped to the end.
pub fn detect_trigger_at(block_text: &str, cursor: CharIdx, marker: &Marker) -> Option<Trigger> {
	let end = block_text.char_indices().nth(cursor).map_or(block_text.len(), |(byte, _)| byte);
	detect_trigger(&block_text[..end], marker)
}
