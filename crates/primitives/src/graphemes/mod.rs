//! Grapheme cluster boundaries over block text.
//!
//! The host's default single-character backspace removes one user-perceived
//! character, which may span several chars (combining marks, ZWJ emoji).

use ropey::RopeSlice;
use unicode_segmentation::UnicodeSegmentation;

use crate::range::CharIdx;

/// Returns whether `char_idx` is at a grapheme cluster boundary.
///
/// Boundaries occur at the start/end of text and between grapheme clusters.
pub fn is_grapheme_boundary(text: RopeSlice, char_idx: CharIdx) -> bool {
	if char_idx == 0 || char_idx >= text.len_chars() {
		return true;
	}

	// Window must cover every cluster that can straddle `char_idx`.
	let window_start = char_idx.saturating_sub(16);
	let window_end = (char_idx + 16).min(text.len_chars());
	let chunk: String = text.slice(window_start..window_end).into();

	let mut offset = window_start;
	for grapheme in chunk.graphemes(true) {
		if offset == char_idx {
			return true;
		}
		if offset > char_idx {
			return false;
		}
		offset += grapheme.chars().count();
	}
	offset == char_idx
}

/// Returns the char index of the previous grapheme cluster boundary before `char_idx`.
///
/// If `char_idx` is 0, returns 0.
pub fn prev_grapheme_boundary(text: RopeSlice, char_idx: CharIdx) -> CharIdx {
	if char_idx == 0 {
		return 0;
	}

	let mut idx: CharIdx = char_idx.min(text.len_chars()) - 1;
	while idx > 0 && !is_grapheme_boundary(text, idx) {
		idx -= 1;
	}
	idx
}
