//! Entry scanning.
//!
//! An entry is the marker followed by one or more non-delimiter characters,
//! extended greedily. Entries have no identity beyond their position: they
//! are found fresh from the block text on every call, so they can never
//! drift out of sync with the buffer.

use std::iter::FusedIterator;

use entrypad_primitives::{CharIdx, CharLen, Marker};

/// Char span of an entry, marker included: `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntrySpan {
	/// Offset of the first marker character.
	pub start: CharIdx,
	/// Offset one past the last value character.
	pub end: CharIdx,
}

impl EntrySpan {
	/// Returns the span length in chars.
	#[allow(clippy::len_without_is_empty, reason = "an entry always covers its marker and a value")]
	pub fn len(&self) -> CharLen {
		self.end - self.start
	}
}

/// An entry found in block text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
	/// Where the entry sits in the block.
	pub span: EntrySpan,
	/// The entry text with the marker stripped.
	pub value: &'a str,
}

/// Lazy left-to-right iterator over the entries of one block.
///
/// Cheap to clone; a clone taken before iterating replays the same scan.
#[derive(Debug, Clone)]
pub struct Entries<'a> {
	text: &'a str,
	marker: &'a Marker,
	byte_pos: usize,
	char_pos: CharIdx,
}

/// Scans `text` for entries introduced by `marker`.
///
/// A marker immediately followed by a delimiter (or the end of text) is not
/// an entry; scanning resumes one character after that marker's start.
pub fn find_entries<'a>(text: &'a str, marker: &'a Marker) -> Entries<'a> {
	Entries {
		text,
		marker,
		byte_pos: 0,
		char_pos: 0,
	}
}

/// Returns the entry whose span ends exactly at `offset`, if any.
///
/// The whole block is scanned, so a caret in the middle of an entry never
/// matches the partial entry to its left.
pub fn entry_ending_at<'a>(text: &'a str, marker: &'a Marker, offset: CharIdx) -> Option<Entry<'a>> {
	find_entries(text, marker).take_while(|e| e.span.start < offset).find(|e| e.span.end == offset)
}

impl<'a> Iterator for Entries<'a> {
	type Item = Entry<'a>;

	fn next(&mut self) -> Option<Entry<'a>> {
		loop {
			let rest = &self.text[self.byte_pos..];
			let found = rest.find(self.marker.as_str())?;
			let marker_byte = self.byte_pos + found;
			let marker_char = self.char_pos + rest[..found].chars().count();

			let value_byte = marker_byte + self.marker.as_str().len();
			let value_bytes: usize = self.text[value_byte..]
				.chars()
				.take_while(|&c| !self.marker.is_delimiter(c))
				.map(char::len_utf8)
				.sum();

			if value_bytes == 0 {
				let first = self.text[marker_byte..].chars().next().map_or(1, char::len_utf8);
				self.byte_pos = marker_byte + first;
				self.char_pos = marker_char + 1;
				continue;
			}

			let value = &self.text[value_byte..value_byte + value_bytes];
			let span = EntrySpan {
				start: marker_char,
				end: marker_char + self.marker.char_len() + value.chars().count(),
			};
			self.byte_pos = value_byte + value_bytes;
			self.char_pos = span.end;
			return Some(Entry { span, value });
		}
	}
}

impl FusedIterator for Entries<'_> {}
