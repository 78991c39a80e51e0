//! Decoration spans for the host's render pass.

use entrypad_primitives::Marker;

use crate::entry::{EntrySpan, find_entries};
use crate::vocabulary::{EntryAttribute, Vocabulary};

/// One entry to draw as a single styled unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
	/// Char span of the entry, marker included.
	pub span: EntrySpan,
	/// Entry text without the marker.
	pub value: String,
	/// Color and background tint to draw with.
	pub attribute: EntryAttribute,
	/// Whether `value` is in the vocabulary; unknown values use the default attribute.
	pub known: bool,
}

/// Computes the decorations of one block, left to right.
///
/// Pure: the same text always yields the same decorations.
pub fn decorate_block(text: &str, marker: &Marker, vocabulary: &Vocabulary) -> Vec<Decoration> {
	find_entries(text, marker)
		.map(|entry| Decoration {
			span: entry.span,
			value: entry.value.to_string(),
			attribute: vocabulary.attribute(entry.value),
			known: vocabulary.contains(entry.value),
		})
		.collect()
}
