//! Core types shared by every entrypad crate: keys, char offsets, block ids, and colors.

/// Grapheme cluster boundary detection.
pub mod graphemes;
/// Identifier types for blocks and content versions.
pub mod ids;
/// Key event types.
pub mod key;
/// The entry trigger marker and its delimiter set.
pub mod marker;
/// Char offsets and ranges within a single block.
pub mod range;
/// Presentation colors for entries.
pub mod style;

pub use ids::{BlockKey, ContentVersion};
pub use key::{Key, KeyCode, Modifiers};
pub use marker::Marker;
pub use range::{CharIdx, CharLen, Direction, Range};
pub use ropey::{Rope, RopeSlice};
pub use style::{Color, ColorParseError};
