//! Completion vocabulary and the display attribute of each value.

use entrypad_config::{DEFAULT_ENTRY_COLOR, EditorConfig};
use entrypad_primitives::Color;
use indexmap::IndexMap;

/// How an entry is presented: its color and the faint background behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryAttribute {
	/// Text and border color.
	pub color: Color,
	/// Background tint derived from `color`.
	pub background: Color,
}

impl EntryAttribute {
	/// Builds the attribute for an entry drawn in `color`.
	pub const fn from_color(color: Color) -> Self {
		Self {
			color,
			background: color.background_tint(),
		}
	}
}

/// Immutable, ordered set of known entry values.
///
/// Lookups of unknown values never fail; they yield the default attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
	values: IndexMap<String, EntryAttribute>,
	default: EntryAttribute,
}

impl Vocabulary {
	/// Creates a vocabulary where every value uses the default entry color.
	///
	/// Repeated values keep their first position.
	pub fn new<I, S>(values: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let default = EntryAttribute::from_color(DEFAULT_ENTRY_COLOR);
		Self {
			values: values.into_iter().map(|v| (v.into(), default)).collect(),
			default,
		}
	}

	/// Builds the vocabulary from validated configuration.
	pub fn from_config(config: &EditorConfig) -> Self {
		let default = EntryAttribute::from_color(config.default_color);
		let values = config
			.vocabulary
			.iter()
			.map(|entry| (entry.value.clone(), entry.color.map_or(default, EntryAttribute::from_color)))
			.collect();
		Self { values, default }
	}

	/// Returns a copy with a different attribute for unknown values.
	#[must_use]
	pub fn with_default_color(mut self, color: Color) -> Self {
		self.default = EntryAttribute::from_color(color);
		self
	}

	/// Iterates over the values in vocabulary order.
	pub fn values(&self) -> impl Iterator<Item = &str> {
		self.values.keys().map(String::as_str)
	}

	/// Returns the number of values.
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Returns true if there are no values.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Returns true if `value` is a known value (exact match).
	pub fn contains(&self, value: &str) -> bool {
		self.values.contains_key(value)
	}

	/// Returns the attribute for `value`, or the default for unknown values.
	pub fn attribute(&self, value: &str) -> EntryAttribute {
		self.values.get(value).copied().unwrap_or(self.default)
	}

	/// Returns the attribute used for unknown values.
	pub fn default_attribute(&self) -> EntryAttribute {
		self.default
	}
}

impl Default for Vocabulary {
	fn default() -> Self {
		Self::from_config(&EditorConfig::default())
	}
}
