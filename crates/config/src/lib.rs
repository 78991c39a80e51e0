//! Startup configuration for entrypad.
//!
//! Everything here is fixed once the editing session starts: the trigger
//! marker, the vocabulary offered as completions, and the color each known
//! value is decorated with. Configuration is written in TOML:
//!
//! ```toml
//! marker = "<>"
//! placeholder = "Type <> to trigger autocomplete..."
//! default_color = "#4f46e5"
//! max_visible = 10
//!
//! [[vocabulary]]
//! value = "user"
//! color = "#4f46e5"
//!
//! [[vocabulary]]
//! value = "sku"        # no color: decorated with `default_color`
//! ```
//!
//! Omitted keys take the built-in defaults; an omitted `vocabulary` table
//! yields the built-in five-value vocabulary.

pub mod error;

use std::collections::HashSet;
use std::path::Path;

use entrypad_primitives::{Color, Marker};
pub use error::{ConfigError, Result};
use serde::Deserialize;
use tracing::debug;

/// Built-in vocabulary with its entry colors.
pub const DEFAULT_VOCABULARY: &[(&str, &str)] = &[
	("user", "#4f46e5"),
	("name", "#2563eb"),
	("email", "#7c3aed"),
	("phone", "#db2777"),
	("address", "#059669"),
];

/// Color used for entries whose value is not in the vocabulary.
pub const DEFAULT_ENTRY_COLOR: Color = Color::rgb(0x4f, 0x46, 0xe5);

/// Placeholder shown by hosts while the document is empty.
pub const DEFAULT_PLACEHOLDER: &str = "Type <> to trigger autocomplete...";

/// Default number of candidates visible in the dropdown at once.
pub const DEFAULT_MAX_VISIBLE: usize = 10;

/// One vocabulary value and its optional color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyEntry {
	/// The value inserted after the marker.
	pub value: String,
	/// Decoration color; `None` falls back to [`EditorConfig::default_color`].
	pub color: Option<Color>,
}

/// Validated editor configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
	/// Trigger marker that opens an entry.
	pub marker: Marker,
	/// Placeholder text for an empty document.
	pub placeholder: String,
	/// Color for entries whose value has no color of its own.
	pub default_color: Color,
	/// Dropdown window size.
	pub max_visible: usize,
	/// Completion vocabulary in display order.
	pub vocabulary: Vec<VocabularyEntry>,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			marker: Marker::default(),
			placeholder: DEFAULT_PLACEHOLDER.to_string(),
			default_color: DEFAULT_ENTRY_COLOR,
			max_visible: DEFAULT_MAX_VISIBLE,
			vocabulary: default_vocabulary(),
		}
	}
}

fn default_vocabulary() -> Vec<VocabularyEntry> {
	DEFAULT_VOCABULARY
		.iter()
		.map(|(value, color)| VocabularyEntry {
			value: (*value).to_string(),
			color: color.parse().ok(),
		})
		.collect()
}

/// On-disk shape, before validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
	marker: Option<String>,
	placeholder: Option<String>,
	default_color: Option<String>,
	max_visible: Option<usize>,
	vocabulary: Option<Vec<RawVocabularyEntry>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawVocabularyEntry {
	value: String,
	color: Option<String>,
}

fn parse_color(field: &str, value: &str) -> Result<Color> {
	value.parse().map_err(|source| ConfigError::InvalidColor {
		field: field.to_string(),
		source,
	})
}

impl EditorConfig {
	/// Parse and validate a TOML string.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		let raw: RawConfig = toml::from_str(input)?;
		let defaults = Self::default();

		let marker = match raw.marker {
			Some(text) => Marker::new(text.clone()).ok_or(ConfigError::InvalidMarker(text))?,
			None => defaults.marker,
		};
		let default_color = match raw.default_color {
			Some(color) => parse_color("default_color", &color)?,
			None => defaults.default_color,
		};
		let vocabulary = match raw.vocabulary {
			Some(entries) => entries
				.into_iter()
				.map(|entry| {
					let color = entry.color.map(|c| parse_color(&entry.value, &c)).transpose()?;
					Ok(VocabularyEntry { value: entry.value, color })
				})
				.collect::<Result<Vec<_>>>()?,
			None => defaults.vocabulary,
		};

		let config = Self {
			marker,
			placeholder: raw.placeholder.unwrap_or(defaults.placeholder),
			default_color,
			max_visible: raw.max_visible.unwrap_or(defaults.max_visible),
			vocabulary,
		};
		config.validate()?;
		debug!(marker = %config.marker, values = config.vocabulary.len(), "Loaded editor config");
		Ok(config)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::from_toml_str(&content)
	}

	/// Checks the invariants the editor relies on.
	///
	/// Every vocabulary value must be non-empty, unique, and free of
	/// delimiters, so that an inserted value is always recognized as one
	/// whole entry by the next decoration pass.
	pub fn validate(&self) -> Result<()> {
		if self.max_visible == 0 {
			return Err(ConfigError::ZeroMaxVisible);
		}

		let mut seen = HashSet::new();
		for (idx, entry) in self.vocabulary.iter().enumerate() {
			if entry.value.is_empty() {
				return Err(ConfigError::EmptyValue(idx));
			}
			if let Some(delimiter) = entry.value.chars().find(|&c| self.marker.is_delimiter(c)) {
				return Err(ConfigError::DelimiterInValue {
					value: entry.value.clone(),
					delimiter,
				});
			}
			if !seen.insert(entry.value.as_str()) {
				return Err(ConfigError::DuplicateValue(entry.value.clone()));
			}
		}
		Ok(())
	}
}
