//! Error types for configuration parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The marker is empty or contains whitespace.
	#[error("invalid marker {0:?}: must be non-empty and contain no whitespace")]
	InvalidMarker(String),

	/// A color value could not be parsed.
	#[error("invalid color for {field}: {source}")]
	InvalidColor {
		/// Which setting carried the color (`default_color` or a vocabulary value).
		field: String,
		/// The parse failure.
		source: entrypad_primitives::ColorParseError,
	},

	/// A vocabulary value is empty.
	#[error("vocabulary value at position {0} is empty")]
	EmptyValue(usize),

	/// A vocabulary value contains a character that would end the entry early.
	#[error("vocabulary value {value:?} contains delimiter {delimiter:?}")]
	DelimiterInValue {
		/// The offending value.
		value: String,
		/// The first delimiter found in it.
		delimiter: char,
	},

	/// The same vocabulary value is listed twice.
	#[error("duplicate vocabulary value {0:?}")]
	DuplicateValue(String),

	/// The dropdown window cannot show zero candidates.
	#[error("max_visible must be at least 1")]
	ZeroMaxVisible,
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
