use std::fmt;

/// The trigger sequence that opens an entry, `<>` by default.
///
/// Every character of the marker is also an entry delimiter, alongside
/// whitespace. Constructed through [`Marker::new`], which rejects empty
/// markers and markers containing whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Marker {
	text: String,
	char_len: usize,
}

impl Marker {
	/// Text of the default marker.
	pub const DEFAULT: &'static str = "<>";

	/// Creates a marker, returning `None` when `text` is empty or contains whitespace.
	pub fn new(text: impl Into<String>) -> Option<Self> {
		let text = text.into();
		if text.is_empty() || text.chars().any(char::is_whitespace) {
			return None;
		}
		let char_len = text.chars().count();
		Some(Self { text, char_len })
	}

	/// Returns the marker text.
	pub fn as_str(&self) -> &str {
		&self.text
	}

	/// Returns the marker length in chars.
	pub fn char_len(&self) -> usize {
		self.char_len
	}

	/// Returns true if `c` ends an entry: whitespace or any marker character.
	#[inline]
	pub fn is_delimiter(&self, c: char) -> bool {
		c.is_whitespace() || self.text.contains(c)
	}
}

impl Default for Marker {
	fn default() -> Self {
		Self {
			text: Self::DEFAULT.to_string(),
			char_len: 2,
		}
	}
}

impl fmt::Display for Marker {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.text)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_marker_delimits_angle_brackets_and_whitespace() {
		let marker = Marker::default();
		assert_eq!(marker.as_str(), "<>");
		assert_eq!(marker.char_len(), 2);
		for c in ['<', '>', ' ', '\n', '\t'] {
			assert!(marker.is_delimiter(c), "{c:?}");
		}
		for c in ['a', '-', '.', '_', 'é'] {
			assert!(!marker.is_delimiter(c), "{c:?}");
		}
	}

	#[test]
	fn rejects_empty_and_whitespace_markers() {
		assert!(Marker::new("").is_none());
		assert!(Marker::new("< >").is_none());
		assert_eq!(Marker::new("@@").map(|m| m.char_len()), Some(2));
	}
}
