use std::fmt;

/// Stable identity of a block inside a document.
///
/// Keys are allocated monotonically by the buffer and never reused, so a key
/// held across edits either still names the same block or names nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockKey(pub u64);

impl fmt::Display for BlockKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "block#{}", self.0)
	}
}

/// Monotonic counter bumped by every content mutation of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ContentVersion(pub u64);

impl ContentVersion {
	/// Returns the version following this one.
	#[must_use]
	pub fn next(self) -> Self {
		Self(self.0 + 1)
	}
}
