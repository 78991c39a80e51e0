//! Key representation for host keyboard events.
//!
//! Hosts translate their native events into [`Key`] before handing them to the
//! input router. Only the keys the router cares about get dedicated variants;
//! everything printable arrives as [`KeyCode::Char`].

mod modifiers;

pub use modifiers::Modifiers;

/// Physical or logical key identity, independent of modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
	/// A printable character.
	Char(char),
	/// The space bar.
	Space,
	/// Enter / Return.
	Enter,
	/// Tab.
	Tab,
	/// Shift+Tab as reported by most terminals and browsers.
	BackTab,
	/// Escape.
	Esc,
	/// Backspace (delete backward).
	Backspace,
	/// Delete (delete forward).
	Delete,
	/// Arrow up.
	Up,
	/// Arrow down.
	Down,
	/// Arrow left.
	Left,
	/// Arrow right.
	Right,
	/// Home.
	Home,
	/// End.
	End,
	/// Page up.
	PageUp,
	/// Page down.
	PageDown,
}

/// A key with optional modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
	/// Which key was pressed.
	pub code: KeyCode,
	/// Modifiers held while pressing it.
	pub modifiers: Modifiers,
}

impl Key {
	/// Create a key from a character with no modifiers.
	pub const fn char(c: char) -> Self {
		Self {
			code: KeyCode::Char(c),
			modifiers: Modifiers::NONE,
		}
	}

	/// Create a key from a key code with no modifiers.
	pub const fn new(code: KeyCode) -> Self {
		Self {
			code,
			modifiers: Modifiers::NONE,
		}
	}

	/// Create a key with Ctrl modifier.
	pub const fn ctrl(c: char) -> Self {
		Self {
			code: KeyCode::Char(c),
			modifiers: Modifiers::CTRL,
		}
	}

	/// Add Shift modifier.
	pub const fn with_shift(self) -> Self {
		Self {
			modifiers: Modifiers {
				shift: true,
				..self.modifiers
			},
			..self
		}
	}

	/// Check if this key is escape.
	pub fn is_escape(&self) -> bool {
		matches!(self.code, KeyCode::Esc) && self.modifiers.is_empty()
	}

	/// Check if this key is enter.
	pub fn is_enter(&self) -> bool {
		matches!(self.code, KeyCode::Enter) && self.modifiers.is_empty()
	}

	/// Check if this key is tab.
	pub fn is_tab(&self) -> bool {
		matches!(self.code, KeyCode::Tab) && self.modifiers.is_empty()
	}
}

impl From<KeyCode> for Key {
	fn from(code: KeyCode) -> Self {
		Self::new(code)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn plain_keys_have_no_modifiers() {
		assert!(Key::char('a').modifiers.is_empty());
		assert!(Key::new(KeyCode::Tab).is_tab());
		assert!(Key::from(KeyCode::Esc).is_escape());
	}

	#[test]
	fn modified_special_keys_are_not_plain() {
		assert!(!Key::new(KeyCode::Tab).with_shift().is_tab());
		assert!(!Key { code: KeyCode::Enter, modifiers: Modifiers::ALT }.is_enter());
		assert!(Key::ctrl('h').modifiers.is_chord());
		assert!(!Modifiers::SHIFT.is_chord());
	}
}
