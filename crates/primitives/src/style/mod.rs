//! Colors attached to entry decorations.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Alpha applied to an entry color to produce its background tint (`#rrggbb10`).
pub const BACKGROUND_TINT_ALPHA: u8 = 0x10;

/// An sRGB color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha channel; `0xff` is fully opaque.
	pub a: u8,
}

/// Error returned when a color string is not `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color format: {0}")]
pub struct ColorParseError(pub String);

impl Color {
	/// Creates an opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 0xff }
	}

	/// Returns the same color with a different alpha.
	#[must_use]
	pub const fn with_alpha(self, a: u8) -> Self {
		Self { a, ..self }
	}

	/// Returns the faint background variant used behind an entry.
	#[must_use]
	pub const fn background_tint(self) -> Self {
		self.with_alpha(BACKGROUND_TINT_ALPHA)
	}
}

impl FromStr for Color {
	type Err = ColorParseError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let value = value.trim();
		let err = || ColorParseError(value.to_string());
		let hex = value.strip_prefix('#').ok_or_else(err)?;
		if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
			return Err(err());
		}
		let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| err());

		match hex.len() {
			3 => Ok(Self::rgb(
				channel(&hex[0..1].repeat(2))?,
				channel(&hex[1..2].repeat(2))?,
				channel(&hex[2..3].repeat(2))?,
			)),
			6 => Ok(Self::rgb(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
			8 => Ok(Self::rgb(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?).with_alpha(channel(&hex[6..8])?)),
			_ => Err(err()),
		}
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
		if self.a != 0xff {
			write!(f, "{:02x}", self.a)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests;
