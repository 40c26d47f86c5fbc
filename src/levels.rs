//! Well-known message kinds
//!
//! Message kinds are free-form strings: any string is a valid key in the
//! message table. This module provides the conventional kinds used by the
//! default renderer and the level-tagged helpers on
//! [`FlashStore`](crate::FlashStore).

use std::fmt;

/// Conventional flash message kinds
///
/// `Level::Error` is an alias for `Level::Danger`: both map to the `"danger"`
/// tag, so messages added under either name land in the same list.
///
/// # Examples
///
/// ```
/// use flashbag::Level;
///
/// assert_eq!(Level::Info.tag(), "info");
/// assert_eq!(Level::Danger.tag(), "danger");
/// assert_eq!(Level::Error.tag(), "danger");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
	Info,
	Success,
	Warning,
	Danger,
	/// Alias for [`Level::Danger`]
	Error,
}

impl Level {
	/// The string tag used as the message table key
	pub fn tag(&self) -> &'static str {
		match self {
			Level::Info => "info",
			Level::Success => "success",
			Level::Warning => "warning",
			Level::Danger | Level::Error => "danger",
		}
	}
}

impl fmt::Display for Level {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.tag())
	}
}

impl From<Level> for String {
	fn from(level: Level) -> Self {
		level.tag().to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Level::Info, "info")]
	#[case(Level::Success, "success")]
	#[case(Level::Warning, "warning")]
	#[case(Level::Danger, "danger")]
	#[case(Level::Error, "danger")]
	fn test_level_tags(#[case] level: Level, #[case] expected: &str) {
		assert_eq!(level.tag(), expected);
		assert_eq!(level.to_string(), expected);
	}

	#[test]
	fn test_error_aliases_danger() {
		assert_eq!(Level::Error.tag(), Level::Danger.tag());
		assert_ne!(Level::Error, Level::Danger);
	}

	#[test]
	fn test_into_string() {
		let key: String = Level::Warning.into();
		assert_eq!(key, "warning");
	}
}
