//! Built-in colour themes for the terminal front end.

mod builtins;
mod types;

pub use builtins::default_theme;
pub use types::{Theme, ThemeDefinition};

use builtins::BUILT_IN_DEFINITIONS;

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// Lookup a theme by case-insensitive name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let normalized = name.trim();
	BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| definition.matches(normalized))
		.map(|definition| definition.theme)
}

/// Canonical theme names, sorted.
#[must_use]
pub fn names() -> Vec<&'static str> {
	let mut names: Vec<_> = BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect();
	names.sort_unstable();
	names
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_is_case_insensitive_and_honours_aliases() {
		assert_eq!(by_name("SLATE"), Some(builtins::SLATE));
		assert_eq!(by_name(" dark "), Some(builtins::SLATE));
		assert_eq!(by_name("Day"), Some(builtins::LIGHT));
		assert!(by_name("nope").is_none());
	}

	#[test]
	fn names_are_sorted() {
		assert_eq!(names(), vec!["light", "slate", "solarized"]);
	}
}
