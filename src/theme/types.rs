use ratatui::style::{Modifier, Style};

/// Styles used by the favorites view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub header: Style,
	pub row_highlight: Style,
	pub active: Style,
	pub prompt: Style,
	pub empty: Style,
	pub failure: Style,
	pub notice: Style,
	pub dialog: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn active_style(&self) -> Style {
		self.active
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn failure_style(&self) -> Style {
		self.failure
	}

	#[must_use]
	pub fn notice_style(&self) -> Style {
		self.notice
	}

	#[must_use]
	pub fn dialog_style(&self) -> Style {
		self.dialog
	}

	/// Style for an action hint that cannot currently be triggered.
	#[must_use]
	pub fn disabled_style(&self) -> Style {
		self.empty.add_modifier(Modifier::CROSSED_OUT)
	}
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	#[must_use]
	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	pub(super) fn matches(&self, normalized: &str) -> bool {
		self.name.eq_ignore_ascii_case(normalized)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(normalized))
	}
}
