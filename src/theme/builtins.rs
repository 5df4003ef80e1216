use ratatui::style::{Color, Modifier, Style};

use super::types::{Theme, ThemeDefinition};

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	active: Style::new()
		.fg(Color::Rgb(74, 222, 128))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	failure: Style::new().fg(Color::Rgb(248, 113, 113)),
	notice: Style::new().fg(Color::Yellow),
	dialog: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(30, 41, 59)),
};

pub const SOLARIZED: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.bg(Color::Rgb(38, 139, 210)),
	row_highlight: Style::new()
		.bg(Color::Rgb(7, 54, 66))
		.fg(Color::Rgb(181, 137, 0)),
	active: Style::new()
		.fg(Color::Rgb(133, 153, 0))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(42, 161, 152)),
	empty: Style::new().fg(Color::Rgb(88, 110, 117)),
	failure: Style::new().fg(Color::Rgb(220, 50, 47)),
	notice: Style::new().fg(Color::Rgb(203, 75, 22)),
	dialog: Style::new()
		.fg(Color::Rgb(238, 232, 213))
		.bg(Color::Rgb(0, 43, 54)),
};

pub const LIGHT: Theme = Theme {
	header: Style::new().fg(Color::Black).bg(Color::Rgb(203, 213, 225)),
	row_highlight: Style::new()
		.bg(Color::Rgb(226, 232, 240))
		.fg(Color::Rgb(30, 64, 175)),
	active: Style::new()
		.fg(Color::Rgb(21, 128, 61))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Blue),
	empty: Style::new().fg(Color::Gray),
	failure: Style::new().fg(Color::Red),
	notice: Style::new().fg(Color::Rgb(180, 83, 9)),
	dialog: Style::new().fg(Color::Black).bg(Color::Rgb(241, 245, 249)),
};

pub(super) const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[
	ThemeDefinition::new("light", LIGHT).with_aliases(&["day"]),
	ThemeDefinition::new("slate", SLATE).with_aliases(&["default", "dark"]),
	ThemeDefinition::new("solarized", SOLARIZED),
];

#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}
