use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::theme::Theme;

/// Content for the bottom row. A notice wins over a status message, which
/// wins over the key hints.
pub struct StatusLine<'a> {
	pub notice: Option<&'a str>,
	pub message: Option<&'a str>,
	pub save_enabled: bool,
	pub theme: &'a Theme,
}

pub fn render_status(frame: &mut Frame, area: Rect, status: StatusLine<'_>) {
	frame.render_widget(Paragraph::new(status_line(&status)), area);
}

fn status_line(status: &StatusLine<'_>) -> Line<'static> {
	let theme = status.theme;
	if let Some(notice) = status.notice {
		return Line::from(Span::styled(notice.to_string(), theme.notice_style()));
	}
	if let Some(message) = status.message {
		return Line::from(message.to_string());
	}

	let hint = theme.empty_style();
	let save = if status.save_enabled {
		hint
	} else {
		theme.disabled_style()
	};
	Line::from(vec![
		Span::styled("↑↓ move  enter select  ", hint),
		Span::styled("s save", save),
		Span::styled("  a save as  r refresh  q quit", hint),
	])
}

#[cfg(test)]
mod tests {
	use super::*;

	fn text(line: &Line<'_>) -> String {
		line.spans.iter().map(|span| span.content.as_ref()).collect()
	}

	#[test]
	fn notice_takes_priority() {
		let theme = Theme::default();
		let line = status_line(&StatusLine {
			notice: Some("Please select at least one search filter"),
			message: Some("Saved"),
			save_enabled: false,
			theme: &theme,
		});
		assert_eq!(text(&line), "Please select at least one search filter");
		assert_eq!(line.spans[0].style, theme.notice_style());
	}

	#[test]
	fn save_hint_is_dimmed_until_enabled() {
		let theme = Theme::default();
		let disabled = status_line(&StatusLine {
			notice: None,
			message: None,
			save_enabled: false,
			theme: &theme,
		});
		assert!(text(&disabled).contains("s save"));
		assert_eq!(disabled.spans[1].style, theme.disabled_style());

		let enabled = status_line(&StatusLine {
			notice: None,
			message: None,
			save_enabled: true,
			theme: &theme,
		});
		assert_eq!(enabled.spans[1].style, theme.empty_style());
	}
}
