use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::affordances::Affordances;
use crate::messages;
use crate::theme::Theme;

pub struct HeaderContext<'a> {
	pub title: &'a str,
	pub count: usize,
	pub affordances: &'a Affordances,
	pub throbber_state: &'a ThrobberState,
	pub theme: &'a Theme,
}

/// Title on the left, fetch state on the right.
pub fn render_header(frame: &mut Frame, area: Rect, header: HeaderContext<'_>) {
	let HeaderContext {
		title,
		count,
		affordances,
		throbber_state,
		theme,
	} = header;
	if area.width == 0 || area.height == 0 {
		return;
	}

	let title = Paragraph::new(Line::from(Span::styled(
		format!("{title} "),
		theme.prompt_style(),
	)));
	frame.render_widget(title, area);

	let indicator = state_line(count, affordances, throbber_state, theme);
	let width = (indicator.width() as u16).min(area.width);
	let indicator_area = Rect {
		x: area.right().saturating_sub(width),
		width,
		..area
	};
	frame.render_widget(Paragraph::new(indicator), indicator_area);
}

fn state_line(
	count: usize,
	affordances: &Affordances,
	throbber_state: &ThrobberState,
	theme: &Theme,
) -> Line<'static> {
	let muted = theme.empty_style();
	if affordances.loading {
		let spinner = Throbber::default().style(muted).throbber_style(muted);
		return Line::from(vec![
			spinner.to_symbol_span(throbber_state),
			Span::styled(messages::LOADING_FAVORITES, muted),
		]);
	}
	if affordances.failure.is_some() {
		return Line::from(Span::styled(messages::LOAD_FAILED, theme.failure_style()));
	}
	let label = if count == 1 { "favorite" } else { "favorites" };
	Line::from(Span::styled(format!("{count} {label}"), muted))
}
