use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::widgets::{Cell, HighlightSpacing, Paragraph, Row, Table, TableState};

use crate::affordances::Affordances;
use crate::messages;
use crate::presenter::PresenterList;
use crate::theme::Theme;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 1;
const NAME_PERCENT: u16 = 35;
const MODE_WIDTH: u16 = 9;
// Marker drawn in front of every name.
const MARKER_WIDTH: usize = 2;

/// Render the favorites table, or the placeholder for an empty registry.
pub fn render_favorites(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	presenters: &PresenterList,
	affordances: &Affordances,
	theme: &Theme,
) {
	if presenters.is_empty() {
		render_placeholder(frame, area, affordances, theme);
		return;
	}

	let name_width =
		(usize::from(area.width) * usize::from(NAME_PERCENT) / 100).saturating_sub(MARKER_WIDTH);
	let rows: Vec<Row<'static>> = presenters
		.iter()
		.map(|item| item.to_row(theme, name_width))
		.collect();
	let header = Row::new(["Name", "Mode", "Criteria"].map(Cell::from))
		.style(theme.header_style())
		.height(1)
		.bottom_margin(1);
	let widths = [
		Constraint::Percentage(NAME_PERCENT),
		Constraint::Length(MODE_WIDTH),
		Constraint::Fill(1),
	];

	let table = Table::new(rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::WhenSelected)
		.row_highlight_style(theme.row_highlight_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, area, table_state);
}

fn render_placeholder(frame: &mut Frame, area: Rect, affordances: &Affordances, theme: &Theme) {
	if area.height == 0 {
		return;
	}
	let mut message_area = area;
	if message_area.height > 2 {
		message_area.y += 1;
		message_area.height -= 1;
	}

	let (text, style) = if let Some(reason) = affordances.failure.as_deref()
		&& affordances.empty
	{
		(format!("{}: {reason}", messages::LOAD_FAILED), theme.failure_style())
	} else if affordances.empty {
		(messages::NO_FAVORITES.to_string(), theme.empty_style())
	} else {
		return;
	};
	let paragraph = Paragraph::new(text)
		.alignment(Alignment::Center)
		.style(style);
	frame.render_widget(paragraph, message_area);
}
