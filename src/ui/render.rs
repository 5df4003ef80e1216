use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin};

use super::App;
use super::components::{
	HeaderContext, StatusLine, render_confirm, render_editor, render_favorites, render_header,
	render_status,
};

impl App {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let [header_area, list_area, status_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Min(1),
			Constraint::Length(1),
		])
		.areas(area);

		render_header(
			frame,
			header_area,
			HeaderContext {
				title: &self.title,
				count: self.presenters.len(),
				affordances: self.controller.affordances(),
				throbber_state: &self.throbber_state,
				theme: &self.theme,
			},
		);
		render_favorites(
			frame,
			list_area,
			&mut self.table_state,
			&self.presenters,
			self.controller.affordances(),
			&self.theme,
		);

		let notice = self.controller.notifier().notice();
		render_status(
			frame,
			status_area,
			StatusLine {
				notice: notice.map(|notice| notice.message()),
				message: self.status.as_deref(),
				save_enabled: self.controller.save_enabled(),
				theme: &self.theme,
			},
		);

		if let Some(prompt) = self.controller.notifier().prompt() {
			render_confirm(frame, area, prompt, &self.theme);
		}
		if let Some(session) = self.controller.executor().session() {
			render_editor(frame, area, session, &self.theme);
		}
	}
}
