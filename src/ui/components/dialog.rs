use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use super::centered;
use crate::controller::ConfirmPrompt;
use crate::theme::Theme;
use crate::ui::editor::EditorSession;

const DIALOG_WIDTH: u16 = 60;
const CONFIRM_HEIGHT: u16 = 6;
const EDITOR_HEIGHT: u16 = 8;

/// Modal yes/no box for an overwrite.
pub fn render_confirm(frame: &mut Frame, area: Rect, prompt: &ConfirmPrompt, theme: &Theme) {
	let dialog = centered(area, DIALOG_WIDTH, CONFIRM_HEIGHT);
	frame.render_widget(Clear, dialog);

	let spans: Vec<Span<'static>> = prompt
		.segments()
		.into_iter()
		.map(|segment| {
			if segment.emphasis {
				Span::styled(segment.text, theme.dialog_style().add_modifier(Modifier::BOLD))
			} else {
				Span::raw(segment.text)
			}
		})
		.collect();
	let hints = Line::from(Span::styled("y/enter: yes   n/esc: no", theme.empty_style()));
	let body = Paragraph::new(vec![Line::from(spans), Line::default(), hints])
		.wrap(Wrap { trim: true })
		.style(theme.dialog_style())
		.block(Block::bordered().title(" Confirm "));
	frame.render_widget(body, dialog);
}

/// Name entry for a new favorite.
pub fn render_editor(frame: &mut Frame, area: Rect, session: &EditorSession, theme: &Theme) {
	let dialog = centered(area, DIALOG_WIDTH, EDITOR_HEIGHT);
	frame.render_widget(Clear, dialog);

	let block = Block::bordered()
		.title(format!(" Save as ({}) ", session.mode()))
		.style(theme.dialog_style());
	let inner = block.inner(dialog);
	frame.render_widget(block, dialog);

	let [criteria_area, input_area, message_area] = Layout::vertical([
		Constraint::Length(1),
		Constraint::Length(3),
		Constraint::Length(1),
	])
	.areas(inner);

	frame.render_widget(
		Paragraph::new(session.criteria().summary()).style(theme.empty_style()),
		criteria_area,
	);
	frame.render_widget(session.name_input(), input_area);

	let message = match session.error() {
		Some(error) => Span::styled(error.to_string(), theme.failure_style()),
		None => Span::styled("enter: save   esc: cancel", theme.empty_style()),
	};
	frame.render_widget(Paragraph::new(Line::from(message)), message_area);
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;
	use crate::collaborators::{CommitExecutor, CommitRequest};
	use crate::controller::SaveSearchController;
	use crate::model::{Entry, SearchCriteria, SearchMode};
	use crate::registry::Registry;
	use crate::store::FavoritesFile;
	use crate::ui::editor::SaveEditor;
	use crate::ui::notifier::StatusNotifier;

	#[test]
	fn confirm_dialog_names_the_entry() {
		let registry = Registry::from_entries([Entry::new("g1", "Alpha")]);
		let mut controller = SaveSearchController::new(
			registry,
			|| -> Option<SearchCriteria> { None },
			StatusNotifier::new(),
			SaveEditor::new(FavoritesFile::new("unused.json")),
		);
		controller.item_clicked(crate::presenter::ItemClicked { id: "g1".into() });
		controller.save();
		let prompt = controller.notifier_mut().take_prompt().expect("prompt");

		let mut terminal = Terminal::new(TestBackend::new(70, 10)).unwrap();
		terminal
			.draw(|frame| render_confirm(frame, frame.area(), &prompt, &Theme::default()))
			.unwrap();
		let view = terminal.backend().to_string();

		assert!(view.contains("Confirm"));
		assert!(view.contains("Do you want to overwrite Alpha ?"));
		assert!(view.contains("y/enter: yes"));
		let _ = prompt.confirmation.decline();
	}

	#[test]
	fn editor_dialog_shows_criteria_and_hints() {
		let mut editor = SaveEditor::new(FavoritesFile::new("unused.json"));
		let source = || Some(SearchCriteria::new().with_tag("PII"));
		editor.launch(CommitRequest {
			registry: &Registry::new(),
			criteria: &source,
			mode: SearchMode::Advanced,
			pending: None,
		});
		let session = editor.session().expect("editor open");

		let mut terminal = Terminal::new(TestBackend::new(70, 12)).unwrap();
		terminal
			.draw(|frame| render_editor(frame, frame.area(), session, &Theme::default()))
			.unwrap();
		let view = terminal.backend().to_string();

		assert!(view.contains("Save as (advanced)"));
		assert!(view.contains("tag=PII"));
		assert!(view.contains("esc: cancel"));
	}
}
