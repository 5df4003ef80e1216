use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::App;
use super::app::SessionOutcome;
use crate::controller::{ResolveOutcome, SaveAsOutcome};

impl App {
	/// Handle one key press. Returns the session outcome once the user quits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<SessionOutcome> {
		if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
			return Some(self.outcome());
		}

		if self.controller.executor().is_editing() {
			self.controller.executor_mut().handle_key(key);
			self.pump_executor();
			return None;
		}

		if self.controller.notifier().prompt().is_some() {
			self.answer_prompt(key);
			return None;
		}

		self.status = None;
		self.controller.notifier_mut().clear_notice();

		match key.code {
			KeyCode::Esc | KeyCode::Char('q') => return Some(self.outcome()),
			KeyCode::Up | KeyCode::Char('k') => self.move_cursor_up(),
			KeyCode::Down | KeyCode::Char('j') => self.move_cursor_down(),
			KeyCode::Enter | KeyCode::Char(' ') => self.select_under_cursor(),
			KeyCode::Char('s') => {
				if self.controller.save_enabled() {
					let outcome = self.controller.save();
					debug!(?outcome, "save requested");
					self.resolve_displaced();
				}
			}
			KeyCode::Char('a') => {
				if self.controller.save_as() == SaveAsOutcome::Launched {
					self.pump_executor();
				}
			}
			KeyCode::Char('r') => self.refresh(),
			_ => {}
		}
		None
	}

	fn answer_prompt(&mut self, key: KeyEvent) {
		let accept = match key.code {
			KeyCode::Char('y' | 'Y') | KeyCode::Enter => true,
			KeyCode::Char('n' | 'N') | KeyCode::Esc => false,
			_ => return,
		};
		let Some(prompt) = self.controller.notifier_mut().take_prompt() else {
			return;
		};
		let resolution = if accept {
			prompt.confirmation.accept()
		} else {
			prompt.confirmation.decline()
		};
		if self.controller.resolve(resolution) == ResolveOutcome::Declined {
			self.status = Some("Overwrite cancelled".to_string());
		}
		self.pump_executor();
	}

	/// A prompt pushed out of the notifier still resolves through the
	/// controller, which ignores it unless its ticket is the open one.
	fn resolve_displaced(&mut self) {
		if let Some(resolution) = self.controller.notifier_mut().take_displaced() {
			let outcome = self.controller.resolve(resolution);
			debug!(?outcome, "displaced confirmation resolved");
		}
	}

	fn select_under_cursor(&mut self) {
		if let Some(click) = self.presenters.click_cursor() {
			self.controller.item_clicked(click);
		}
	}

	fn move_cursor_up(&mut self) {
		self.presenters.move_up();
		self.table_state.select(self.presenters.cursor());
	}

	fn move_cursor_down(&mut self) {
		self.presenters.move_down();
		self.table_state.select(self.presenters.cursor());
	}
}
