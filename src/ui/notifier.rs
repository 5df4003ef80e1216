use tracing::warn;

use crate::collaborators::{Notice, Notifier};
use crate::controller::{ConfirmPrompt, ConfirmResolution};

/// Holds the notice shown in the status line and the open confirmation
/// dialog until the user answers it.
#[derive(Debug, Default)]
pub struct StatusNotifier {
	notice: Option<Notice>,
	prompt: Option<ConfirmPrompt>,
	/// Declined prompt pushed out by a newer one, waiting to reach the controller.
	displaced: Option<ConfirmResolution>,
}

impl StatusNotifier {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn notice(&self) -> Option<Notice> {
		self.notice
	}

	pub fn clear_notice(&mut self) {
		self.notice = None;
	}

	#[must_use]
	pub fn prompt(&self) -> Option<&ConfirmPrompt> {
		self.prompt.as_ref()
	}

	pub fn take_prompt(&mut self) -> Option<ConfirmPrompt> {
		self.prompt.take()
	}

	pub fn take_displaced(&mut self) -> Option<ConfirmResolution> {
		self.displaced.take()
	}
}

impl Notifier for StatusNotifier {
	fn notify_info(&mut self, notice: Notice) {
		self.notice = Some(notice);
	}

	fn notify_confirm(&mut self, prompt: ConfirmPrompt) {
		if let Some(previous) = self.prompt.replace(prompt) {
			warn!(ticket = ?previous.confirmation.ticket(), "replacing an unanswered confirmation");
			self.displaced = Some(previous.confirmation.decline());
		}
	}
}
