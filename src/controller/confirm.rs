use serde::Serialize;

use crate::messages;
use crate::model::EntryId;

/// The entry an overwrite targets, captured when `save` is requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingCommit {
	pub name: String,
	pub guid: EntryId,
}

/// Identifies one confirmation round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfirmTicket(pub(crate) u64);

/// Handle for a pending confirmation. Accepting or declining consumes it, so
/// each prompt resolves at most once.
#[derive(Debug)]
#[must_use = "a confirmation must be accepted or declined"]
pub struct Confirmation {
	ticket: ConfirmTicket,
	payload: PendingCommit,
}

impl Confirmation {
	pub(crate) fn new(ticket: ConfirmTicket, payload: PendingCommit) -> Self {
		Self { ticket, payload }
	}

	pub fn ticket(&self) -> ConfirmTicket {
		self.ticket
	}

	pub fn payload(&self) -> &PendingCommit {
		&self.payload
	}

	pub fn accept(self) -> ConfirmResolution {
		ConfirmResolution {
			ticket: self.ticket,
			accepted: Some(self.payload),
		}
	}

	pub fn decline(self) -> ConfirmResolution {
		ConfirmResolution {
			ticket: self.ticket,
			accepted: None,
		}
	}
}

/// Outcome of a confirmation, handed back to the controller.
#[derive(Debug)]
#[must_use = "pass the resolution to the controller"]
pub struct ConfirmResolution {
	ticket: ConfirmTicket,
	accepted: Option<PendingCommit>,
}

impl ConfirmResolution {
	pub fn ticket(&self) -> ConfirmTicket {
		self.ticket
	}

	#[must_use]
	pub fn is_accepted(&self) -> bool {
		self.accepted.is_some()
	}

	pub(crate) fn into_payload(self) -> Option<PendingCommit> {
		self.accepted
	}
}

/// Modal yes/no request sent to the notifier.
#[derive(Debug)]
pub struct ConfirmPrompt {
	/// Markup message; the entry name is wrapped in `<b>` tags.
	pub message: String,
	pub html: bool,
	pub modal: bool,
	pub confirmation: Confirmation,
}

impl ConfirmPrompt {
	pub(crate) fn overwrite(confirmation: Confirmation) -> Self {
		let message = format!(
			"{} <b>{}</b> ?",
			messages::OVERWRITE_PROMPT,
			escape_markup(&confirmation.payload().name)
		);
		Self {
			message,
			html: true,
			modal: true,
			confirmation,
		}
	}

	/// The message split into plain and emphasized runs, markup removed.
	#[must_use]
	pub fn segments(&self) -> Vec<MessageSegment> {
		if !self.html {
			return vec![MessageSegment::plain(self.message.clone())];
		}

		let mut segments = Vec::new();
		let mut rest = self.message.as_str();
		while let Some(start) = rest.find("<b>") {
			segments.push(MessageSegment::plain(unescape_markup(&rest[..start])));
			let emphasized = &rest[start + "<b>".len()..];
			let end = emphasized.find("</b>").unwrap_or(emphasized.len());
			segments.push(MessageSegment {
				text: unescape_markup(&emphasized[..end]),
				emphasis: true,
			});
			rest = emphasized.get(end + "</b>".len()..).unwrap_or("");
		}
		segments.push(MessageSegment::plain(unescape_markup(rest)));
		segments.retain(|segment| !segment.text.is_empty());
		segments
	}

	/// The message with markup removed, for surfaces that cannot style it.
	#[must_use]
	pub fn plain_message(&self) -> String {
		self.segments()
			.into_iter()
			.map(|segment| segment.text)
			.collect()
	}
}

/// A run of prompt text, optionally emphasized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSegment {
	pub text: String,
	pub emphasis: bool,
}

impl MessageSegment {
	fn plain(text: String) -> Self {
		Self {
			text,
			emphasis: false,
		}
	}
}

fn escape_markup(text: &str) -> String {
	text.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
}

fn unescape_markup(text: &str) -> String {
	text.replace("&lt;", "<")
		.replace("&gt;", ">")
		.replace("&amp;", "&")
}
