//! Widgets composing the favorites view.

/// Confirmation and name-entry overlays.
pub mod dialog;
/// Title row with the loading indicator.
pub mod header;
/// Favorites table and its placeholder messages.
pub mod list;
/// Key hints and notices.
pub mod status;

pub use dialog::{render_confirm, render_editor};
pub use header::{HeaderContext, render_header};
pub use list::render_favorites;
pub use status::{StatusLine, render_status};

use ratatui::layout::Rect;

/// Rectangle of at most `width` x `height` centred in `area`.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
	let width = width.min(area.width);
	let height = height.min(area.height);
	Rect {
		x: area.x + (area.width - width) / 2,
		y: area.y + (area.height - height) / 2,
		width,
		height,
	}
}
