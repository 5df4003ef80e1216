//! Per-entry presenters and the list that keeps a single one active.

use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Row};
use unicode_width::UnicodeWidthStr;

use crate::model::{Entry, EntryId, SearchMode};
use crate::registry::Registry;
use crate::theme::Theme;

const ACTIVE_MARKER: &str = "● ";
const INACTIVE_MARKER: &str = "  ";

/// Emitted once per click on an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemClicked {
	pub id: EntryId,
}

/// Renders one saved search and tracks whether it is the active one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPresenter {
	id: EntryId,
	name: String,
	summary: String,
	mode: SearchMode,
	active: bool,
}

impl ItemPresenter {
	#[must_use]
	pub fn new(entry: &Entry) -> Self {
		Self {
			id: entry.id.clone(),
			name: entry.name.clone(),
			summary: entry.criteria.summary(),
			mode: entry.mode,
			active: false,
		}
	}

	#[must_use]
	pub fn id(&self) -> &EntryId {
		&self.id
	}

	#[must_use]
	pub fn name(&self) -> &str {
		&self.name
	}

	#[must_use]
	pub fn summary(&self) -> &str {
		&self.summary
	}

	#[must_use]
	pub fn is_active(&self) -> bool {
		self.active
	}

	fn click(&mut self) -> ItemClicked {
		self.active = true;
		ItemClicked {
			id: self.id.clone(),
		}
	}

	/// Table row for this entry; `name_width` truncates long names.
	#[must_use]
	pub fn to_row(&self, theme: &Theme, name_width: usize) -> Row<'static> {
		let (marker, name_style) = if self.active {
			(ACTIVE_MARKER, theme.active_style())
		} else {
			(INACTIVE_MARKER, ratatui::style::Style::default())
		};
		let name = Line::from(vec![
			Span::styled(marker, name_style),
			Span::styled(truncate(&self.name, name_width), name_style),
		]);
		Row::new(vec![
			Cell::from(name),
			Cell::from(self.mode.as_str()),
			Cell::from(Span::styled(self.summary.clone(), theme.empty_style())),
		])
	}
}

fn truncate(text: &str, width: usize) -> String {
	if width == 0 || text.width() <= width {
		return text.to_string();
	}
	let mut out = String::new();
	let mut used = 0;
	for ch in text.chars() {
		let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
		if used + ch_width + 1 > width {
			break;
		}
		used += ch_width;
		out.push(ch);
	}
	out.push('…');
	out
}

/// Presenters mirroring the registry order, plus a keyboard cursor.
///
/// At most one presenter is active: clicking one deactivates its siblings.
#[derive(Debug, Clone, Default)]
pub struct PresenterList {
	items: Vec<ItemPresenter>,
	cursor: Option<usize>,
}

impl PresenterList {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn from_registry(registry: &Registry) -> Self {
		let mut list = Self::new();
		list.sync(registry);
		list
	}

	/// Rebuild presenters from the registry. The active entry and the cursor
	/// follow their entry when it survives.
	pub fn sync(&mut self, registry: &Registry) {
		let active = self.active().map(|item| item.id.clone());
		let under_cursor = self.cursor_item().map(|item| item.id.clone());

		self.items = registry.iter().map(ItemPresenter::new).collect();

		if let Some(item) = active.and_then(|id| self.items.iter_mut().find(|item| item.id == id)) {
			item.active = true;
		}
		self.cursor = under_cursor.and_then(|id| registry.position(&id)).or(self.cursor);
		self.ensure_cursor();
	}

	/// Mark the presenter at `index` active and report the click.
	pub fn click(&mut self, index: usize) -> Option<ItemClicked> {
		if index >= self.items.len() {
			return None;
		}
		for (position, item) in self.items.iter_mut().enumerate() {
			if position != index {
				item.active = false;
			}
		}
		self.cursor = Some(index);
		Some(self.items[index].click())
	}

	pub fn click_cursor(&mut self) -> Option<ItemClicked> {
		self.click(self.cursor?)
	}

	pub fn move_up(&mut self) {
		if let Some(cursor) = self.cursor
			&& cursor > 0
		{
			self.cursor = Some(cursor - 1);
		}
	}

	pub fn move_down(&mut self) {
		if let Some(cursor) = self.cursor
			&& cursor + 1 < self.items.len()
		{
			self.cursor = Some(cursor + 1);
		}
	}

	#[must_use]
	pub fn active(&self) -> Option<&ItemPresenter> {
		self.items.iter().find(|item| item.active)
	}

	#[must_use]
	pub fn cursor(&self) -> Option<usize> {
		self.cursor
	}

	#[must_use]
	pub fn cursor_item(&self) -> Option<&ItemPresenter> {
		self.items.get(self.cursor?)
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<&ItemPresenter> {
		self.items.get(index)
	}

	pub fn iter(&self) -> impl Iterator<Item = &ItemPresenter> {
		self.items.iter()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	fn ensure_cursor(&mut self) {
		if self.items.is_empty() {
			self.cursor = None;
		} else if let Some(cursor) = self.cursor {
			if cursor >= self.items.len() {
				self.cursor = Some(self.items.len() - 1);
			}
		} else {
			self.cursor = Some(0);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn registry() -> Registry {
		Registry::from_entries([
			Entry::new("g1", "Alpha"),
			Entry::new("g2", "Beta"),
			Entry::new("g3", "Gamma"),
		])
	}

	#[test]
	fn clicking_activates_one_and_deactivates_siblings() {
		let mut list = PresenterList::from_registry(&registry());

		let first = list.click(0).expect("click alpha");
		assert_eq!(first.id, EntryId::from("g1"));
		let second = list.click(2).expect("click gamma");
		assert_eq!(second.id, EntryId::from("g3"));

		let active: Vec<_> = list.iter().filter(|item| item.is_active()).collect();
		assert_eq!(active.len(), 1);
		assert_eq!(active[0].name(), "Gamma");
		assert_eq!(list.cursor(), Some(2));
	}

	#[test]
	fn clicking_the_active_item_emits_again() {
		let mut list = PresenterList::from_registry(&registry());
		assert!(list.click(1).is_some());
		assert_eq!(list.click(1).map(|event| event.id), Some(EntryId::from("g2")));
	}

	#[test]
	fn out_of_range_click_is_ignored() {
		let mut list = PresenterList::from_registry(&registry());
		assert!(list.click(7).is_none());
		assert!(list.active().is_none());
	}

	#[test]
	fn sync_keeps_active_entry_when_it_survives() {
		let mut registry = registry();
		let mut list = PresenterList::from_registry(&registry);
		list.click(1);

		registry.remove(&EntryId::from("g1"));
		list.sync(&registry);

		assert_eq!(list.active().map(ItemPresenter::name), Some("Beta"));
		assert_eq!(list.cursor(), Some(0));
	}

	#[test]
	fn sync_drops_active_entry_and_clamps_cursor() {
		let mut registry = registry();
		let mut list = PresenterList::from_registry(&registry);
		list.click(2);

		registry.remove(&EntryId::from("g3"));
		list.sync(&registry);

		assert!(list.active().is_none());
		assert_eq!(list.cursor(), Some(1));

		registry.reset(Vec::new());
		list.sync(&registry);
		assert_eq!(list.cursor(), None);
		assert!(list.click_cursor().is_none());
	}

	#[test]
	fn cursor_moves_within_bounds() {
		let mut list = PresenterList::from_registry(&registry());
		assert_eq!(list.cursor(), Some(0));
		list.move_up();
		assert_eq!(list.cursor(), Some(0));
		list.move_down();
		list.move_down();
		list.move_down();
		assert_eq!(list.cursor(), Some(2));
	}

	#[test]
	fn long_names_are_truncated_with_ellipsis() {
		assert_eq!(truncate("Quarterly revenue", 10), "Quarterly…");
		assert_eq!(truncate("Short", 10), "Short");
	}
}
