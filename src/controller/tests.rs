use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::model::{Entry, SearchCriteria};
use crate::presenter::PresenterList;

#[derive(Default)]
struct RecordingNotifier {
	notices: Vec<Notice>,
	prompts: Vec<ConfirmPrompt>,
}

impl Notifier for RecordingNotifier {
	fn notify_info(&mut self, notice: Notice) {
		self.notices.push(notice);
	}

	fn notify_confirm(&mut self, prompt: ConfirmPrompt) {
		self.prompts.push(prompt);
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Launch {
	pending: Option<PendingCommit>,
	mode: SearchMode,
	registry_len: usize,
	criteria: Option<SearchCriteria>,
}

#[derive(Default)]
struct RecordingExecutor {
	launches: Vec<Launch>,
}

impl CommitExecutor for RecordingExecutor {
	fn launch(&mut self, request: CommitRequest<'_>) {
		self.launches.push(Launch {
			pending: request.pending,
			mode: request.mode,
			registry_len: request.registry.len(),
			criteria: request.criteria.current(),
		});
	}
}

type TestController = SaveSearchController<RecordingNotifier, RecordingExecutor>;

fn alpha_registry() -> Registry {
	Registry::from_entries([Entry::new("g1", "Alpha")])
}

fn controller_with(registry: Registry, criteria: Option<SearchCriteria>) -> TestController {
	SaveSearchController::new(
		registry,
		move || criteria.clone(),
		RecordingNotifier::default(),
		RecordingExecutor::default(),
	)
}

fn take_prompt(controller: &mut TestController) -> ConfirmPrompt {
	controller
		.notifier_mut()
		.prompts
		.pop()
		.expect("confirmation prompt")
}

#[test]
fn save_as_without_filters_only_notifies() {
	let mut controller = controller_with(Registry::from_entries(Vec::new()), Some(SearchCriteria::new()));

	assert_eq!(controller.save_as(), SaveAsOutcome::MissingFilter);

	assert_eq!(controller.notifier().notices, vec![Notice::NoSearchFilter]);
	assert!(controller.executor().launches.is_empty());
	assert!(!controller.save_enabled());
}

#[test]
fn save_as_without_any_criteria_only_notifies() {
	let mut controller = controller_with(alpha_registry(), None);
	assert_eq!(controller.save_as(), SaveAsOutcome::MissingFilter);
	assert!(controller.executor().launches.is_empty());
}

#[test]
fn save_as_with_any_filter_launches_a_create() {
	for criteria in [
		SearchCriteria::new().with_type("hive_table"),
		SearchCriteria::new().with_tag("PII"),
		SearchCriteria::new().with_query("orders"),
	] {
		let mut controller =
			controller_with(alpha_registry(), Some(criteria.clone())).with_mode(SearchMode::Advanced);

		assert_eq!(controller.save_as(), SaveAsOutcome::Launched);

		assert!(controller.notifier().notices.is_empty());
		assert!(controller.notifier().prompts.is_empty());
		assert_eq!(
			controller.executor().launches,
			vec![Launch {
				pending: None,
				mode: SearchMode::Advanced,
				registry_len: 1,
				criteria: Some(criteria),
			}]
		);
	}
}

#[test]
fn save_as_with_whitespace_query_launches_a_create() {
	let mut controller = controller_with(
		Registry::from_entries(Vec::new()),
		Some(SearchCriteria::new().with_query(" ")),
	);

	assert_eq!(controller.save_as(), SaveAsOutcome::Launched);

	assert!(controller.notifier().notices.is_empty());
	assert_eq!(controller.executor().launches.len(), 1);
	assert_eq!(controller.executor().launches[0].pending, None);
}

#[test]
fn save_without_selection_never_prompts() {
	let mut controller = controller_with(alpha_registry(), Some(SearchCriteria::new().with_tag("PII")));

	assert_eq!(controller.save(), SaveOutcome::NothingSelected);

	assert_eq!(controller.notifier().notices, vec![Notice::NoFavoriteSelected]);
	assert!(controller.notifier().prompts.is_empty());
	assert!(controller.executor().launches.is_empty());
}

#[test]
fn accepting_the_overwrite_launches_once_with_the_selected_entry() {
	let criteria = SearchCriteria::new().with_query("orders");
	let mut controller = controller_with(alpha_registry(), Some(criteria.clone()));
	let mut presenters = PresenterList::from_registry(controller.registry());
	let click = presenters.click(0).expect("alpha is clickable");
	controller.item_clicked(click);

	assert_eq!(controller.save(), SaveOutcome::AwaitingConfirmation);
	assert!(controller.executor().launches.is_empty());

	let prompt = take_prompt(&mut controller);
	assert!(prompt.message.contains("Alpha"));
	assert!(prompt.html && prompt.modal);

	let outcome = controller.resolve(prompt.confirmation.accept());

	assert_eq!(outcome, ResolveOutcome::Committed);
	assert_eq!(
		controller.executor().launches,
		vec![Launch {
			pending: Some(PendingCommit {
				name: "Alpha".into(),
				guid: EntryId::from("g1"),
			}),
			mode: SearchMode::Basic,
			registry_len: 1,
			criteria: Some(criteria),
		}]
	);
	assert!(!controller.confirmation_open());
}

#[test]
fn declining_the_overwrite_never_launches() {
	let mut controller = controller_with(alpha_registry(), Some(SearchCriteria::new().with_tag("PII")));
	controller.item_clicked(ItemClicked { id: "g1".into() });
	controller.save();

	let prompt = take_prompt(&mut controller);
	assert_eq!(controller.resolve(prompt.confirmation.decline()), ResolveOutcome::Declined);

	assert!(controller.executor().launches.is_empty());
	assert!(!controller.confirmation_open());
	assert_eq!(controller.save(), SaveOutcome::AwaitingConfirmation);
	let _ = take_prompt(&mut controller).confirmation.decline();
}

#[test]
fn second_save_while_confirming_is_rejected() {
	let mut controller = controller_with(alpha_registry(), None);
	controller.item_clicked(ItemClicked { id: "g1".into() });

	assert_eq!(controller.save(), SaveOutcome::AwaitingConfirmation);
	assert_eq!(controller.save(), SaveOutcome::Busy);

	assert_eq!(controller.notifier().prompts.len(), 1);
	assert!(controller.notifier().notices.is_empty());
}

#[test]
fn stale_resolution_never_launches() {
	let mut controller = controller_with(alpha_registry(), None);
	controller.item_clicked(ItemClicked { id: "g1".into() });
	controller.save();
	let first = take_prompt(&mut controller);
	assert_eq!(controller.resolve(first.confirmation.decline()), ResolveOutcome::Declined);

	controller.save();
	let second = take_prompt(&mut controller);

	let mut other = controller_with(alpha_registry(), None);
	other.item_clicked(ItemClicked { id: "g1".into() });
	other.save();
	let foreign = take_prompt(&mut other);

	assert_eq!(controller.resolve(foreign.confirmation.accept()), ResolveOutcome::Stale);
	assert!(controller.executor().launches.is_empty());
	assert!(controller.confirmation_open());

	assert_eq!(controller.resolve(second.confirmation.accept()), ResolveOutcome::Committed);
	assert_eq!(controller.executor().launches.len(), 1);
}

#[test]
fn save_enable_latches_after_first_click() {
	let mut controller = controller_with(alpha_registry(), None);
	assert!(!controller.save_enabled());

	controller.item_clicked(ItemClicked { id: "g1".into() });
	assert!(controller.save_enabled());

	controller.registry_mut().reset(Vec::new());
	assert!(controller.observe_registry());
	assert!(controller.selected().is_none());
	assert!(controller.save_enabled());

	controller.registry_mut().fail("offline");
	controller.observe_registry();
	assert!(controller.save_enabled());
}

#[test]
fn live_gating_follows_the_selection() {
	let mut controller = controller_with(alpha_registry(), None).with_gating(SaveGating::Live);
	assert!(!controller.save_enabled());

	controller.item_clicked(ItemClicked { id: "g1".into() });
	assert!(controller.save_enabled());

	controller.registry_mut().remove(&EntryId::from("g1"));
	controller.observe_registry();
	assert!(!controller.save_enabled());
	assert_eq!(controller.save(), SaveOutcome::NothingSelected);
}

#[test]
fn selection_of_a_vanished_entry_reports_nothing_selected() {
	let mut controller = controller_with(alpha_registry(), None);
	controller.item_clicked(ItemClicked { id: "g1".into() });
	controller.registry_mut().remove(&EntryId::from("g1"));

	// Not observed yet: the stale id is still held but no longer resolves.
	assert_eq!(controller.save(), SaveOutcome::NothingSelected);
	assert!(controller.notifier().prompts.is_empty());
}

#[test]
fn registry_events_drive_the_empty_affordance() {
	let mut controller = controller_with(Registry::new(), None);
	assert!(controller.affordances().loading);
	assert!(!controller.observe_registry());

	controller.registry_mut().reset(Vec::new());
	controller.observe_registry();
	assert!(!controller.affordances().loading);
	assert!(controller.affordances().empty);

	controller.registry_mut().add(Entry::new("g1", "Alpha"));
	controller.observe_registry();
	assert!(!controller.affordances().empty);

	controller.registry_mut().fail("offline");
	controller.observe_registry();
	assert!(!controller.affordances().empty);
	assert_eq!(controller.affordances().failure.as_deref(), Some("offline"));
}

#[test]
fn error_on_empty_registry_shows_empty_affordance() {
	let mut controller = controller_with(Registry::new(), None);
	controller.registry_mut().fail("offline");
	controller.observe_registry();
	assert!(controller.affordances().empty);
	assert!(!controller.affordances().loading);
}

#[test]
fn executor_sees_criteria_at_commit_time() {
	let current = Rc::new(RefCell::new(SearchCriteria::new().with_tag("draft")));
	let source = {
		let current = Rc::clone(&current);
		move || Some(current.borrow().clone())
	};
	let mut controller = SaveSearchController::new(
		alpha_registry(),
		source,
		RecordingNotifier::default(),
		RecordingExecutor::default(),
	);
	controller.item_clicked(ItemClicked { id: "g1".into() });
	controller.save();

	*current.borrow_mut() = SearchCriteria::new().with_tag("final");
	let prompt = take_prompt(&mut controller);
	controller.resolve(prompt.confirmation.accept());

	let launch = &controller.executor().launches[0];
	assert_eq!(
		launch.criteria.as_ref().and_then(|c| c.tag.as_deref()),
		Some("final")
	);
}

#[test]
fn gating_parses_case_insensitively() {
	assert_eq!(SaveGating::parse(" Live "), Some(SaveGating::Live));
	assert_eq!(SaveGating::parse("latch"), Some(SaveGating::Latch));
	assert_eq!(SaveGating::parse("sometimes"), None);
}
