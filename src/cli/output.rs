use anyhow::Result;
use savesearch::SessionOutcome;
use savesearch::ui::{CommitKind, CommitRecord};

fn describe(record: &CommitRecord) -> String {
	let action = match record.kind {
		CommitKind::Created => "created",
		CommitKind::Overwritten => "overwrote",
	};
	let summary = record.criteria.summary();
	if summary.is_empty() {
		format!("{action} {} '{}' ({})", record.id, record.name, record.mode)
	} else {
		format!(
			"{action} {} '{}' ({}): {summary}",
			record.id, record.name, record.mode
		)
	}
}

/// Print one line per saved change.
pub(crate) fn print_plain(outcome: &SessionOutcome) {
	if outcome.commits.is_empty() {
		println!("No favorites changed");
		return;
	}
	for record in &outcome.commits {
		println!("{}", describe(record));
	}
}

pub(crate) fn format_outcome_json(outcome: &SessionOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

pub(crate) fn print_json(outcome: &SessionOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
