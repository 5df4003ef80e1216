use clap::Arg;
use clap::builder::StyledStr;
use clap::builder::styling::{AnsiColor, Color, Style};

/// Move possible values and env annotations into the help text, muted.
pub(crate) fn mute_cli_annotations(mut arg: Arg) -> Arg {
	let help = arg
		.get_help()
		.map(ToString::to_string)
		.unwrap_or_default();
	let mut annotations = Vec::new();

	if let Some(values) = possible_values_annotation(&arg) {
		arg = arg.hide_possible_values(true);
		annotations.push(values);
	}
	if let Some(env) = env_annotation(&arg) {
		arg = arg.hide_env(true);
		annotations.push(env);
	}
	if help.is_empty() && annotations.is_empty() {
		return arg;
	}

	let style = muted_style();
	let mut styled = StyledStr::new();
	styled.push_str(&help);
	for annotation in annotations {
		if !styled.to_string().is_empty() {
			styled.push_str(" ");
		}
		let _ = std::fmt::write(&mut styled, format_args!("{style}{annotation}{style:#}"));
	}
	arg.help(styled)
}

fn muted_style() -> Style {
	Style::new()
		.fg_color(Some(Color::Ansi(AnsiColor::BrightBlack)))
		.dimmed()
}

fn possible_values_annotation(arg: &Arg) -> Option<String> {
	if !arg.get_action().takes_values() {
		return None;
	}
	let visible: Vec<String> = arg
		.get_possible_values()
		.into_iter()
		.filter(|value| !value.is_hide_set())
		.map(|value| value.get_name().to_string())
		.collect();
	if visible.is_empty() {
		return None;
	}
	Some(format!("[possible values: {}]", visible.join(", ")))
}

fn env_annotation(arg: &Arg) -> Option<String> {
	let name = arg.get_env()?.to_string_lossy();
	if name.trim().is_empty() {
		return None;
	}
	Some(format!("[env: {name}=]"))
}
