use anyhow::Result;
use quire_tui::SessionOutcome;

/// Print where the session ended, then the visited locations.
pub(crate) fn print_plain(outcome: &SessionOutcome) {
	println!("{}", outcome.url);
	if outcome.history.is_empty() {
		return;
	}
	println!("Visited:");
	for url in &outcome.history {
		println!("  {url}");
	}
}

pub(crate) fn format_outcome_json(outcome: &SessionOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &SessionOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
