use clap::ValueEnum;

/// How the session outcome is printed after the terminal is restored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
