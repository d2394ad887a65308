use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `quire` binary.
#[derive(Parser, Debug)]
#[command(
	name = "quire",
	version,
	long_version = long_version(),
	about = "Search a static site's index from a keyboard-driven palette",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "QUIRE_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short,
		long,
		value_name = "PATH",
		help = "JSON search index exported by the site build (default: search-index.json in the data directory)"
	)]
	pub(crate) index: Option<PathBuf>,
	#[arg(
		long = "debounce-ms",
		value_name = "MS",
		help = "Wait this long after the last keystroke before searching (default: 300)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long = "browse-url",
		value_name = "URL",
		help = "Link suggested when a search finds nothing (default: /blog/)"
	)]
	pub(crate) browse_url: Option<String>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs here (default: quire.log in the data directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print where the session ended"
	)]
	pub(crate) output: OutputFormat,
}
