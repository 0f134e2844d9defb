use clap::{
	ColorChoice, Parser,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Command-line arguments accepted by the `nothree` binary.
///
/// There are no options; the parser only provides `--help` and `--version`.
#[derive(Parser, Debug)]
#[command(
	name = "nothree",
	version,
	about = "Type keywords, see matching files under your home directory, press Enter to open the folder",
	long_about = "Type at least four characters to search every file and folder under your home \
	              directory whose full path contains all of the space-separated keywords. Up/Down \
	              move the selection, Enter opens the containing folder, Esc or Ctrl+C quits.",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {}

/// Parse command line arguments, exiting on `--help`, `--version` or errors.
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}
