//! Command-line surface.

use crate::config::RunConfig;
use crate::error::{CliError, CliResult};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;

/// Text printed by `--version`: version, build metadata and bundled library credits.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\n",
    "built with rustc ",
    env!("VERGEN_RUSTC_SEMVER"),
    " for ",
    env!("VERGEN_CARGO_TARGET_TRIPLE"),
    " (debug: ",
    env!("VERGEN_CARGO_DEBUG"),
    ")\n",
    "\n",
    "Bundled libraries:\n",
    "  clap         command-line parsing (MIT OR Apache-2.0)\n",
    "  getrandom    operating system randomness (MIT OR Apache-2.0)\n",
    "  serde_json   JSON rendering (MIT OR Apache-2.0)\n",
    "  tracing      diagnostics (MIT)\n",
    "  uuid         UUID layout and formatting (Apache-2.0 OR MIT)",
);

#[derive(Debug, Parser)]
#[command(name = "get-uuid")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Generate random (v4) UUIDs")]
#[command(
    long_about = "Generate random (v4) UUIDs and print one per line, optionally as \
                  `\"uuid\": \"<value>\", ` fragments for pasting into a JSON file."
)]
pub struct Cli {
    /// Output each UUID as a JSON key/value fragment
    #[arg(short = 'j', long = "json")]
    pub json: bool,

    /// Number of UUIDs to generate and output
    #[arg(
        short = 'n',
        long = "count",
        value_name = "COUNT",
        default_value_t = 1,
        allow_negative_numbers = true,
        value_parser = parse_count
    )]
    pub count: u64,
}

/// What the process should do after parsing the command line.
#[derive(Debug)]
pub enum Invocation {
    /// Generate UUIDs with this configuration.
    Generate(RunConfig),
    /// Help or version text was requested. Print it to stdout and exit successfully.
    Info(String),
}

/// Parses `args` (including the program name) into an [`Invocation`].
///
/// # Errors
///
/// Returns [`CliError::InvalidArgument`] carrying the rendered message and full help for any
/// malformed input: unknown options, a missing value, or a count that is not a non-negative
/// integer.
pub fn parse_invocation<I, T>(args: I) -> CliResult<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Invocation::Generate(RunConfig::from(cli))),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                Ok(Invocation::Info(err.render().to_string()))
            }
            _ => Err(CliError::InvalidArgument(format!(
                "{}\n{}",
                err.render(),
                Cli::command().render_help()
            ))),
        },
    }
}

/// Parses a UUID count. Zero is allowed; negative and non-numeric values are not.
fn parse_count(input: &str) -> Result<u64, String> {
    input
        .parse::<u64>()
        .map_err(|_| format!("count must be a non-negative integer, got '{input}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    fn generate(args: &[&str]) -> RunConfig {
        match parse_invocation(args) {
            Ok(Invocation::Generate(config)) => config,
            other => panic!("Expected Generate for {args:?}, got {other:?}"),
        }
    }

    fn invalid(args: &[&str]) -> String {
        match parse_invocation(args) {
            Err(CliError::InvalidArgument(msg)) => msg,
            other => panic!("Expected InvalidArgument for {args:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let config = generate(&["get-uuid"]);

        assert_eq!(config.count(), 1);
        assert_eq!(config.format(), OutputFormat::Plain);
    }

    #[test]
    fn test_count_and_json_flags() {
        let config = generate(&["get-uuid", "-j", "-n", "2"]);

        assert_eq!(config.count(), 2);
        assert_eq!(config.format(), OutputFormat::JsonFragment);
    }

    #[test]
    fn test_long_forms() {
        let config = generate(&["get-uuid", "--json", "--count=5"]);

        assert_eq!(config.count(), 5);
        assert_eq!(config.format(), OutputFormat::JsonFragment);
    }

    #[test]
    fn test_zero_count_is_valid() {
        assert_eq!(generate(&["get-uuid", "-n", "0"]).count(), 0);
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let msg = invalid(&["get-uuid", "-n", "-5"]);

        assert!(msg.contains("non-negative integer"), "unexpected message: {msg}");
        assert!(msg.contains("Usage"), "usage missing from: {msg}");
    }

    #[test]
    fn test_non_numeric_count_is_rejected() {
        let msg = invalid(&["get-uuid", "-n", "abc"]);

        assert!(msg.contains("'abc'"), "unexpected message: {msg}");
    }

    #[test]
    fn test_padded_count_is_rejected() {
        let msg = invalid(&["get-uuid", "-n", " 5"]);

        assert!(msg.contains("non-negative integer"), "unexpected message: {msg}");
    }

    #[test]
    fn test_overflowing_count_is_rejected() {
        invalid(&["get-uuid", "-n", "99999999999999999999999"]);
    }

    #[test]
    fn test_missing_count_value_is_rejected() {
        invalid(&["get-uuid", "-n"]);
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        invalid(&["get-uuid", "-x"]);
    }

    #[test]
    fn test_help_is_info() {
        match parse_invocation(["get-uuid", "--help"]) {
            Ok(Invocation::Info(text)) => {
                assert!(text.contains("-n, --count <COUNT>"), "help was: {text}");
                assert!(text.contains("-j, --json"), "help was: {text}");
            }
            other => panic!("Expected Info, got {other:?}"),
        }
    }

    #[test]
    fn test_long_version_reports_build_and_credits() {
        match parse_invocation(["get-uuid", "--version"]) {
            Ok(Invocation::Info(text)) => {
                assert!(text.contains(env!("CARGO_PKG_VERSION")));
                assert!(text.contains("built with rustc "));
                assert!(text.contains(env!("VERGEN_CARGO_TARGET_TRIPLE")));
                assert!(text.contains("Bundled libraries"));
            }
            other => panic!("Expected Info, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("0"), Ok(0));
        assert_eq!(parse_count("42"), Ok(42));
        assert!(parse_count("-1").is_err());
        assert!(parse_count("1.5").is_err());
        assert!(parse_count("").is_err());
        assert!(parse_count(" 5 ").is_err());
        assert!(parse_count("5 ").is_err());
    }
}
