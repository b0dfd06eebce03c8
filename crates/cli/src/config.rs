//! Run configuration.
//!
//! The configuration is resolved once from the command line at startup and then passed into the
//! driver. Nothing is re-read while UUIDs are being generated.

use crate::args::Cli;
use crate::error::{CliError, CliResult};
use getuuid_uuid::UuidString;

/// How each generated UUID is written to standard output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The bare 36-character UUID.
    #[default]
    Plain,
    /// A `"uuid": "<value>", ` fragment for splicing into a JSON object body.
    JsonFragment,
}

impl OutputFormat {
    /// Key used by [`OutputFormat::JsonFragment`].
    pub const JSON_KEY: &'static str = "uuid";

    /// Renders one complete output line, including the trailing newline.
    ///
    /// The JSON fragment keeps its trailing comma and space so consecutive lines can be pasted
    /// straight into an object.
    pub fn render_line(self, uuid: &UuidString) -> CliResult<String> {
        match self {
            OutputFormat::Plain => Ok(format!("{uuid}\n")),
            OutputFormat::JsonFragment => {
                let key = serde_json::to_string(Self::JSON_KEY).map_err(CliError::Render)?;
                let value = serde_json::to_string(uuid).map_err(CliError::Render)?;
                Ok(format!("{key}: {value}, \n"))
            }
        }
    }
}

/// Configuration for a single run, resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    count: u64,
    format: OutputFormat,
}

impl RunConfig {
    /// Create a new `RunConfig`.
    pub fn new(count: u64, format: OutputFormat) -> Self {
        Self { count, format }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(1, OutputFormat::Plain)
    }
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        let format = if cli.json {
            OutputFormat::JsonFragment
        } else {
            OutputFormat::Plain
        };
        Self::new(cli.count, format)
    }
}
