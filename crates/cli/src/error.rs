use getuuid_uuid::UuidError;

/// Exit status for malformed command-line input.
pub const EXIT_INVALID_ARGUMENT: u8 = 1;

/// Exit status for failures after argument parsing succeeded.
pub const EXIT_RUNTIME_FAILURE: u8 = 2;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Malformed or out-of-range command-line input. Holds the rendered message and usage.
    #[error("{0}")]
    InvalidArgument(String),
    #[error(transparent)]
    RandomSourceUnavailable(#[from] UuidError),
    #[error("failed to render JSON fragment: {0}")]
    Render(serde_json::Error),
    #[error("failed to write output: {0}")]
    Output(std::io::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::InvalidArgument(_) => EXIT_INVALID_ARGUMENT,
            CliError::RandomSourceUnavailable(_) | CliError::Render(_) | CliError::Output(_) => {
                EXIT_RUNTIME_FAILURE
            }
        }
    }

    /// True when the reader of stdout went away (e.g. `get-uuid -n 1000 | head -1`).
    pub fn is_closed_pipe(&self) -> bool {
        matches!(self, CliError::Output(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

pub type CliResult<T> = std::result::Result<T, CliError>;
