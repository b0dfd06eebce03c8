//! `get-uuid`: print random (v4) UUIDs, one per line.
//!
//! ```text
//! $ get-uuid -n 2
//! 9b2f4a1e-6d0c-4f3b-a1f7-2c8e5d9b0a43
//! 0c7d1e52-88a4-4b61-9e0d-f3a2b6c41d87
//! $ get-uuid -j
//! "uuid": "5e1a7c30-2b9f-4d8e-8c64-a09f3b7e12d5",
//! ```

mod args;
mod config;
mod driver;
mod error;

use args::Invocation;
use error::CliError;
use getuuid_uuid::UuidService;
use std::io::{self, BufWriter};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    init_tracing();

    let config = match args::parse_invocation(std::env::args_os()) {
        Ok(Invocation::Generate(config)) => config,
        Ok(Invocation::Info(text)) => {
            return match driver::write_info(&mut io::stdout().lock(), &text) {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => report(err),
            };
        }
        Err(err) => return report(err),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut service = UuidService::new();

    match driver::run(&config, &mut service, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => report(err),
    }
}

/// Diagnostics go to stderr so stdout only ever carries UUIDs. `RUST_LOG` overrides the default
/// `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn report(err: CliError) -> ExitCode {
    // the reader went away; nothing left to do
    if err.is_closed_pipe() {
        return ExitCode::SUCCESS;
    }

    match &err {
        // already rendered by clap, usage included
        CliError::InvalidArgument(usage) => eprintln!("{}", usage.trim_end()),
        _ => eprintln!("get-uuid: {err}"),
    }
    ExitCode::from(err.exit_code())
}
