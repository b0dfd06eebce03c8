//! Generation loop.

use crate::config::RunConfig;
use crate::error::{CliError, CliResult};
use getuuid_uuid::{RandomSource, UuidService};
use std::io::Write;

/// Generates `config.count()` UUIDs and writes one line per UUID to `out`.
///
/// Each line is fully rendered before any of it is written. If a generation fails, the lines
/// already produced are flushed and the error is returned without writing anything for the
/// failed iteration.
///
/// Returns the number of lines written.
pub fn run<R, W>(config: &RunConfig, service: &mut UuidService<R>, out: &mut W) -> CliResult<u64>
where
    R: RandomSource,
    W: Write,
{
    tracing::debug!(
        count = config.count(),
        format = ?config.format(),
        "generating UUIDs"
    );

    let format = config.format();
    let mut written = 0;

    for _ in 0..config.count() {
        let uuid = match service.generate() {
            Ok(uuid) => uuid,
            Err(e) => {
                tracing::debug!(written, "generation failed: {e}");
                out.flush().map_err(CliError::Output)?;
                return Err(e.into());
            }
        };

        let line = format.render_line(&uuid)?;
        out.write_all(line.as_bytes()).map_err(CliError::Output)?;
        written += 1;
    }

    out.flush().map_err(CliError::Output)?;
    tracing::debug!(written, "done");

    Ok(written)
}

/// Writes help or version text to `out` and flushes it.
pub fn write_info<W: Write>(out: &mut W, text: &str) -> CliResult<()> {
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(CliError::Output)
}
