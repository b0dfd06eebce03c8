//! Build script for the `getuuid-cli` crate.
//!
//! ## Purpose
//! Emits the compiler version, target triple and debug setting as `VERGEN_*` variables so
//! `get-uuid --version` can report how the binary was built.

use anyhow::Result;
use vergen::{CargoBuilder, Emitter, RustcBuilder};

fn main() -> Result<()> {
    let cargo = CargoBuilder::default()
        .target_triple(true)
        .debug(true)
        .build()?;
    let rustc = RustcBuilder::default().semver(true).build()?;

    let mut emitter = Emitter::default();
    emitter
        .add_instructions(&cargo)?
        .add_instructions(&rustc)?;
    emitter.emit()
}
