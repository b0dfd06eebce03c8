//! Random (version 4) UUID generation.
//!
//! Every identifier produced by this crate is rendered in its *canonical* textual form:
//! **36 lowercase characters**, grouped 8-4-4-4-12 and separated by hyphens.
//!
//! ## Canonical UUID form
//! - Length: 36
//! - Hyphens at byte offsets 8, 13, 18 and 23
//! - All other characters: `0-9` and `a-f` only
//! - First digit of the third group: `4` (version)
//! - First digit of the fourth group: one of `8`, `9`, `a`, `b` (RFC 4122 variant)
//! - Example: `550e8400-e29b-41d4-a716-446655440000`
//!
//! ## Bit layout
//! Of the 128 bits, 122 come straight from the random source. The remaining six are fixed:
//! - bits 48–51 (high nibble of byte 6) are set to `0100`
//! - bits 64–65 (top two bits of byte 8) are set to `10`
//!
//! ## Randomness
//! [`UuidService::new`] reads from the operating system via [`OsRandom`]. There is no seeded
//! generator, so short-lived processes started in quick succession cannot repeat each other's
//! output. If the operating system source cannot be read, generation fails with
//! [`UuidError::RandomSourceUnavailable`] instead of producing a low-entropy value.

mod random;
mod service;

// Re-export public types
pub use random::{OsRandom, RandomSource};
pub use service::{generate, Uuid, UuidService, UuidString, UUID_STRING_LEN};

/// Error type for UUID operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// The platform random source could not be read
    #[error("random source unavailable: {0}")]
    RandomSourceUnavailable(String),
}

/// Result type for UUID operations.
pub type UuidResult<T> = Result<T, UuidError>;
