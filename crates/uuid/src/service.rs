//! Internal implementation of the UUID generator.
//!
//! This module contains the v4 bit layout, the canonical string rendering and the
//! [`UuidService`] that ties both to a [`RandomSource`].

use crate::{OsRandom, RandomSource, UuidResult};
use std::fmt;

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// Length of the canonical hyphenated rendering.
pub const UUID_STRING_LEN: usize = ::uuid::fmt::Hyphenated::LENGTH;

/// Byte offsets of the four hyphens in the canonical rendering.
const HYPHEN_OFFSETS: [usize; 4] = [8, 13, 18, 23];

/// Offset of the version digit (first digit of the third group).
const VERSION_OFFSET: usize = 14;

/// Offset of the variant digit (first digit of the fourth group).
const VARIANT_OFFSET: usize = 19;

/// A version 4 UUID together with its canonical rendering.
///
/// The rendering is held in a fixed-size buffer owned by the value, so producing and
/// printing a `UuidString` never touches the heap.
///
/// # Construction
/// - [`UuidService::generate`] draws fresh random bits from the service's source.
/// - [`UuidString::from_random_bytes`] applies the v4 layout to bytes you already have.
///
/// # Display format
/// Always the canonical 36-character lowercase hyphenated form, for example
/// `550e8400-e29b-41d4-a716-446655440000`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct UuidString {
    uuid: Uuid,
    text: [u8; UUID_STRING_LEN],
}

impl UuidString {
    /// Builds a v4 UUID from 16 random bytes.
    ///
    /// The version nibble (high nibble of byte 6) is forced to `0100` and the top two bits of
    /// byte 8 are forced to `10`. The other 122 bits are kept as given.
    pub fn from_random_bytes(mut bytes: [u8; 16]) -> Self {
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;

        let uuid = Uuid::from_bytes(bytes);
        let mut text = [0u8; UUID_STRING_LEN];
        uuid.hyphenated().encode_lower(&mut text);

        Self { uuid, text }
    }

    /// Returns the canonical rendering.
    pub fn as_str(&self) -> &str {
        // `text` is only ever written by the hyphenated encoder
        std::str::from_utf8(&self.text).expect("hyphenated encoder writes ASCII only")
    }

    /// Returns the underlying `uuid::Uuid`.
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// First digit of the third group. Always `'4'`.
    pub fn version_digit(&self) -> char {
        char::from(self.text[VERSION_OFFSET])
    }

    /// First digit of the fourth group. Always one of `'8'`, `'9'`, `'a'`, `'b'`.
    pub fn variant_digit(&self) -> char {
        char::from(self.text[VARIANT_OFFSET])
    }

    /// Returns true if `input` has exactly the shape this crate emits.
    ///
    /// This is a purely syntactic check that validates:
    /// - Exactly 36 bytes long
    /// - Hyphens at offsets 8, 13, 18 and 23, lowercase hex digits everywhere else
    /// - Version digit `4` and a variant digit in `8`, `9`, `a`, `b`
    ///
    /// Uppercase input is rejected.
    pub fn is_canonical(input: &str) -> bool {
        let bytes = input.as_bytes();
        if bytes.len() != UUID_STRING_LEN {
            return false;
        }

        let shape_ok = bytes.iter().enumerate().all(|(i, b)| {
            if HYPHEN_OFFSETS.contains(&i) {
                *b == b'-'
            } else {
                matches!(b, b'0'..=b'9' | b'a'..=b'f')
            }
        });

        shape_ok
            && bytes[VERSION_OFFSET] == b'4'
            && matches!(bytes[VARIANT_OFFSET], b'8' | b'9' | b'a' | b'b')
    }
}

impl fmt::Display for UuidString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for UuidString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UuidString").field(&self.as_str()).finish()
    }
}

impl AsRef<str> for UuidString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UuidString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Generates v4 UUIDs from a [`RandomSource`].
///
/// Generations are independent of one another; the service holds no state besides its
/// source.
#[derive(Clone, Debug)]
pub struct UuidService<R = OsRandom> {
    source: R,
}

impl UuidService<OsRandom> {
    /// Creates a service backed by the operating system's random source.
    pub fn new() -> Self {
        Self { source: OsRandom }
    }
}

impl Default for UuidService<OsRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> UuidService<R> {
    /// Creates a service that draws its bits from `source`.
    pub fn with_source(source: R) -> Self {
        Self { source }
    }

    /// Generates one v4 UUID.
    ///
    /// # Errors
    ///
    /// Returns [`crate::UuidError::RandomSourceUnavailable`] if the source cannot supply 16
    /// bytes. No UUID is produced in that case.
    pub fn generate(&mut self) -> UuidResult<UuidString> {
        let mut bytes = [0u8; 16];
        self.source.fill(&mut bytes)?;
        Ok(UuidString::from_random_bytes(bytes))
    }
}

/// Generates one v4 UUID from the operating system's random source.
pub fn generate() -> UuidResult<UuidString> {
    UuidService::new().generate()
}
