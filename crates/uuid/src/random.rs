//! Sources of random bytes for UUID generation.

use crate::{UuidError, UuidResult};

/// Something that can fill a buffer with uniformly distributed random bytes.
///
/// Implementations must either fill the whole of `dest` or return an error. A partially
/// filled buffer must never be reported as success.
pub trait RandomSource {
    /// Fills `dest` with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::RandomSourceUnavailable`] if the source cannot be read.
    fn fill(&mut self, dest: &mut [u8]) -> UuidResult<()>;
}

/// The operating system's random source (`getrandom(2)`, `/dev/urandom`, `BCryptGenRandom`, ...).
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&mut self, dest: &mut [u8]) -> UuidResult<()> {
        getrandom::getrandom(dest).map_err(|e| UuidError::RandomSourceUnavailable(e.to_string()))
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn fill(&mut self, dest: &mut [u8]) -> UuidResult<()> {
        (**self).fill(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_random_fills_buffer() {
        let mut buf = [0u8; 64];
        OsRandom.fill(&mut buf).unwrap();

        // 64 zero bytes from a working source is not a realistic outcome
        assert!(buf.iter().any(|b| *b != 0));
    }

    #[test]
    fn test_os_random_consecutive_reads_differ() {
        let mut a = [0u8; 16];
        let mut b = [0u8; 16];
        OsRandom.fill(&mut a).unwrap();
        OsRandom.fill(&mut b).unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn test_mut_ref_forwards_to_source() {
        fn fill_with<R: RandomSource>(mut source: R, dest: &mut [u8]) -> UuidResult<()> {
            source.fill(dest)
        }

        let mut source = OsRandom;
        let mut buf = [0u8; 16];

        assert!(fill_with(&mut source, &mut buf).is_ok());
    }
}
