//! Reproducible generation seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed that fully determines one generated problem.
///
/// Seeds round-trip through a 64-character lowercase hex string, which is
/// the form shown to users and accepted back for reproduction (bug reports,
/// benches, deterministic tests).
///
/// # Examples
///
/// ```
/// use colsum_generator::ProblemSeed;
///
/// let seed: ProblemSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
///     .parse()
///     .unwrap();
/// assert_eq!(seed.to_string().len(), 64);
/// assert_eq!(seed.to_string().parse::<ProblemSeed>().unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProblemSeed([u8; 32]);

impl ProblemSeed {
    /// Creates a fresh seed from the thread-local RNG.
    #[must_use]
    pub fn new_random() -> Self {
        let mut bytes = [0u8; 32];
        rand::rng().fill(&mut bytes);
        Self(bytes)
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Derives the sampling RNG for this seed.
    ///
    /// The seed bytes are hashed so that structurally similar seeds (for
    /// example all-zero vs. one-bit-set) still yield unrelated streams.
    pub(crate) fn rng(&self) -> Pcg64Mcg {
        let digest = Sha256::digest(self.0);
        let mut state = [0u8; 16];
        state.copy_from_slice(&digest[..16]);
        Pcg64Mcg::from_seed(state)
    }
}

impl Display for ProblemSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`ProblemSeed`] from a hex string fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The input was not exactly 64 hex characters.
    #[display("seed must be 64 hex characters, got {_0}")]
    InvalidLength(#[error(not(source))] usize),
    /// The input contained a non-hex character.
    #[display("seed contains a non-hex character")]
    InvalidHexDigit,
}

impl FromStr for ProblemSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(ParseSeedError::InvalidLength(s.len()));
        }
        let mut bytes = [0u8; 32];
        for (i, chunk) in s.as_bytes().chunks_exact(2).enumerate() {
            let pair = str::from_utf8(chunk).map_err(|_| ParseSeedError::InvalidHexDigit)?;
            bytes[i] =
                u8::from_str_radix(pair, 16).map_err(|_| ParseSeedError::InvalidHexDigit)?;
        }
        Ok(Self(bytes))
    }
}
