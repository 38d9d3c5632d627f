//! Identifier generation for new user records

use std::fmt::Debug;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default identifier length
pub const DEFAULT_ID_LENGTH: usize = 16;

/// Mixed-case hex alphabet; lowercasing makes letters twice as likely as digits
const HEX_ALPHABET: &[u8] = b"1234567890aAbBcCdDeEfF";

/// Source of record identifiers
pub trait IdGenerator: Send + Sync + Debug {
    /// Generate an identifier of exactly `length` characters
    fn generate(&self, length: usize) -> String;
}

/// Generator of lowercase hexadecimal-alphabet identifiers
///
/// Uniqueness is not checked.
#[derive(Debug)]
pub struct HexIdGenerator<R: Rng + Send = StdRng> {
    rng: Mutex<R>,
}

impl HexIdGenerator<StdRng> {
    /// Create a generator seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a deterministic generator, for tests and reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> HexIdGenerator<R> {
    /// Create a generator drawing from the given random source
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Default for HexIdGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + Send + Debug> IdGenerator for HexIdGenerator<R> {
    fn generate(&self, length: usize) -> String {
        // A poisoned lock still holds a usable RNG
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        (0..length)
            .map(|_| {
                let index = rng.gen_range(0..HEX_ALPHABET.len());
                HEX_ALPHABET[index].to_ascii_lowercase() as char
            })
            .collect()
    }
}
