//! OS-seeded entropy source for the observer's sample draw.

use crate::{EntropySource, EnvError};
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

/// Entropy source seeded from the operating system on construction.
///
/// Each instance starts from fresh OS entropy, so two instances never replay
/// the same stream. This models an observer whose partial view of the
/// population cannot be reproduced.
#[derive(Debug)]
pub struct NonReproducibleSource {
    rng: StdRng,
}

impl NonReproducibleSource {
    /// Creates a new source seeded from `OsRng`.
    pub fn new() -> Result<Self, EnvError> {
        let rng = StdRng::from_rng(OsRng).map_err(EnvError::entropy)?;
        Ok(Self { rng })
    }
}

impl RngCore for NonReproducibleSource {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

impl EntropySource for NonReproducibleSource {
    fn seed(&self) -> Option<u64> {
        // OS-seeded, nothing to replay
        None
    }
}
