//! Core entropy source trait.

use rand::RngCore;

/// A random stream with a known reproducibility contract.
///
/// # Implementations
///
/// - **Reproducible**: `DeterministicSource` - ChaCha8 seeded from a `u64`
/// - **Non-reproducible**: `NonReproducibleSource` - StdRng seeded from `OsRng`
///
/// Both are plain `RngCore`s, so `rand::Rng` and `rand::seq` helpers work on
/// them directly.
pub trait EntropySource: RngCore {
    /// Returns the seed this stream was built from.
    ///
    /// Returns `None` for streams seeded from OS entropy.
    fn seed(&self) -> Option<u64>;

    /// Returns true if replaying the seed reproduces the stream.
    fn is_reproducible(&self) -> bool {
        self.seed().is_some()
    }
}
