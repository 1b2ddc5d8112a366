//! Free-Will Experiment Entropy Abstraction
//!
//! Every random draw in the experiment goes through one of two sources,
//! passed explicitly to the stage that needs it:
//!
//! - [`DeterministicSource`]: seeded ChaCha8 stream. Drives the baseline
//!   population and the influence index selection, so those are exactly
//!   reproducible from a single 64-bit seed.
//! - [`NonReproducibleSource`]: seeded from OS entropy on construction. Drives
//!   only the observer's sample draw, which must differ run to run.
//!
//! # Example
//!
//! ```ignore
//! use freewill_env::{DeterministicSource, EntropySource, NonReproducibleSource};
//!
//! let master = DeterministicSource::new(42);
//! let mut population_rng = master.derive(1);
//! let mut observer_rng = NonReproducibleSource::new()?;
//!
//! assert!(population_rng.is_reproducible());
//! assert!(!observer_rng.is_reproducible());
//! ```

mod source;
mod deterministic;
mod os_impl;
mod error;

pub use source::EntropySource;
pub use deterministic::DeterministicSource;
pub use os_impl::NonReproducibleSource;
pub use error::EnvError;
