//! Run-scoped random source construction

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Build the random source for one run.
///
/// A supplied seed gives a fully reproducible draw; without one the RNG is
/// seeded from OS entropy and runs are independent.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
