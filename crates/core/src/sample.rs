//! Uniform random sampling without replacement

use rand::seq::index;
use rand::Rng;

/// Draw `min(count, items.len())` items uniformly at random without
/// replacement.
///
/// Every subset of that size is equally likely, and no item appears twice.
/// Output order is the draw's own (random) order, so when `count` covers the
/// whole input the result is a uniform shuffle of it.  The RNG is passed in
/// explicitly; with a seeded RNG the draw is fully reproducible.
pub fn sample<T, R>(items: Vec<T>, count: usize, rng: &mut R) -> Vec<T>
where
    R: Rng + ?Sized,
{
    let n = items.len();
    let k = count.min(n);
    if k == 0 {
        return Vec::new();
    }

    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    index::sample(rng, n, k)
        .into_iter()
        .map(|i| slots[i].take().expect("sampled indices are distinct"))
        .collect()
}
