//! Random choice over candidates.

use rand::seq::SliceRandom;
use rand::Rng;

use super::candidates::Candidate;

/// Pick one candidate uniformly at random.
///
/// Returns `None` only for an empty slice. The same `rng` state always
/// yields the same pick, so a seeded generator makes this deterministic.
pub fn choose_candidate<'a, R>(candidates: &'a [Candidate], rng: &mut R) -> Option<&'a Candidate>
where
    R: Rng + ?Sized,
{
    candidates.choose(rng)
}
