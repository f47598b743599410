//! Deterministic per-individual RNG streams.
//!
//! # Determinism strategy
//!
//! Every stream that concerns one individual is seeded with that individual's
//! id and nothing else:
//!
//!   seed = network_id
//!
//! The network stage and the trajectory stage each construct their *own*
//! `IndividualRng` from the same seed at the start of the call.  This means:
//!
//! - No process-wide random state is read or mutated, so individuals can be
//!   simulated on any thread, in any order.
//! - Regenerating a network or a trajectory only needs the id and the
//!   parameters; no other individual's draws can shift it.
//! - The two stages never share a stream, so adding a draw to one stage does
//!   not perturb the other.
//!
//! Callers are responsible for the draw *order* inside a stage; it is part of
//! the reproducibility contract.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Binomial, StandardNormal};

use crate::{NetworkId, SnError, SnResult};

/// Deterministic RNG stream owned by one stage of one individual.
///
/// Construct one per call and drop it at the end.  Not `Clone`: a stream
/// is never forked.
pub struct IndividualRng(SmallRng);

impl IndividualRng {
    /// Seed a fresh stream from the individual's id.
    pub fn new(id: NetworkId) -> Self {
        IndividualRng(SmallRng::seed_from_u64(id.seed()))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Uniform integer in the inclusive range `[low, high]`.
    ///
    /// Returns [`SnError::InvertedRange`] if `low > high`.
    pub fn uniform_inclusive<T>(&mut self, param: &'static str, low: T, high: T) -> SnResult<T>
    where
        T: rand::distributions::uniform::SampleUniform + PartialOrd + Copy + Into<i64>,
    {
        if low > high {
            return Err(SnError::InvertedRange {
                param,
                min: low.into(),
                max: high.into(),
            });
        }
        Ok(self.0.gen_range(low..=high))
    }

    /// Number of successes in `trials` Bernoulli(`p`) trials.
    pub fn binomial(&mut self, trials: u32, p: f64) -> SnResult<u32> {
        let dist = Binomial::new(u64::from(trials), p)
            .map_err(|_| SnError::Probability { param: "binomial p", value: p })?;
        // The sample is bounded by `trials`, which is a `u32`.
        Ok(self.0.sample(dist) as u32)
    }

    /// One draw from Normal(0, 1).
    #[inline]
    pub fn standard_normal(&mut self) -> f64 {
        self.0.sample(StandardNormal)
    }
}
