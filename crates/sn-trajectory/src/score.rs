//! `MfqScore` and the per-individual entry point.

use serde::{Deserialize, Serialize};
use sn_core::{IndividualRng, NetworkId, SnResult};

use crate::{MfqParams, step_with_network, step_without_network};

/// Initial score plus both counterfactual series for one individual.
///
/// Index 0 of each series is `initial_mfq`; every entry lies in `[0, 66]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MfqScore {
    pub initial_mfq:         i32,
    pub mfq_without_network: Vec<i32>,
    pub mfq_with_network:    Vec<i32>,
}

impl MfqScore {
    /// Score after the last episode, without network support.
    pub fn final_without_network(&self) -> i32 {
        *self.mfq_without_network.last().unwrap_or(&self.initial_mfq)
    }

    /// Score after the last episode, with network support.
    pub fn final_with_network(&self) -> i32 {
        *self.mfq_with_network.last().unwrap_or(&self.initial_mfq)
    }
}

/// Simulate one individual's trajectories.
///
/// Seeds its own stream from `id`; never shares a stream with the network
/// stage.
pub fn generate_trajectories(
    id:             NetworkId,
    params:         &MfqParams,
    family_support: u32,
    friend_support: u32,
) -> SnResult<MfqScore> {
    params.validate()?;

    let mut rng = IndividualRng::new(id);
    let initial_mfq = rng.uniform_inclusive("mfq_min/mfq_max", params.mfq_min, params.mfq_max)?;

    let mfq_without_network = series(&mut rng, initial_mfq, params.series_len(), |prev, noise| {
        step_without_network(initial_mfq, prev, noise)
    });
    let mfq_with_network = series(&mut rng, initial_mfq, params.series_len(), |prev, noise| {
        step_with_network(
            initial_mfq,
            prev,
            family_support,
            friend_support,
            params.increase_support_level,
            noise,
        )
    });

    Ok(MfqScore {
        initial_mfq,
        mfq_without_network,
        mfq_with_network,
    })
}

/// Run a recurrence for `len - 1` steps, one normal draw per step.
fn series(
    rng:     &mut IndividualRng,
    initial: i32,
    len:     usize,
    step:    impl Fn(i32, f64) -> i32,
) -> Vec<i32> {
    let mut out = Vec::with_capacity(len);
    out.push(initial);
    for t in 1..len {
        let noise = rng.standard_normal();
        out.push(step(out[t - 1], noise));
    }
    out
}
