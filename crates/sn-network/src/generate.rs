//! Stage A, Stage B and the per-individual entry point.

use sn_core::{IndividualRng, NetworkId, SnResult, draw_two_label};
use tracing::trace;

use crate::{NetworkParams, NetworkStructure, SocialNetwork, SupportCounts};

/// Generate the complete network record for one individual.
///
/// Pure function of `id` and `params`: the stream is seeded from `id` inside
/// the call and dropped on return.
pub fn generate_network(id: NetworkId, params: &NetworkParams) -> SnResult<NetworkStructure> {
    params.validate()?;

    let mut rng = IndividualRng::new(id);
    let social = gen_social_network(&mut rng, params)?;
    let support = gen_support_network(
        &mut rng,
        params.max_nodes,
        social.family_active_nodes,
        social.friend_active_nodes,
    )?;

    Ok(NetworkStructure::assemble(id, social, support))
}

/// Stage A: sample contact counts and classify active contacts.
///
/// Draw order:
/// 1. `family_nodes`, then `friend_nodes` (inclusive uniform).
/// 2. If everyone fits in the inner circle: `Bin(family_nodes, p1)`, then
///    `Bin(friend_nodes, p1)`.
/// 3. Otherwise: the inner-circle split (two-label draw), then
///    `Bin(family_closest, p1)`, `Bin(family_outer, p2)`,
///    `Bin(friend_closest, p1)`, `Bin(friend_outer, p2)`.
pub fn gen_social_network(
    rng:    &mut IndividualRng,
    params: &NetworkParams,
) -> SnResult<SocialNetwork> {
    let family_nodes = rng.uniform_inclusive("family_min/family_max", params.family_min, params.family_max)?;
    let friend_nodes = rng.uniform_inclusive("friend_min/friend_max", params.friend_min, params.friend_max)?;

    let p1 = params.p_connection_1;
    let p2 = params.p_connection_2;
    let closest = params.closest_layer_nodes;

    let total_nodes = u64::from(family_nodes) + u64::from(friend_nodes);
    let (family_active_nodes, friend_active_nodes) = if total_nodes <= u64::from(closest) {
        let family = rng.binomial(family_nodes, p1)?;
        let friend = rng.binomial(friend_nodes, p1)?;
        (family, friend)
    } else {
        let family_closest = draw_two_label(rng, family_nodes, friend_nodes, closest)?;
        let friend_closest = closest - family_closest;

        let family = rng.binomial(family_closest, p1)?
            + rng.binomial(family_nodes - family_closest, p2)?;
        let friend = rng.binomial(friend_closest, p1)?
            + rng.binomial(friend_nodes - friend_closest, p2)?;
        (family, friend)
    };

    Ok(SocialNetwork {
        family_nodes,
        friend_nodes,
        family_active_nodes,
        friend_active_nodes,
    })
}

/// Stage B: cap the active contacts to `max_nodes` supporters.
///
/// Under the cap this is a no-op and consumes no randomness.  Over the cap,
/// exactly `max_nodes` supporters are drawn without replacement from the
/// active family and friend contacts.
pub fn gen_support_network(
    rng:                 &mut IndividualRng,
    max_nodes:           u32,
    family_active_nodes: u32,
    friend_active_nodes: u32,
) -> SnResult<SupportCounts> {
    if u64::from(family_active_nodes) + u64::from(friend_active_nodes) <= u64::from(max_nodes) {
        return Ok(SupportCounts {
            family: family_active_nodes,
            friend: friend_active_nodes,
        });
    }

    let family = draw_two_label(rng, family_active_nodes, friend_active_nodes, max_nodes)?;
    trace!(
        family_active_nodes,
        friend_active_nodes,
        max_nodes,
        family_support = family,
        "support capped"
    );
    Ok(SupportCounts { family, friend: max_nodes - family })
}
