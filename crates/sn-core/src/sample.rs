//! Sampling without replacement from a two-label multiset.
//!
//! Both network stages need the same operation: "from `a` items labelled A
//! and `b` items labelled B, draw `k` without replacement; how many A's came
//! out?"  The multiset is laid out A-first (`0..a` are A, `a..a+b` are B) and
//! a uniform `k`-subset of indices is drawn, so the count follows the
//! hypergeometric distribution.

use rand::seq::index::sample as choose_indices;

use crate::{IndividualRng, SnError, SnResult};

/// Draw `k` items without replacement from `count_a` A-labels and `count_b`
/// B-labels and return the number of A-labels drawn.
///
/// The B count is `k - returned`.  Requesting more items than the multiset
/// holds is an error, never a truncated sample.
pub fn draw_two_label(
    rng:     &mut IndividualRng,
    count_a: u32,
    count_b: u32,
    k:       u32,
) -> SnResult<u32> {
    let available = u64::from(count_a) + u64::from(count_b);
    if u64::from(k) > available {
        return Err(SnError::SampleTooLarge {
            requested: u64::from(k),
            available,
        });
    }
    if k == 0 {
        return Ok(0);
    }

    let drawn = choose_indices(rng.inner(), available as usize, k as usize);
    let from_a = drawn.iter().filter(|&i| i < count_a as usize).count();
    Ok(from_a as u32)
}
