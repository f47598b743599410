//! Single-step recurrences.
//!
//! The noise term is a parameter so a step can be evaluated with a fixed
//! draw; the series generator feeds it `N(0, 1)` samples.

/// Lowest possible MFQ score.
pub const MFQ_FLOOR: i32 = 0;

/// Highest possible MFQ score.
pub const MFQ_CEILING: i32 = 66;

/// Previous scores at or above this use the support-adjusted formula.
pub const ELEVATED_THRESHOLD: i32 = 28;

/// Weight of the previous score.
pub const CARRYOVER: f64 = 0.32;

/// Base suppression per family supporter in the elevated regime.
pub const FAMILY_EFFECT: f64 = 0.2;

/// Base suppression per friend supporter in the elevated regime.
pub const FRIEND_EFFECT: f64 = 0.34;

#[inline]
fn round_score(raw: f64) -> i64 {
    raw.round_ties_even() as i64
}

#[inline]
fn baseline_raw(initial: i32, prev: i32, noise: f64) -> f64 {
    f64::from(initial) + CARRYOVER * f64::from(prev) + noise
}

/// One step of the without-network series.
pub fn step_without_network(initial: i32, prev: i32, noise: f64) -> i32 {
    let mut score = round_score(baseline_raw(initial, prev, noise));
    if score >= i64::from(MFQ_CEILING) {
        score = i64::from(MFQ_CEILING);
    }
    if score < i64::from(MFQ_FLOOR) {
        score = i64::from(MFQ_FLOOR);
    }
    score as i32
}

/// One step of the with-network series.
///
/// Below [`ELEVATED_THRESHOLD`] this is the without-network step.
pub fn step_with_network(
    initial:                i32,
    prev:                   i32,
    family_support:         u32,
    friend_support:         u32,
    increase_support_level: f64,
    noise:                  f64,
) -> i32 {
    let raw = if prev >= ELEVATED_THRESHOLD {
        f64::from(initial) + CARRYOVER * f64::from(prev)
            - (FAMILY_EFFECT + increase_support_level) * f64::from(family_support)
            - (FRIEND_EFFECT + increase_support_level) * f64::from(friend_support)
            + noise
    } else {
        baseline_raw(initial, prev, noise)
    };

    let mut score = round_score(raw);
    // Upper clamp is strict here, `>=` in the without-network step; the two
    // agree on every integer.
    if score > i64::from(MFQ_CEILING) {
        score = i64::from(MFQ_CEILING);
    }
    if score < i64::from(MFQ_FLOOR) {
        score = i64::from(MFQ_FLOOR);
    }
    score as i32
}
