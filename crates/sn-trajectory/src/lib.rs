//! `sn-trajectory` — MFQ symptom trajectories for one individual.
//!
//! Each individual gets one initial score and two counterfactual series over
//! `num_episodes` steps:
//!
//! ```text
//! without network:  s[t] = round(s0 + 0.32·s[t-1] + ε)
//! with network:     s[t] = round(s0 + 0.32·s[t-1]
//!                            − (0.20 + isl)·family − (0.34 + isl)·friend + ε)   if s[t-1] ≥ 28
//!                   s[t] = round(s0 + 0.32·s[t-1] + ε)                          otherwise
//! ```
//!
//! with `ε ~ N(0, 1)` drawn fresh per step and every value clamped to
//! `[0, 66]`.  Rounding is half-to-even in both series.
//!
//! The stream is seeded from the individual's id, independently of the
//! network stage.  Draw order: initial score, then every without-network
//! step, then every with-network step.

pub mod params;
pub mod score;
pub mod step;


pub use params::MfqParams;
pub use score::{MfqScore, generate_trajectories};
pub use step::{
    CARRYOVER, ELEVATED_THRESHOLD, FAMILY_EFFECT, FRIEND_EFFECT, MFQ_CEILING, MFQ_FLOOR,
    step_with_network, step_without_network,
};
