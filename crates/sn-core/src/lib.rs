//! `sn-core` — foundational types for the support-network simulator.
//!
//! This crate is a dependency of every other `sn-*` crate.  It has no `sn-*`
//! dependencies and minimal external ones (`rand`, `rand_distr` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NetworkId`                                           |
//! | [`rng`]         | `IndividualRng` (one stream per individual per stage) |
//! | [`sample`]      | Two-label sampling without replacement                |
//! | [`error`]       | `SnError`, `SnResult`, parameter checks               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod rng;
pub mod sample;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SnError, SnResult};
pub use ids::NetworkId;
pub use rng::IndividualRng;
pub use sample::draw_two_label;
