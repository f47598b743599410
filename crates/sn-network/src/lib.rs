//! `sn-network` — stochastic generation of one individual's support network.
//!
//! # Two sampling stages on one stream
//!
//! ```text
//! rng = IndividualRng::new(network_id)
//!   ① Stage A  gen_social_network   — node counts, inner circle, active nodes
//!   ② Stage B  gen_support_network  — cap active nodes to max_nodes
//! ```
//!
//! The draw order inside each stage is fixed; changing it changes every
//! generated network.
//!
//! # Quick-start
//!
//! ```rust
//! use sn_core::NetworkId;
//! use sn_network::{NetworkParams, generate_network};
//!
//! let params = NetworkParams::default();
//! let net = generate_network(NetworkId(0), &params).unwrap();
//! assert!(net.family_support + net.friend_support <= params.max_nodes);
//! ```

pub mod generate;
pub mod params;
pub mod structure;

#[cfg(test)]
mod tests;

pub use generate::{gen_social_network, gen_support_network, generate_network};
pub use params::NetworkParams;
pub use structure::{NetworkStructure, SocialNetwork, SupportCounts};
