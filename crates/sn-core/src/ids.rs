//! Strongly typed identifier for simulated individuals.
//!
//! The inner integer is `pub` so callers can build ranges of ids directly
//! (`(0..n).map(NetworkId)`), but it also doubles as the RNG seed for every
//! stream that belongs to the individual (see [`crate::rng`]).

use std::fmt;

/// Identity of one simulated individual and of their personal network.
///
/// Unique within a run.  Ids are dense: a population of `n` individuals uses
/// `NetworkId(0)..NetworkId(n)`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NetworkId(pub u64);

impl NetworkId {
    /// The seed used for every random stream of this individual.
    #[inline(always)]
    pub fn seed(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NetworkId({})", self.0)
    }
}

impl From<u64> for NetworkId {
    #[inline(always)]
    fn from(n: u64) -> NetworkId {
        NetworkId(n)
    }
}
