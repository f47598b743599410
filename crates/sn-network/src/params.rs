//! Population-level network parameters.

use serde::{Deserialize, Serialize};
use sn_core::SnResult;
use sn_core::error::{check_probability, check_range};

/// Read-only parameters shared by every individual in a run.
///
/// Ranges are inclusive.  Counts are unsigned, so "negative `max_nodes`" is
/// unrepresentable; a negative value in a configuration file fails at
/// deserialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkParams {
    pub family_min: u32,
    pub family_max: u32,
    pub friend_min: u32,
    pub friend_max: u32,

    /// Size of the inner circle whose members activate with `p_connection_1`.
    pub closest_layer_nodes: u32,

    /// Cap on `family_support + friend_support`.
    pub max_nodes: u32,

    /// Activation probability for inner-circle contacts.
    pub p_connection_1: f64,

    /// Activation probability for every other contact.
    pub p_connection_2: f64,
}

impl Default for NetworkParams {
    /// The baseline population.
    fn default() -> Self {
        Self {
            family_min:          2,
            family_max:          10,
            friend_min:          1,
            friend_max:          13,
            closest_layer_nodes: 5,
            max_nodes:           15,
            p_connection_1:      0.36,
            p_connection_2:      0.15,
        }
    }
}

impl NetworkParams {
    /// Check every parameter; the first violation is returned.
    pub fn validate(&self) -> SnResult<()> {
        check_range("family_min/family_max", self.family_min, self.family_max)?;
        check_range("friend_min/friend_max", self.friend_min, self.friend_max)?;
        check_probability("p_connection_1", self.p_connection_1)?;
        check_probability("p_connection_2", self.p_connection_2)?;
        Ok(())
    }

    /// Same parameters with a different inner-circle activation probability.
    pub fn with_p_connection_1(&self, p: f64) -> Self {
        Self { p_connection_1: p, ..self.clone() }
    }
}
