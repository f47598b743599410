//! Run configuration.

use serde::{Deserialize, Serialize};
use sn_network::NetworkParams;
use sn_trajectory::MfqParams;

use crate::{SimError, SimResult};

/// Top-level configuration for one population run.
///
/// Typically loaded from a JSON file by the application crate; every field
/// falls back to the baseline value when omitted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    /// Individuals per run.  Ids are `0..num_networks`.
    pub num_networks: u64,

    pub network: NetworkParams,

    pub mfq: MfqParams,

    /// Worker thread count for the `parallel` feature.  `None` uses Rayon's
    /// global pool.  Ignored in sequential builds.
    pub num_threads: Option<usize>,
}

impl Default for PopulationConfig {
    /// The baseline population: 1000 individuals, 10 episodes.
    fn default() -> Self {
        Self {
            num_networks: 1_000,
            network:      NetworkParams::default(),
            mfq:          MfqParams::default(),
            num_threads:  None,
        }
    }
}

impl PopulationConfig {
    /// Validate every parameter up front so a run never stops half-way.
    pub fn validate(&self) -> SimResult<()> {
        self.network.validate()?;
        self.mfq.validate()?;
        if self.num_threads == Some(0) {
            return Err(SimError::Config("num_threads must be at least 1".into()));
        }
        Ok(())
    }

    /// Rows a tabulated run produces: one per individual per series entry.
    pub fn episode_rows(&self) -> u64 {
        self.num_networks * self.mfq.series_len() as u64
    }
}
