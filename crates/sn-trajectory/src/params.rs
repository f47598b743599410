//! Trajectory parameters.

use serde::{Deserialize, Serialize};
use sn_core::SnResult;
use sn_core::error::{check_range, check_within};

use crate::{MFQ_CEILING, MFQ_FLOOR};

/// Read-only trajectory parameters shared by every individual in a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MfqParams {
    /// Inclusive bounds of the initial score draw.  Both must lie in `[0, 66]`.
    pub mfq_min: i32,
    pub mfq_max: i32,

    /// Steps simulated after the initial score; each series has
    /// `num_episodes + 1` entries.
    pub num_episodes: u32,

    /// Extra suppression per supporter in the elevated regime.  Finite, `>= 0`.
    pub increase_support_level: f64,
}

impl Default for MfqParams {
    fn default() -> Self {
        Self {
            mfq_min:                0,
            mfq_max:                66,
            num_episodes:           10,
            increase_support_level: 0.0,
        }
    }
}

impl MfqParams {
    pub fn validate(&self) -> SnResult<()> {
        check_range("mfq_min/mfq_max", self.mfq_min, self.mfq_max)?;
        let (floor, ceiling) = (f64::from(MFQ_FLOOR), f64::from(MFQ_CEILING));
        check_within("mfq_min", f64::from(self.mfq_min), floor, ceiling)?;
        check_within("mfq_max", f64::from(self.mfq_max), floor, ceiling)?;
        check_within("increase_support_level", self.increase_support_level, 0.0, f64::MAX)?;
        Ok(())
    }

    /// Same parameters with a different support level.
    pub fn with_support_level(&self, level: f64) -> Self {
        Self { increase_support_level: level, ..self.clone() }
    }

    /// Length of each generated series.
    #[inline]
    pub fn series_len(&self) -> usize {
        self.num_episodes as usize + 1
    }
}
