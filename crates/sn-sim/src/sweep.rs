//! One-parameter sweeps over a base configuration.
//!
//! Each sweep value gets a full population run with the same ids, so the
//! individuals are the same people across sweep points and only the swept
//! parameter differs.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{IndividualRecord, Population, PopulationConfig, PopulationObserver, SimResult};

/// Which parameter to vary, and over which values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "parameter", content = "values", rename_all = "snake_case")]
pub enum SweepAxis {
    /// Override `network.p_connection_1`.
    ConnectionProbability(Vec<f64>),
    /// Override `mfq.increase_support_level`.
    SupportLevel(Vec<f64>),
}

impl SweepAxis {
    /// Inner-circle activation probabilities 0.15, 0.25, …, 0.65.
    pub fn default_connection_probabilities() -> Self {
        SweepAxis::ConnectionProbability(vec![0.15, 0.25, 0.35, 0.45, 0.55, 0.65])
    }

    pub fn default_support_levels() -> Self {
        SweepAxis::SupportLevel(vec![0.25, 0.5, 1.0, 3.0, 5.0, 7.0])
    }

    /// Column name the swept value is tabulated under.
    pub fn column_name(&self) -> &'static str {
        match self {
            SweepAxis::ConnectionProbability(_) => "p_connection_1",
            SweepAxis::SupportLevel(_) => "increase_support_level",
        }
    }

    pub fn values(&self) -> &[f64] {
        match self {
            SweepAxis::ConnectionProbability(v) | SweepAxis::SupportLevel(v) => v,
        }
    }

    /// Current value of the swept parameter in `config`.
    pub fn value_in(&self, config: &PopulationConfig) -> f64 {
        match self {
            SweepAxis::ConnectionProbability(_) => config.network.p_connection_1,
            SweepAxis::SupportLevel(_) => config.mfq.increase_support_level,
        }
    }

    /// `base` with the swept parameter set to `value`.
    pub fn apply(&self, base: &PopulationConfig, value: f64) -> PopulationConfig {
        let mut config = base.clone();
        match self {
            SweepAxis::ConnectionProbability(_) => {
                config.network = base.network.with_p_connection_1(value);
            }
            SweepAxis::SupportLevel(_) => {
                config.mfq = base.mfq.with_support_level(value);
            }
        }
        config
    }
}

/// Records of one sweep value.
#[derive(Debug, Clone)]
pub struct SweepPoint {
    pub value:   f64,
    pub records: Vec<IndividualRecord>,
}

/// Run one population per value of `axis`, in order.
///
/// Every derived configuration is validated before the first run starts.
pub fn run_sweep<O: PopulationObserver>(
    base:     &PopulationConfig,
    axis:     &SweepAxis,
    observer: &mut O,
) -> SimResult<Vec<SweepPoint>> {
    let populations = axis
        .values()
        .iter()
        .map(|&value| Population::new(axis.apply(base, value)).map(|p| (value, p)))
        .collect::<SimResult<Vec<_>>>()?;

    let mut points = Vec::with_capacity(populations.len());
    for (value, population) in populations {
        info!(parameter = axis.column_name(), value, "sweep point");
        let records = population.run(observer)?;
        points.push(SweepPoint { value, records });
    }
    Ok(points)
}
