//! The three result tables and how each is produced.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use sn_output::{CsvWriter, TableObserver};
use sn_sim::{Population, PopulationConfig, RunSummary, SweepAxis, run_sweep};

/// One result table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
    /// One run of the base configuration.
    Baseline,
    /// Base configuration swept over inner-circle activation probabilities.
    VaryP1,
    /// Base configuration swept over support levels.
    VarySupport,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Baseline, Scenario::VaryP1, Scenario::VarySupport];

    pub fn file_name(self) -> &'static str {
        match self {
            Scenario::Baseline    => "simulated_data_baseline.csv",
            Scenario::VaryP1      => "network_varying_p1.csv",
            Scenario::VarySupport => "network_varying_increase_support_level.csv",
        }
    }

    /// Sweep axis, or `None` for the single baseline run.
    pub fn axis(self) -> Option<SweepAxis> {
        match self {
            Scenario::Baseline    => None,
            Scenario::VaryP1      => Some(SweepAxis::default_connection_probabilities()),
            Scenario::VarySupport => Some(SweepAxis::default_support_levels()),
        }
    }
}

/// Run `scenario` from `base` and write its table into `out_dir`.
///
/// Returns the path written.
pub fn run_scenario(scenario: Scenario, base: &PopulationConfig, out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(scenario.file_name());
    let axis = scenario.axis();

    let writer = CsvWriter::new(&path, axis.as_ref().map(SweepAxis::column_name))
        .with_context(|| format!("creating {}", path.display()))?;

    let mut obs = match &axis {
        Some(axis) => TableObserver::for_sweep(writer, axis),
        None => TableObserver::new(writer),
    };

    match &axis {
        None => {
            let records = Population::new(base.clone())?.run(&mut obs)?;
            let summary = RunSummary::from_records(&records);
            info!(
                individuals = summary.individuals,
                mean_final_with_network = summary.mean_final_with_network,
                mean_final_without_network = summary.mean_final_without_network,
                "baseline done"
            );
        }
        Some(axis) => {
            for point in run_sweep(base, axis, &mut obs)? {
                let summary = RunSummary::from_records(&point.records);
                info!(
                    parameter = axis.column_name(),
                    value = point.value,
                    mean_final_with_network = summary.mean_final_with_network,
                    "sweep point done"
                );
            }
        }
    }

    obs.finish().with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), rows = obs.rows_written(), "table written");
    Ok(path)
}
