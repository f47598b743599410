//! The `Population` runner.

use serde::Serialize;
use sn_core::NetworkId;
use sn_network::{NetworkStructure, generate_network};
use sn_trajectory::{MfqScore, generate_trajectories};
use tracing::{debug, info};

use crate::{PopulationConfig, PopulationObserver, SimResult};

// ── Records ───────────────────────────────────────────────────────────────────

/// Everything simulated for one individual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndividualRecord {
    pub network: NetworkStructure,
    pub mfq:     MfqScore,
}

/// Population-level means over one run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RunSummary {
    pub individuals:                u64,
    pub mean_initial_mfq:           f64,
    pub mean_final_with_network:    f64,
    pub mean_final_without_network: f64,
    pub mean_family_support:        f64,
    pub mean_friend_support:        f64,
}

impl RunSummary {
    /// Summarise `records`.  An empty slice gives all-zero means.
    pub fn from_records(records: &[IndividualRecord]) -> Self {
        if records.is_empty() {
            return Self::default();
        }
        Self {
            individuals:                records.len() as u64,
            mean_initial_mfq:           mean_of(records, |r| f64::from(r.mfq.initial_mfq)),
            mean_final_with_network:    mean_of(records, |r| f64::from(r.mfq.final_with_network())),
            mean_final_without_network: mean_of(records, |r| f64::from(r.mfq.final_without_network())),
            mean_family_support:        mean_of(records, |r| f64::from(r.network.family_support)),
            mean_friend_support:        mean_of(records, |r| f64::from(r.network.friend_support)),
        }
    }
}

fn mean_of(records: &[IndividualRecord], f: impl Fn(&IndividualRecord) -> f64) -> f64 {
    records.iter().map(f).sum::<f64>() / records.len() as f64
}

// ── Per-individual pipeline ───────────────────────────────────────────────────

/// Network stage then trajectory stage for one individual.
///
/// Each stage seeds its own stream from `id`; nothing else is shared.
pub fn simulate_individual(id: NetworkId, config: &PopulationConfig) -> SimResult<IndividualRecord> {
    let network = generate_network(id, &config.network)?;
    let mfq = generate_trajectories(id, &config.mfq, network.family_support, network.friend_support)?;
    debug!(
        id = id.0,
        family_support = network.family_support,
        friend_support = network.friend_support,
        initial_mfq = mfq.initial_mfq,
        "individual simulated"
    );
    Ok(IndividualRecord { network, mfq })
}

// ── Population ────────────────────────────────────────────────────────────────

/// A validated population run.
///
/// Create with [`Population::new`], which rejects bad parameters before any
/// individual is simulated.
pub struct Population {
    config: PopulationConfig,
}

impl Population {
    pub fn new(config: PopulationConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PopulationConfig {
        &self.config
    }

    /// Simulate every individual and return their records in id order.
    ///
    /// Observer hooks run on the calling thread after the (possibly
    /// parallel) simulation phase.
    pub fn run<O: PopulationObserver>(&self, observer: &mut O) -> SimResult<Vec<IndividualRecord>> {
        info!(
            individuals = self.config.num_networks,
            episodes = self.config.mfq.num_episodes,
            p_connection_1 = self.config.network.p_connection_1,
            increase_support_level = self.config.mfq.increase_support_level,
            "population run started"
        );
        observer.on_run_start(&self.config);

        let records = self.simulate_all()?;

        for record in &records {
            observer.on_individual(record);
        }
        let summary = RunSummary::from_records(&records);
        observer.on_run_end(&summary);

        info!(
            individuals = summary.individuals,
            mean_final_with_network = summary.mean_final_with_network,
            mean_final_without_network = summary.mean_final_without_network,
            "population run finished"
        );
        Ok(records)
    }

    #[cfg(not(feature = "parallel"))]
    fn simulate_all(&self) -> SimResult<Vec<IndividualRecord>> {
        (0..self.config.num_networks)
            .map(|i| simulate_individual(NetworkId(i), &self.config))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn simulate_all(&self) -> SimResult<Vec<IndividualRecord>> {
        use rayon::prelude::*;

        use crate::SimError;

        let config = &self.config;
        // Indexed parallel iterator: `collect` keeps ascending id order.
        let work = || {
            (0..config.num_networks as usize)
                .into_par_iter()
                .map(|i| simulate_individual(NetworkId(i as u64), config))
                .collect::<SimResult<Vec<_>>>()
        };

        match config.num_threads {
            None => work(),
            Some(n) => rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| SimError::ThreadPool(e.to_string()))?
                .install(work),
        }
    }
}
