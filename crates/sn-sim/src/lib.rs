//! `sn-sim` — population runs and parameter sweeps.
//!
//! # Per-individual pipeline
//!
//! ```text
//! for id in 0..config.num_networks:
//!   ① generate_network(id, network params)       — stream seeded by id
//!   ② generate_trajectories(id, mfq params,
//!                           family_support, friend_support)
//!                                                 — fresh stream seeded by id
//! ```
//!
//! Individuals share nothing but the read-only config, so step ①–② can run
//! in any order on any thread.  Records are always returned, and observers
//! always called, in ascending id order.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Simulates individuals on Rayon's thread pool.          |
//!
//! # Quick-start
//!
//! ```rust
//! use sn_sim::{NoopObserver, Population, PopulationConfig};
//!
//! let config = PopulationConfig { num_networks: 20, ..PopulationConfig::default() };
//! let records = Population::new(config).unwrap().run(&mut NoopObserver).unwrap();
//! assert_eq!(records.len(), 20);
//! ```

pub mod config;
pub mod error;
pub mod observer;
pub mod population;
pub mod sweep;


pub use config::PopulationConfig;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, PopulationObserver};
pub use population::{IndividualRecord, Population, RunSummary, simulate_individual};
pub use sweep::{SweepAxis, SweepPoint, run_sweep};
