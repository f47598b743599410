//! `sn-output` — tabulation and CSV output for population runs.
//!
//! A run is tabulated as one [`EpisodeRow`] per individual per series entry
//! (`num_episodes + 1` rows per individual).  Rows are written through any
//! [`OutputWriter`]; [`CsvWriter`] is the provided backend.
//!
//! [`TableObserver`] implements `sn_sim::PopulationObserver`, so rows are
//! streamed out as the runner reports each individual.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sn_output::{CsvWriter, TableObserver};
//!
//! let writer = CsvWriter::new(Path::new("results/simulated_data_baseline.csv"), None)?;
//! let mut obs = TableObserver::new(writer);
//! Population::new(config)?.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TableObserver;
pub use row::{EPISODE_COLUMNS, EpisodeRow, tabulate, tabulate_all};
pub use writer::OutputWriter;
