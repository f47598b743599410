//! Population observer trait for progress reporting and data collection.

use crate::{IndividualRecord, PopulationConfig, RunSummary};

/// Callbacks invoked by [`Population::run`][crate::Population::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  `on_individual` is called in ascending id
/// order even when the individuals were simulated in parallel.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { every: u64 }
///
/// impl PopulationObserver for ProgressPrinter {
///     fn on_individual(&mut self, record: &IndividualRecord) {
///         if record.network.network_id.0 % self.every == 0 {
///             println!("{}: final {}", record.network.network_id, record.mfq.final_with_network());
///         }
///     }
/// }
/// ```
pub trait PopulationObserver {
    /// Called once before any individual is simulated.
    fn on_run_start(&mut self, _config: &PopulationConfig) {}

    /// Called once per individual, in id order.
    fn on_individual(&mut self, _record: &IndividualRecord) {}

    /// Called once after every individual has been reported.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`PopulationObserver`] that does nothing.
pub struct NoopObserver;

impl PopulationObserver for NoopObserver {}
