//! `TableObserver<W>` — bridges `PopulationObserver` to an `OutputWriter`.

use sn_sim::{IndividualRecord, PopulationConfig, PopulationObserver, SweepAxis};
use tracing::warn;

use crate::row::tabulate;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`PopulationObserver`] that tabulates each individual and writes the
/// rows to any [`OutputWriter`].
///
/// One observer can span several runs (a sweep); the writer is finished only
/// when [`finish`][Self::finish] is called.  Errors from the writer are stored
/// because observer hooks have no return value; check
/// [`take_error`][Self::take_error] after the run.
pub struct TableObserver<W: OutputWriter> {
    writer:      W,
    sweep:       Option<SweepAxis>,
    sweep_value: Option<f64>,
    rows:        u64,
    last_error:  Option<OutputError>,
}

impl<W: OutputWriter> TableObserver<W> {
    /// Observer for plain runs: rows carry no sweep value.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sweep:       None,
            sweep_value: None,
            rows:        0,
            last_error:  None,
        }
    }

    /// Observer for a sweep: every row carries the swept parameter's value
    /// for the run it belongs to.
    pub fn for_sweep(writer: W, axis: &SweepAxis) -> Self {
        Self { sweep: Some(axis.clone()), ..Self::new(writer) }
    }

    /// Rows successfully handed to the writer so far.
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer; call once after the last run.
    pub fn finish(&mut self) -> OutputResult<()> {
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        self.writer.finish()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> PopulationObserver for TableObserver<W> {
    fn on_run_start(&mut self, config: &PopulationConfig) {
        self.sweep_value = self.sweep.as_ref().map(|axis| axis.value_in(config));
    }

    fn on_individual(&mut self, record: &IndividualRecord) {
        if self.last_error.is_some() {
            return;
        }
        let rows = tabulate(record, self.sweep_value);
        let result = self.writer.write_rows(&rows);
        if result.is_ok() {
            self.rows += rows.len() as u64;
        }
        self.store_err(result);
    }
}
