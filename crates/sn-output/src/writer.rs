//! The `OutputWriter` trait implemented by all backend writers.

use crate::{EpisodeRow, OutputResult};

/// Trait implemented by table writers.
///
/// Errors are stored by [`TableObserver`][crate::TableObserver] and retrieved
/// with [`take_error`][crate::TableObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of episode rows.
    fn write_rows(&mut self, rows: &[EpisodeRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
