//! CSV output backend.
//!
//! One file per run (or per sweep).  Header: [`EPISODE_COLUMNS`], plus the
//! sweep column name when the writer is built for a sweep.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EPISODE_COLUMNS, EpisodeRow, OutputResult};

/// Writes episode rows to a single CSV file.
pub struct CsvWriter {
    rows:       Writer<File>,
    with_sweep: bool,
    finished:   bool,
}

impl CsvWriter {
    /// Create (or truncate) the file at `path` and write the header row.
    ///
    /// `sweep_column` names the extra trailing column; rows written later
    /// must carry a `sweep_value` exactly when it is `Some`.
    pub fn new(path: &Path, sweep_column: Option<&str>) -> OutputResult<Self> {
        let mut rows = Writer::from_writer(File::create(path)?);
        let mut header: Vec<&str> = EPISODE_COLUMNS.to_vec();
        header.extend(sweep_column);
        rows.write_record(&header)?;

        Ok(Self {
            rows,
            with_sweep: sweep_column.is_some(),
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_rows(&mut self, rows: &[EpisodeRow]) -> OutputResult<()> {
        for row in rows {
            let mut record = vec![
                row.network_id.to_string(),
                row.family_nodes.to_string(),
                row.friend_nodes.to_string(),
                row.family_active_nodes.to_string(),
                row.friend_active_nodes.to_string(),
                row.family_support.to_string(),
                row.friend_support.to_string(),
                row.initial_mfq.to_string(),
                row.mfq_with_network.to_string(),
                row.mfq_without_network.to_string(),
                row.episode_number.to_string(),
            ];
            if self.with_sweep {
                record.push(row.sweep_value.map(|v| v.to_string()).unwrap_or_default());
            }
            self.rows.write_record(&record)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
