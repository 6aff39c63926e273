//! Run reports.
use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const REPORT_FILENAME: &str = "run_report.json";

/// Record counters for one job run, written as a JSON sidecar next to
/// the output parts. Per-part reports are built by the workers and
/// summed after the parallel section.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub parts: usize,
    pub records_read: u64,
    pub records_kept: u64,
    pub records_dropped: u64,
}

impl RunReport {
    /// Folds `other` into this report.
    pub fn merge(&mut self, other: &RunReport) {
        self.parts += other.parts;
        self.records_read += other.records_read;
        self.records_kept += other.records_kept;
        self.records_dropped += other.records_dropped;
    }

    /// Writes the report as [REPORT_FILENAME] in `dst`.
    pub fn write_json(&self, dst: &Path) -> Result<(), Error> {
        let file = File::create(dst.join(REPORT_FILENAME))?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Reads a report back from `dir`.
    pub fn from_json(dir: &Path) -> Result<Self, Error> {
        let file = File::open(dir.join(REPORT_FILENAME))?;
        Ok(serde_json::from_reader(file)?)
    }
}

impl std::iter::Sum for RunReport {
    fn sum<I: Iterator<Item = RunReport>>(iter: I) -> Self {
        let mut total = RunReport::default();
        for report in iter {
            total.merge(&report);
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::RunReport;

    #[test]
    fn merge_sums_counters() {
        let mut total = RunReport {
            parts: 1,
            records_read: 10,
            records_kept: 8,
            records_dropped: 2,
        };
        total.merge(&RunReport {
            parts: 2,
            records_read: 5,
            records_kept: 5,
            records_dropped: 0,
        });
        assert_eq!(total.parts, 3);
        assert_eq!(total.records_read, 15);
        assert_eq!(total.records_kept, 13);
        assert_eq!(total.records_dropped, 2);
    }

    #[test]
    fn json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let report = RunReport {
            parts: 2,
            records_read: 7,
            records_kept: 6,
            records_dropped: 1,
        };
        report.write_json(dir.path()).unwrap();
        assert_eq!(RunReport::from_json(dir.path()).unwrap(), report);
    }
}
