/*! Allow-list filter pipeline.

First job of the chain: reads dump part files and keeps only the records
whose identifier is on the allow-list. Records pass through unchanged,
so the output parts are themselves a valid dump for the indexing job.
!*/
use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use rayon::prelude::*;

use crate::error::Error;
use crate::filtering::Filter;
use crate::io;
use crate::io::writer::PartWriter;
use crate::report::RunReport;
use crate::sources::{Dump, RECORD_SEPARATOR};
use crate::tables::AllowList;

use super::pipeline::Pipeline;

pub struct ArticleFilter {
    src: PathBuf,
    dst: PathBuf,
    allowlist: PathBuf,
}

impl ArticleFilter {
    pub fn new(src: PathBuf, dst: PathBuf, allowlist: PathBuf) -> Self {
        Self {
            src,
            dst,
            allowlist,
        }
    }

    /// Streams one part, writing kept records under the same part number.
    fn process_part(
        part_id: usize,
        path: &Path,
        allowlist: &AllowList,
        dst: &Path,
    ) -> Result<RunReport, Error> {
        info!("working on part: {:?}", path);

        let records = Dump::open(path)?;
        let mut writer = PartWriter::new(dst, part_id, RECORD_SEPARATOR)?;
        let mut report = RunReport {
            parts: 1,
            ..Default::default()
        };

        for record in records {
            report.records_read += 1;
            match record {
                Ok(record) => {
                    if allowlist.detect(&record) {
                        writer.write_record(record.id(), record.raw())?;
                        report.records_kept += 1;
                    } else {
                        report.records_dropped += 1;
                    }
                }
                Err(e) => {
                    error!("{:?}", e);
                    report.records_dropped += 1;
                }
            }
        }

        writer.flush()?;
        Ok(report)
    }
}

impl Pipeline<()> for ArticleFilter {
    fn run(&self) -> Result<(), Error> {
        let allowlist = AllowList::from_path(&self.allowlist)?;
        info!("allow-list: {} identifiers", allowlist.len());

        if !self.dst.exists() {
            warn!("Destination directory does not exist. Creating it.");
            fs::create_dir_all(&self.dst)?;
        }

        let parts = io::parts(&self.src)?;
        if parts.is_empty() {
            warn!("no parts in {:?}. Exiting.", self.src);
            return Ok(());
        }

        let reports: Vec<RunReport> = parts
            .iter()
            .enumerate()
            .par_bridge()
            .map(|(part_id, path)| Self::process_part(part_id, path, &allowlist, &self.dst))
            .filter_map(|result| match result {
                Ok(report) => Some(report),
                Err(e) => {
                    error!("{:?}", e);
                    None
                }
            })
            .collect();

        let total: RunReport = reports.into_iter().sum();
        info!(
            "filter done: {}/{} records kept",
            total.records_kept, total.records_read
        );
        total.write_json(&self.dst)?;

        Ok(())
    }
}
