/*! Per-document indexing pipeline.

Second job of the chain: extracts each record's article body, runs it
through the tokenizer and writes one `id<sep>vector` line per document.
A record whose markup cannot be parsed, or holds no body, is skipped
and counted; an unreadable stop-word file aborts the run before any
part is opened.
!*/
use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use rayon::prelude::*;

use crate::error::Error;
use crate::io;
use crate::io::writer::PartWriter;
use crate::lemma::Tokenizer;
use crate::report::RunReport;
use crate::sources::{article, Dump};
use crate::vectors::LemmaCounts;

use super::pipeline::Pipeline;

pub struct LemmaIndex {
    src: PathBuf,
    dst: PathBuf,
    stopwords: PathBuf,
    separator: String,
}

impl LemmaIndex {
    pub fn new(src: PathBuf, dst: PathBuf, stopwords: PathBuf, separator: String) -> Self {
        Self {
            src,
            dst,
            stopwords,
            separator,
        }
    }

    /// Frequency vector of one record's body.
    fn index_record(tokenizer: &Tokenizer, raw: &str) -> Result<LemmaCounts, Error> {
        let body = article::extract_body(raw)?;
        Ok(LemmaCounts::from_lemmas(tokenizer.lemmas(&body)))
    }

    fn process_part(
        part_id: usize,
        path: &Path,
        tokenizer: &Tokenizer,
        dst: &Path,
        separator: &str,
    ) -> Result<RunReport, Error> {
        info!("working on part: {:?}", path);

        let records = Dump::open(path)?;
        let mut writer = PartWriter::new(dst, part_id, separator)?;
        let mut report = RunReport {
            parts: 1,
            ..Default::default()
        };

        for record in records {
            report.records_read += 1;
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    error!("{:?}", e);
                    report.records_dropped += 1;
                    continue;
                }
            };

            match Self::index_record(tokenizer, record.raw()) {
                Ok(counts) => {
                    writer.write_record(record.id(), &counts)?;
                    report.records_kept += 1;
                }
                Err(e) => {
                    error!("could not index {}: {:?}", record.id(), e);
                    report.records_dropped += 1;
                }
            }
        }

        writer.flush()?;
        Ok(report)
    }
}

impl Pipeline<()> for LemmaIndex {
    fn run(&self) -> Result<(), Error> {
        let tokenizer = Tokenizer::from_stopwords_file(&self.stopwords)?;
        info!("stop words: {} entries", tokenizer.stop_words().len());

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
            .map(|(part_id, path)| {
                Self::process_part(part_id, path, &tokenizer, &self.dst, &self.separator)
            })
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
            "index done: {} records indexed, {} skipped",
            total.records_kept, total.records_dropped
        );
        total.write_json(&self.dst)?;

        Ok(())
    }
}
