/*! Inversion pipeline.

Third job of the chain: decodes per-document vectors, fans each vector
out to the groups its document belongs to and sums counts per group.
Each part yields a partial index; nothing is written until every
partial has been merged, so a group's vector is always the complete
aggregate. Documents outside the group mapping are dropped silently.
!*/
use std::fs;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::{debug, error, info, warn};
use rayon::prelude::*;

use crate::error::Error;
use crate::io;
use crate::io::reader;
use crate::io::writer::PartWriter;
use crate::report::RunReport;
use crate::tables::GroupMembership;
use crate::vectors::{GroupIndex, LemmaCounts, LemmaWeights};

use super::pipeline::Pipeline;

pub struct GroupInvert {
    src: PathBuf,
    dst: PathBuf,
    groups: PathBuf,
    separator: String,
    probabilities: bool,
}

impl GroupInvert {
    pub fn new(
        src: PathBuf,
        dst: PathBuf,
        groups: PathBuf,
        separator: String,
        probabilities: bool,
    ) -> Self {
        Self {
            src,
            dst,
            groups,
            separator,
            probabilities,
        }
    }

    /// Partial index over one part.
    fn process_part(
        path: &Path,
        membership: &GroupMembership,
        separator: &str,
    ) -> Result<(GroupIndex, RunReport), Error> {
        info!("working on part: {:?}", path);

        let mut partial = GroupIndex::new();
        let mut report = RunReport {
            parts: 1,
            ..Default::default()
        };

        for record in reader::open(path, separator)? {
            report.records_read += 1;
            let (id, encoded) = match record {
                Ok(kv) => kv,
                Err(e) => {
                    warn!("{:?}", e);
                    report.records_dropped += 1;
                    continue;
                }
            };

            match membership.groups(&id) {
                Some(groups) => {
                    let counts = LemmaCounts::decode(&encoded);
                    for group in groups {
                        partial.add_vector(group, &counts);
                    }
                    report.records_kept += 1;
                }
                None => {
                    debug!("{} belongs to no group", id);
                    report.records_dropped += 1;
                }
            }
        }

        Ok((partial, report))
    }

    /// Writes the merged index, one group per line, ordered by group key.
    fn write_index(&self, index: GroupIndex) -> Result<(), Error> {
        let mut writer = PartWriter::new(&self.dst, 0, &self.separator)?;
        for (group, counts) in index.into_iter().sorted_by(|a, b| a.0.cmp(&b.0)) {
            if self.probabilities {
                writer.write_record(&group, LemmaWeights::from(&counts))?;
            } else {
                writer.write_record(&group, &counts)?;
            }
        }
        writer.flush()
    }
}

impl Pipeline<()> for GroupInvert {
    fn run(&self) -> Result<(), Error> {
        let membership = GroupMembership::from_path(&self.groups)?;
        info!("group mapping: {} documents", membership.len());

        if !self.dst.exists() {
            warn!("Destination directory does not exist. Creating it.");
            fs::create_dir_all(&self.dst)?;
        }

        let parts = io::parts(&self.src)?;
        if parts.is_empty() {
            warn!("no parts in {:?}. Exiting.", self.src);
            return Ok(());
        }

        let partials: Vec<(GroupIndex, RunReport)> = parts
            .par_iter()
            .map(|path| Self::process_part(path, &membership, &self.separator))
            .filter_map(|result| match result {
                Ok(partial) => Some(partial),
                Err(e) => {
                    error!("{:?}", e);
                    None
                }
            })
            .collect();

        // all partials land before anything is written
        let mut index = GroupIndex::new();
        let mut total = RunReport::default();
        for (partial, report) in partials {
            index.absorb(partial);
            total.merge(&report);
        }

        info!(
            "invert done: {} groups from {} vectors",
            index.len(),
            total.records_kept
        );
        self.write_index(index)?;
        total.write_json(&self.dst)?;

        Ok(())
    }
}
