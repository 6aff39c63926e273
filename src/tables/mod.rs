/*! Side tables.

External lookup files loaded once per run: the document allow-list, the
document → group mapping and the stop-word set. Each is a plain value
built before any record is processed and shared immutably with the
workers. A missing or unreadable table aborts the run; no record output
is produced without its tables.
!*/
mod allowlist;
mod membership;
pub mod stopwords;

pub use allowlist::AllowList;
pub use membership::GroupMembership;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Error;

/// Non-empty lines of a text file, line endings trimmed.
pub(crate) fn read_lines(path: &Path) -> Result<Vec<String>, Error> {
    let file = File::open(path)?;
    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}
