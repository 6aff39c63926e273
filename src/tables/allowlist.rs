//! Document allow-list.
use std::collections::HashSet;
use std::path::Path;

use crate::error::Error;
use crate::filtering::Filter;
use crate::sources::DumpRecord;

/// Identifiers of the documents that survive the filter stage.
/// Membership is an exact string match on the record identifier.
pub struct AllowList {
    ids: HashSet<String>,
}

impl AllowList {
    /// Loads a newline-delimited identifier file.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        Ok(Self {
            ids: super::read_lines(path)?.into_iter().collect(),
        })
    }

    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Filter<&DumpRecord> for AllowList {
    fn detect(&self, record: &DumpRecord) -> bool {
        self.contains(record.id())
    }
}
