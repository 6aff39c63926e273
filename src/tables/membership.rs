//! Document → group mapping.
use std::collections::HashMap;
use std::path::Path;

use log::warn;

use crate::error::Error;

/// Maps a document identifier to the group keys its vector fans out to.
pub struct GroupMembership {
    groups: HashMap<String, Vec<String>>,
}

impl GroupMembership {
    /// Loads `identifier;group1,group2,…` records. The identifier ends at
    /// the first `;`; group names are comma-separated with surrounding
    /// whitespace trimmed. Lines without a `;`, and lines whose group
    /// list is empty, are skipped with a warning.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let mut groups = HashMap::new();
        for line in super::read_lines(path)? {
            match line.split_once(';') {
                Some((id, list)) => {
                    let parsed: Vec<String> = list
                        .split(',')
                        .map(|g| g.trim().to_string())
                        .filter(|g| !g.is_empty())
                        .collect();
                    if parsed.is_empty() {
                        warn!("membership line without groups skipped: {}", line);
                    } else {
                        groups.insert(id.to_string(), parsed);
                    }
                }
                None => warn!("membership line without separator skipped: {}", line),
            }
        }
        Ok(Self { groups })
    }

    pub fn from_entries<I, S, G>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<G>)>,
        S: Into<String>,
        G: Into<String>,
    {
        Self {
            groups: entries
                .into_iter()
                .map(|(id, gs)| (id.into(), gs.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }

    /// Groups of `id`, `None` when the document is not mapped.
    pub fn groups(&self, id: &str) -> Option<&[String]> {
        self.groups.get(id).map(|g| g.as_slice())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
