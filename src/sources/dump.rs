//! Dump part readers.
use std::io::BufRead;
use std::path::Path;

use crate::error::Error;
use crate::io::reader::{self, KvReader};

/// Separator between identifier and markup in dump part files.
pub const RECORD_SEPARATOR: &str = "\t";

/// One dump record: a document identifier and its raw markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpRecord {
    id: String,
    raw: String,
}

impl DumpRecord {
    pub fn new(id: &str, raw: &str) -> Self {
        Self {
            id: id.to_string(),
            raw: raw.to_string(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn into_parts(self) -> (String, String) {
        (self.id, self.raw)
    }
}

/// Record stream over one dump part file.
///
/// Thin layer over [KvReader] fixing the separator to a tab, so the
/// compression handling (gzip by `.gz` extension) lives in one place.
pub struct Dump {
    records: Box<dyn Iterator<Item = Result<(String, String), Error>> + Send>,
}

impl Dump {
    /// Opens a part file, gzipped or plain depending on its extension.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Ok(Self {
            records: reader::open(path, RECORD_SEPARATOR)?,
        })
    }

    pub fn new<T: BufRead + Send + 'static>(reader: T) -> Self {
        Self {
            records: Box::new(KvReader::new(reader, RECORD_SEPARATOR)),
        }
    }
}

impl Iterator for Dump {
    type Item = Result<DumpRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records
            .next()
            .map(|r| r.map(|(id, raw)| DumpRecord { id, raw }))
    }
}
