/*!
# IO utilities

Part discovery, key/value record reading and part writing shared by the
pipelines. Stages are chained through directories of `part-*` files;
anything else in a directory (run reports) is ignored by discovery.
!*/
pub mod reader;
pub mod writer;

pub use reader::KvReader;
pub use writer::PartWriter;

use std::path::{Path, PathBuf};

use crate::error::Error;

/// Part files under `src`, sorted by name so runs are deterministic.
pub fn parts(src: &Path) -> Result<Vec<PathBuf>, Error> {
    let pattern = format!("{}/part-*", src.to_string_lossy());
    let mut paths = glob::glob(&pattern)?.collect::<Result<Vec<PathBuf>, _>>()?;
    paths.sort();
    Ok(paths)
}
