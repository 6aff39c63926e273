//! Stop-word sets.
use std::collections::HashSet;
use std::path::Path;

use crate::error::Error;

/// Loads a newline-delimited stop-word file into a lookup set.
/// Matching against the set is case-sensitive, so the file is expected
/// to hold lower-cased words.
pub fn load(path: &Path) -> Result<HashSet<String>, Error> {
    Ok(super::read_lines(path)?.into_iter().collect())
}
