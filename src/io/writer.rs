//! Part file writers.
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Path of the `n`th output part in `dst`.
pub fn part_path(dst: &Path, n: usize) -> PathBuf {
    dst.join(format!("part-{:05}.txt", n))
}

/// Buffered `key<sep>value` line writer for one output part.
pub struct PartWriter {
    handle: BufWriter<File>,
    separator: String,
}

impl PartWriter {
    /// Creates `part-NNNNN.txt` in `dst`, truncating any leftover file.
    pub fn new(dst: &Path, n: usize, separator: &str) -> Result<Self, Error> {
        let handle = BufWriter::new(File::create(part_path(dst, n))?);
        Ok(Self {
            handle,
            separator: separator.to_string(),
        })
    }

    /// Writes one record line.
    pub fn write_record<V: Display>(&mut self, key: &str, value: V) -> Result<(), Error> {
        writeln!(self.handle, "{}{}{}", key, self.separator, value)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.handle.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_names_are_zero_padded() {
        let path = part_path(Path::new("/out"), 42);
        assert_eq!(path, PathBuf::from("/out/part-00042.txt"));
    }

    #[test]
    fn writes_separator_delimited_lines() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = PartWriter::new(dir.path(), 0, " : ").unwrap();
        writer.write_record("doc", "<cat,1>").unwrap();
        writer.write_record("other", "<sat,2>").unwrap();
        writer.flush().unwrap();

        let written = std::fs::read_to_string(part_path(dir.path(), 0)).unwrap();
        assert_eq!(written, "doc : <cat,1>\nother : <sat,2>\n");
    }
}
