//! Key/value record readers.
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::Error;

/// Line-oriented `key<sep>value` reader.
///
/// Generic over the underlying buffered reader so gzipped and plain part
/// files share the decoding logic. Lines split at the first occurrence
/// of the separator; the value keeps any later occurrences. Empty lines
/// are skipped, lines without the separator come out as
/// [Error::MalformedRecord].
pub struct KvReader<T> {
    lines: Lines<T>,
    separator: String,
}

/// Reader using [MultiGzDecoder] over a [File].
impl KvReader<BufReader<MultiGzDecoder<File>>> {
    pub fn from_path_gzip<P: AsRef<Path>>(path: P, separator: &str) -> Result<Self, Error> {
        let gzip_file = File::open(path)?;
        let gzip_stream = MultiGzDecoder::new(gzip_file);
        Ok(Self::new(BufReader::new(gzip_stream), separator))
    }
}

impl KvReader<BufReader<File>> {
    pub fn from_path_plain<P: AsRef<Path>>(path: P, separator: &str) -> Result<Self, Error> {
        Ok(Self::new(BufReader::new(File::open(path)?), separator))
    }
}

impl<T: BufRead> KvReader<T> {
    pub fn new(reader: T, separator: &str) -> Self {
        Self {
            lines: reader.lines(),
            separator: separator.to_string(),
        }
    }
}

/// Opens a part file, picking gzip or plain decoding from the extension.
pub fn open<P: AsRef<Path>>(
    path: P,
    separator: &str,
) -> Result<Box<dyn Iterator<Item = Result<(String, String), Error>> + Send>, Error> {
    let path = path.as_ref();
    if path.extension().map_or(false, |ext| ext == "gz") {
        Ok(Box::new(KvReader::from_path_gzip(path, separator)?))
    } else {
        Ok(Box::new(KvReader::from_path_plain(path, separator)?))
    }
}

impl<T: BufRead> Iterator for KvReader<T> {
    type Item = Result<(String, String), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(Error::Io(e))),
            };
            if line.is_empty() {
                continue;
            }
            return match line.split_once(self.separator.as_str()) {
                Some((key, value)) => Some(Ok((key.to_string(), value.to_string()))),
                None => Some(Err(Error::MalformedRecord(line))),
            };
        }
    }
}
