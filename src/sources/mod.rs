/*! Dump input.

Part files of a pre-split dump, one `id<TAB>markup` record per line,
plain or gzipped, and the body extraction that turns a record's raw
markup into indexable text.
!*/
pub mod article;
mod dump;

pub use dump::{Dump, DumpRecord, RECORD_SEPARATOR};
