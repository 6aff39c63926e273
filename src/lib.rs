pub mod cleaning;
pub mod cli;
pub mod error;
pub mod filtering;
pub mod io;
pub mod lemma;
pub mod pipelines;
pub mod report;
pub mod sources;
pub mod tables;
pub mod vectors;
