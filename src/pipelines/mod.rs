//! Pipelines.
//!
//! One pipeline per job, and the module provides a light
//! [pipeline::Pipeline] trait that enables easy and flexible pipeline
//! creation.
pub mod filter;
pub mod index;
pub mod invert;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use filter::ArticleFilter;
pub use index::LemmaIndex;
pub use invert::GroupInvert;
pub use pipeline::Pipeline;
