//! Discovery of result files and assembly of the record set.

pub mod builder;

pub use builder::{build_dataset, discover_result_files, Dataset, FileFailure};
