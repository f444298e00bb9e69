//! Result file parsing and record normalization.
//!
//! This module handles:
//! - Reading `key,value` result files written by the simulator
//! - Coercing raw values into typed experiment records
//! - Defining the consolidated record schema

pub mod normalizer;
pub mod record_file;
pub mod schema;

// Re-export main types
pub use normalizer::{lenient_float, normalize_record};
pub use record_file::{parse_record_file, parse_record_str};
pub use schema::{ExperimentRecord, RawRecord};
