//! Validation module for jobs and computed layouts.

mod validate;

pub use validate::{find_overlaps, validate_job, validate_layout, ValidationResult};
