//! Job file parsing module.

mod job;

pub use job::{parse_job_file, parse_job_str, CutRequest, Job, SheetRequest};
