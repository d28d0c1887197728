//! JSON job files: sheet size plus a cut list with possibly blank entries.

use crate::config::{DEFAULT_KERF_MM, DEFAULT_SHEET_HEIGHT_MM, DEFAULT_SHEET_WIDTH_MM};
use crate::error::{LayoutError, Result};
use crate::model::{CutSpec, SheetSize};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Sheet dimensions as entered; either may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetRequest {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// One cut list row as entered; any field may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CutRequest {
    pub length: Option<f64>,
    pub width: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_quantity")]
    pub quantity: Option<u32>,
    pub kerf: Option<f64>,
}

/// Accept whole-number quantities written either as `2` or `2.0`.
fn deserialize_quantity<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f64>::deserialize(deserializer)? {
        None => Ok(None),
        Some(q) if q.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&q) => Ok(Some(q as u32)),
        Some(q) => Err(serde::de::Error::custom(format!(
            "quantity must be a whole number, got {}",
            q
        ))),
    }
}

impl CutRequest {
    /// Convert to a spec if every field is present.
    pub fn to_spec(&self) -> Option<CutSpec> {
        Some(CutSpec::new(
            self.length?,
            self.width?,
            self.quantity?,
            self.kerf?,
        ))
    }

    /// Check if any field is missing.
    pub fn is_incomplete(&self) -> bool {
        self.to_spec().is_none()
    }

    /// Check if every field is missing.
    pub fn is_blank(&self) -> bool {
        *self == CutRequest::default()
    }
}

impl From<CutSpec> for CutRequest {
    fn from(spec: CutSpec) -> Self {
        Self {
            length: Some(spec.length),
            width: Some(spec.width),
            quantity: Some(spec.quantity),
            kerf: Some(spec.kerf),
        }
    }
}

/// A cutting job: one sheet size and the pieces to cut from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Optional job name, used in log output.
    #[serde(default)]
    pub name: Option<String>,
    /// Stock sheet size.
    #[serde(default)]
    pub sheet: SheetRequest,
    /// Cut list rows in entry order.
    #[serde(default)]
    pub cuts: Vec<CutRequest>,
}

impl Job {
    /// Build a job from a complete sheet size and cut list.
    pub fn new(sheet: SheetSize, specs: &[CutSpec]) -> Self {
        Self {
            name: None,
            sheet: SheetRequest {
                width: Some(sheet.width),
                height: Some(sheet.height),
            },
            cuts: specs.iter().copied().map(CutRequest::from).collect(),
        }
    }

    /// The starter job of the calculator form: a standard board and three
    /// rows cut with a 3 mm kerf.
    pub fn default_example() -> Self {
        let mut job = Self::new(
            SheetSize::new(DEFAULT_SHEET_WIDTH_MM, DEFAULT_SHEET_HEIGHT_MM),
            &[
                CutSpec::new(1200.0, 900.0, 1, DEFAULT_KERF_MM),
                CutSpec::new(1200.0, 500.0, 1, DEFAULT_KERF_MM),
                CutSpec::new(500.0, 900.0, 2, DEFAULT_KERF_MM),
            ],
        );
        job.name = Some("Example".to_string());
        job
    }

    /// Display name for logs.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed job")
    }

    /// Resolve the sheet size. Missing dimensions are reported as zero.
    pub fn sheet_size(&self) -> Result<SheetSize> {
        let size = SheetSize::new(
            self.sheet.width.unwrap_or(0.0),
            self.sheet.height.unwrap_or(0.0),
        );
        size.validate()?;
        Ok(size)
    }

    /// Complete cut rows with their index in `cuts`.
    pub fn valid_specs(&self) -> Vec<(usize, CutSpec)> {
        self.cuts
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.to_spec().map(|s| (i, s)))
            .collect()
    }

    /// Indices of rows skipped because a field is missing.
    pub fn incomplete_indices(&self) -> Vec<usize> {
        self.cuts
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_incomplete())
            .map(|(i, _)| i)
            .collect()
    }
}

/// Parse a job from JSON text.
pub fn parse_job_str(content: &str) -> Result<Job> {
    let job: Job = serde_json::from_str(content)?;
    tracing::debug!(
        "Parsed job '{}' with {} cut row(s)",
        job.display_name(),
        job.cuts.len()
    );
    Ok(job)
}

/// Parse a job file from disk.
pub fn parse_job_file(path: &Path) -> Result<Job> {
    if !path.exists() {
        return Err(LayoutError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(LayoutError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    parse_job_str(&content)
}
