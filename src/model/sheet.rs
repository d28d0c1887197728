//! Material sheet dimensions.

use crate::config::{DEFAULT_SHEET_HEIGHT_MM, DEFAULT_SHEET_WIDTH_MM};
use crate::error::{LayoutError, Result};
use serde::{Deserialize, Serialize};

/// Size of one stock sheet in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetSize {
    /// Sheet width (X axis).
    pub width: f64,
    /// Sheet height (Y axis).
    pub height: f64,
}

impl Default for SheetSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_SHEET_WIDTH_MM,
            height: DEFAULT_SHEET_HEIGHT_MM,
        }
    }
}

impl SheetSize {
    /// Create a new sheet size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check that both dimensions are finite and positive.
    pub fn validate(&self) -> Result<()> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(LayoutError::InvalidSheetDimensions {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Sheet area in mm².
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Check whether a rectangle of the given size fits without rotation.
    pub fn fits(&self, width: f64, height: f64) -> bool {
        width <= self.width && height <= self.height
    }
}

impl std::fmt::Display for SheetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {} mm", self.width, self.height)
    }
}
