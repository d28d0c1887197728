//! Cut specification: one line of the cut list.

use crate::error::{LayoutError, Result};
use serde::{Deserialize, Serialize};

/// A requested piece size with its quantity and saw kerf.
///
/// `length` runs along the sheet height and `width` along the sheet width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutSpec {
    /// Piece length (Y axis).
    pub length: f64,
    /// Piece width (X axis).
    pub width: f64,
    /// Number of copies.
    pub quantity: u32,
    /// Saw blade allowance added to both dimensions.
    pub kerf: f64,
}

impl CutSpec {
    /// Create a new cut specification.
    pub fn new(length: f64, width: f64, quantity: u32, kerf: f64) -> Self {
        Self {
            length,
            width,
            quantity,
            kerf,
        }
    }

    /// Width used for packing (width + kerf).
    pub fn packing_width(&self) -> f64 {
        self.width + self.kerf
    }

    /// Height used for packing (length + kerf).
    pub fn packing_height(&self) -> f64 {
        self.length + self.kerf
    }

    /// Reject malformed values. `index` identifies the entry in errors.
    pub fn check(&self, index: usize) -> Result<()> {
        let invalid = |field: &'static str, value: String| LayoutError::InvalidCut {
            index,
            field,
            value,
        };

        if !(self.length.is_finite() && self.length > 0.0) {
            return Err(invalid("length", self.length.to_string()));
        }
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(invalid("width", self.width.to_string()));
        }
        if self.quantity == 0 {
            return Err(invalid("quantity", self.quantity.to_string()));
        }
        if !(self.kerf.is_finite() && self.kerf >= 0.0) {
            return Err(invalid("kerf", self.kerf.to_string()));
        }
        Ok(())
    }

    /// Display label in the "length x width" form used on layouts.
    pub fn label(&self) -> String {
        format!("{}x{}", self.length, self.width)
    }
}
