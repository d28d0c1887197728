//! Rectangles handled by the packer: unit pieces, placements and free regions.

use serde::{Deserialize, Serialize};

/// One physical piece to be placed, already inflated by its kerf.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitPiece {
    /// Index of the cut specification this piece came from.
    pub spec_index: usize,
    /// Width used for packing (X axis).
    pub packing_width: f64,
    /// Height used for packing (Y axis).
    pub packing_height: f64,
    /// Requested width before kerf.
    pub original_width: f64,
    /// Requested length before kerf.
    pub original_height: f64,
}

impl UnitPiece {
    /// Packed area in mm².
    pub fn area(&self) -> f64 {
        self.packing_width * self.packing_height
    }

    /// Perimeter of the packed rectangle.
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.packing_width + self.packing_height)
    }
}

/// A unit piece with its assigned position on a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedPiece {
    /// Left edge X coordinate.
    pub x: f64,
    /// Top edge Y coordinate (sheet origin is the top-left corner).
    pub y: f64,
    /// Width used for packing.
    pub packing_width: f64,
    /// Height used for packing.
    pub packing_height: f64,
    /// Requested width before kerf.
    pub original_width: f64,
    /// Requested length before kerf.
    pub original_height: f64,
    /// Index of the originating cut specification.
    pub spec_index: usize,
}

impl PlacedPiece {
    /// Place a unit piece at the given position.
    pub fn new(piece: &UnitPiece, x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            packing_width: piece.packing_width,
            packing_height: piece.packing_height,
            original_width: piece.original_width,
            original_height: piece.original_height,
            spec_index: piece.spec_index,
        }
    }

    /// Get the right edge X coordinate.
    pub fn x_max(&self) -> f64 {
        self.x + self.packing_width
    }

    /// Get the bottom edge Y coordinate.
    pub fn y_max(&self) -> f64 {
        self.y + self.packing_height
    }

    /// Packed area in mm².
    pub fn area(&self) -> f64 {
        self.packing_width * self.packing_height
    }

    /// Perimeter of the packed rectangle.
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.packing_width + self.packing_height)
    }

    /// Label shown on rendered layouts ("length x width").
    pub fn label(&self) -> String {
        format!("{}x{}", self.original_height, self.original_width)
    }

    /// Bounds as a free-rectangle-shaped value, for overlap checks.
    pub fn bounds(&self) -> FreeRect {
        FreeRect::new(self.x, self.y, self.packing_width, self.packing_height)
    }
}

/// An empty axis-aligned region of a sheet available for placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FreeRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FreeRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a piece of the given packing size fits (no rotation).
    pub fn fits(&self, width: f64, height: f64) -> bool {
        width <= self.width && height <= self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn x_max(&self) -> f64 {
        self.x + self.width
    }

    pub fn y_max(&self) -> f64 {
        self.y + self.height
    }

    /// Check whether two rectangles share interior area, ignoring
    /// contacts thinner than `tolerance`.
    pub fn overlaps(&self, other: &FreeRect, tolerance: f64) -> bool {
        let x_overlap = self.x < other.x_max() - tolerance && other.x < self.x_max() - tolerance;
        let y_overlap = self.y < other.y_max() - tolerance && other.y < self.y_max() - tolerance;
        x_overlap && y_overlap
    }

    /// Guillotine split after placing a `width` x `height` piece at this
    /// rectangle's origin: right remainder first, then bottom remainder.
    /// Zero-area remainders are dropped.
    pub fn split(&self, width: f64, height: f64) -> impl Iterator<Item = FreeRect> {
        let right = FreeRect::new(self.x + width, self.y, self.width - width, height);
        let bottom = FreeRect::new(self.x, self.y + height, self.width, self.height - height);
        [right, bottom]
            .into_iter()
            .filter(|r| r.width > 0.0 && r.height > 0.0)
    }
}
