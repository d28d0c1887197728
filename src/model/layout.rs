//! Layout - Packing result for a whole cut list.

use super::{CutSpec, FreeRect, PlacedPiece, SheetSize};
use serde::{Deserialize, Serialize};

/// Placements and metrics for one sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetLayout {
    /// Sheet ordinal, starting at 1.
    pub id: usize,
    /// Pieces placed on this sheet, in placement order.
    pub pieces: Vec<PlacedPiece>,
    /// Empty regions left after packing.
    pub free_rects: Vec<FreeRect>,
    /// Sum of placed packing areas.
    pub used_area: f64,
    /// Sheet area minus used area.
    pub wasted_area: f64,
    /// Used area as a percentage of the sheet area.
    pub utilization_percent: f64,
}

impl SheetLayout {
    /// Number of pieces on this sheet.
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Total area of the remaining free rectangles.
    pub fn free_area(&self) -> f64 {
        self.free_rects.iter().map(FreeRect::area).sum()
    }
}

/// Complete multi-sheet layout with aggregate metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Stock sheet size used for every sheet.
    pub sheet: SheetSize,
    /// Number of sheets required.
    pub sheet_count: usize,
    /// Per-sheet placements and metrics.
    pub sheets: Vec<SheetLayout>,
    /// Number of unit pieces placed.
    pub total_pieces: usize,
    /// Sum of used area over all sheets.
    pub total_used_area: f64,
    /// Total sheet area minus total used area.
    pub total_wasted_area: f64,
    /// Overall utilization, capped at 100.
    pub total_utilization_percent: f64,
    /// Sum of piece perimeters (saw travel estimate).
    pub total_cut_perimeter: f64,
    /// Cut list the layout was computed from.
    pub specs: Vec<CutSpec>,
}

impl Layout {
    /// Total stock area consumed (sheet area times sheet count).
    pub fn total_sheet_area(&self) -> f64 {
        self.sheet.area() * self.sheet_count as f64
    }

    /// Iterate over every placed piece with its sheet id.
    pub fn placements(&self) -> impl Iterator<Item = (usize, &PlacedPiece)> {
        self.sheets
            .iter()
            .flat_map(|s| s.pieces.iter().map(move |p| (s.id, p)))
    }

    /// Find a sheet by its id.
    pub fn find_sheet(&self, id: usize) -> Option<&SheetLayout> {
        self.sheets.iter().find(|s| s.id == id)
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} sheet(s) of {}, {} piece(s), {:.1}% utilization",
            self.sheet_count, self.sheet, self.total_pieces, self.total_utilization_percent
        )
    }
}
