//! Utilization and waste metrics for packed sheets.

use crate::config::utilization_percent;
use crate::model::{CutSpec, Layout, SheetLayout, SheetSize};

use super::Sheet;

/// Build the final layout with per-sheet and aggregate metrics.
pub fn aggregate(size: SheetSize, sheets: Vec<Sheet>, specs: &[CutSpec]) -> Layout {
    let sheet_area = size.area();

    let sheet_layouts: Vec<SheetLayout> = sheets
        .into_iter()
        .map(|sheet| {
            let used_area = sheet.used_area();
            SheetLayout {
                id: sheet.id,
                pieces: sheet.placements,
                free_rects: sheet.free_rects,
                used_area,
                wasted_area: sheet_area - used_area,
                utilization_percent: utilization_percent(used_area, sheet_area),
            }
        })
        .collect();

    let sheet_count = sheet_layouts.len();
    let total_sheet_area = sheet_area * sheet_count as f64;
    let total_used_area: f64 = sheet_layouts.iter().map(|s| s.used_area).sum();
    let total_pieces: usize = sheet_layouts.iter().map(SheetLayout::piece_count).sum();
    let total_cut_perimeter: f64 = sheet_layouts
        .iter()
        .flat_map(|s| s.pieces.iter())
        .map(|p| p.perimeter())
        .sum();

    Layout {
        sheet: size,
        sheet_count,
        sheets: sheet_layouts,
        total_pieces,
        total_used_area,
        total_wasted_area: total_sheet_area - total_used_area,
        total_utilization_percent: utilization_percent(total_used_area, total_sheet_area),
        total_cut_perimeter,
        specs: specs.to_vec(),
    }
}
