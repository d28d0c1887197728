//! Piece expansion: cut list to individual kerf-inflated rectangles.

use crate::error::{LayoutError, Result};
use crate::model::{CutSpec, SheetSize, UnitPiece};

/// Expand a cut list into one unit piece per requested copy.
///
/// Every spec is checked before any piece is produced, so a single
/// oversized or malformed entry fails the whole request. Pieces are not
/// rotated: packing width must fit the sheet width and packing height the
/// sheet height.
pub fn expand_pieces(sheet: SheetSize, specs: &[CutSpec]) -> Result<Vec<UnitPiece>> {
    for (index, spec) in specs.iter().enumerate() {
        spec.check(index)?;

        if !sheet.fits(spec.packing_width(), spec.packing_height()) {
            return Err(LayoutError::OversizedPiece {
                index,
                length: spec.length,
                width: spec.width,
                kerf: spec.kerf,
                sheet_width: sheet.width,
                sheet_height: sheet.height,
            });
        }
    }

    let total: usize = specs.iter().map(|s| s.quantity as usize).sum();
    let mut pieces = Vec::with_capacity(total);

    for (spec_index, spec) in specs.iter().enumerate() {
        let piece = UnitPiece {
            spec_index,
            packing_width: spec.packing_width(),
            packing_height: spec.packing_height(),
            original_width: spec.width,
            original_height: spec.length,
        };
        pieces.extend(std::iter::repeat(piece).take(spec.quantity as usize));
    }

    tracing::debug!(
        "Expanded {} cut spec(s) into {} piece(s)",
        specs.len(),
        pieces.len()
    );

    Ok(pieces)
}
