//! First-fit guillotine sheet packer.
//!
//! Each sheet keeps a list of free rectangles, seeded with the whole sheet.
//! A piece goes into the first free rectangle (sheets in creation order,
//! rectangles in list order) that can hold it without rotation. The used
//! rectangle is replaced by its right and bottom remainders. When no sheet
//! has room, a new sheet is opened.

use crate::error::{LayoutError, Result};
use crate::model::{FreeRect, PlacedPiece, SheetSize, UnitPiece};

/// One stock sheet being filled.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// Sheet ordinal, starting at 1.
    pub id: usize,
    /// Pieces placed so far, in placement order.
    pub placements: Vec<PlacedPiece>,
    /// Remaining empty regions.
    pub free_rects: Vec<FreeRect>,
}

impl Sheet {
    /// Open an empty sheet with a single free rectangle covering it.
    pub fn new(id: usize, size: SheetSize) -> Self {
        Self {
            id,
            placements: Vec::new(),
            free_rects: vec![FreeRect::new(0.0, 0.0, size.width, size.height)],
        }
    }

    /// Index of the first free rectangle that can hold the piece.
    pub fn find_fit(&self, piece: &UnitPiece) -> Option<usize> {
        self.free_rects
            .iter()
            .position(|r| r.fits(piece.packing_width, piece.packing_height))
    }

    /// Place the piece in the first fitting free rectangle.
    ///
    /// Returns the placement, or `None` if nothing on this sheet fits.
    pub fn try_place(&mut self, piece: &UnitPiece) -> Option<PlacedPiece> {
        let index = self.find_fit(piece)?;
        let free = self.free_rects[index];
        let placed = PlacedPiece::new(piece, free.x, free.y);

        let remainders = free.split(piece.packing_width, piece.packing_height);
        self.free_rects = self
            .free_rects
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, r)| *r)
            .chain(remainders)
            .collect();

        self.placements.push(placed);
        Some(placed)
    }

    /// Sum of placed packing areas.
    pub fn used_area(&self) -> f64 {
        self.placements.iter().map(PlacedPiece::area).sum()
    }
}

/// Pack pieces onto as many sheets as needed, in the given order.
///
/// Pieces are expected to have passed [`expand_pieces`](super::expand_pieces),
/// which guarantees each one fits an empty sheet. A piece that does not is
/// reported as [`LayoutError::InternalPackingFailure`].
pub fn pack_pieces(size: SheetSize, pieces: &[UnitPiece]) -> Result<Vec<Sheet>> {
    let mut sheets: Vec<Sheet> = Vec::new();

    for piece in pieces {
        let placed = sheets.iter_mut().find_map(|sheet| {
            sheet
                .try_place(piece)
                .map(|placed| (sheet.id, placed))
        });

        if let Some((sheet_id, placed)) = placed {
            tracing::debug!(
                "Placed {} x {} on sheet {} at ({}, {})",
                placed.packing_width,
                placed.packing_height,
                sheet_id,
                placed.x,
                placed.y
            );
            continue;
        }

        let mut sheet = Sheet::new(sheets.len() + 1, size);
        if sheet.try_place(piece).is_none() {
            tracing::error!(
                "Piece {} x {} does not fit an empty {} sheet",
                piece.packing_width,
                piece.packing_height,
                size
            );
            return Err(LayoutError::InternalPackingFailure {
                width: piece.packing_width,
                height: piece.packing_height,
            });
        }

        tracing::debug!(
            "Opened sheet {} for {} x {}",
            sheet.id,
            piece.packing_width,
            piece.packing_height
        );
        sheets.push(sheet);
    }

    Ok(sheets)
}
