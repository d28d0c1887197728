//! Tallest-first ordering of unit pieces.

use crate::model::UnitPiece;

/// Sort pieces by packing height, then packing width, both descending.
///
/// The sort is stable, so pieces with equal keys keep their expansion
/// order and the packing result is reproducible.
pub fn sort_pieces(pieces: &mut [UnitPiece]) {
    pieces.sort_by(|a, b| {
        b.packing_height
            .total_cmp(&a.packing_height)
            .then(b.packing_width.total_cmp(&a.packing_width))
    });
}
