//! Data model types for sheet layout calculation.

mod cut_spec;
mod layout;
mod piece;
mod sheet;

pub use cut_spec::CutSpec;
pub use layout::{Layout, SheetLayout};
pub use piece::{FreeRect, PlacedPiece, UnitPiece};
pub use sheet::SheetSize;
