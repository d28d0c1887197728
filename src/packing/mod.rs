//! Packing pipeline: expand, sort, pack, aggregate.

mod expand;
mod metrics;
mod packer;
mod sort;

pub use expand::expand_pieces;
pub use metrics::aggregate;
pub use packer::{pack_pieces, Sheet};
pub use sort::sort_pieces;
