//! Shelf-based placement of pieces on the roll.

mod shelf;

pub use shelf::{pack_pieces, sort_for_packing, Shelf};
