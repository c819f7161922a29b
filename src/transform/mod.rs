//! Piece derivation: orientation selection, strip splitting and stair
//! expansion.

mod orient;
mod pieces;

pub use orient::{choose_orientation, Orientation};
pub use pieces::derive_pieces;
