//! Data model for rooms, cut pieces and layout results.

mod layout;
mod piece;
mod room;

pub use layout::LayoutResult;
pub use piece::{Piece, PlacedPiece};
pub use room::RoomSpec;
