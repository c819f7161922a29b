//! Layout result produced by the engine.

use serde::{Deserialize, Serialize};

use crate::model::PlacedPiece;

/// The complete output of one layout computation.
///
/// `total_length` is the length of the shortest roll segment containing
/// every placed piece plus its cutting margin — the broadloom meters to
/// bill for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Broadloom meters consumed.
    pub total_length: f64,
    /// Every piece with its roll coordinates.
    pub pieces: Vec<PlacedPiece>,
}

impl LayoutResult {
    /// The empty layout: no pieces, zero length.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the layout holds no pieces.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// All placed pieces derived from one room.
    pub fn pieces_for_room(&self, room_index: usize) -> impl Iterator<Item = &PlacedPiece> {
        self.pieces
            .iter()
            .filter(move |p| p.piece.source_room_index == room_index)
    }
}
