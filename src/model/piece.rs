//! Piece definitions: rectangular units cut from the roll.

use serde::{Deserialize, Serialize};

/// A single rectangular unit to be cut from the roll, derived from one
/// room. Pieces exist only within one layout computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    /// Index of the originating room in the caller's room list. Pieces
    /// from the same room share this value.
    pub source_room_index: usize,
    /// Room name, carried for labelling.
    pub room_name: String,
    /// Whether this piece is an individual stair.
    pub is_stairs: bool,
    /// Piece width across the roll; never exceeds the roll width.
    pub width: f64,
    /// Piece length along the roll, before cutting margin.
    pub length: f64,
    /// Position within a multi-strip split of one room (0-based).
    pub strip_index: u32,
    /// Total strips the room was split into (1 for single-piece rooms).
    pub total_strips: u32,
    /// 1-based stair number within the staircase, for stair pieces.
    pub stair_number: Option<u32>,
    /// Whether the room's length/width were swapped from the input
    /// orientation. Always false for stairs.
    pub is_rotated: bool,
}

impl Piece {
    /// Length this piece occupies on the roll: stored length plus the
    /// cutting margin for non-stair pieces. Stairs get no margin.
    pub fn placed_length(&self, cutting_margin: f64) -> f64 {
        if self.is_stairs {
            self.length
        } else {
            self.length + cutting_margin
        }
    }

    /// Cut area in square meters (margin-free).
    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    /// Display label, e.g. "Bedroom (Strip 1/2)" or "Stairs 3/12".
    pub fn label(&self) -> String {
        if let Some(n) = self.stair_number {
            format!("{} {}/{}", self.room_name, n, self.total_strips)
        } else if self.total_strips > 1 {
            format!(
                "{} (Strip {}/{})",
                self.room_name,
                self.strip_index + 1,
                self.total_strips
            )
        } else {
            self.room_name.clone()
        }
    }
}

/// A piece with assigned roll coordinates. `x` runs across the roll width,
/// `y` along its length, both from the roll's top-left corner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacedPiece {
    #[serde(flatten)]
    pub piece: Piece,
    /// Offset across the roll width.
    pub x: f64,
    /// Offset along the roll length.
    pub y: f64,
}

impl PlacedPiece {
    /// Right edge across the roll width.
    pub fn x_max(&self) -> f64 {
        self.x + self.piece.width
    }

    /// Bottom edge along the roll, including the cutting margin.
    pub fn y_max(&self, cutting_margin: f64) -> f64 {
        self.y + self.piece.placed_length(cutting_margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CUTTING_MARGIN;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_placed_length_adds_margin_for_rooms() {
        let piece = Piece {
            length: 5.0,
            ..Default::default()
        };
        assert!((piece.placed_length(CUTTING_MARGIN) - 5.2).abs() < 1e-9);
    }

    #[test]
    fn test_placed_length_no_margin_for_stairs() {
        let piece = Piece {
            is_stairs: true,
            length: 0.5,
            ..Default::default()
        };
        assert!((piece.placed_length(CUTTING_MARGIN) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_labels() {
        let single = Piece {
            room_name: "Lounge".into(),
            total_strips: 1,
            ..Default::default()
        };
        assert_eq!(single.label(), "Lounge");

        let strip = Piece {
            room_name: "Hall".into(),
            strip_index: 1,
            total_strips: 3,
            ..Default::default()
        };
        assert_eq!(strip.label(), "Hall (Strip 2/3)");

        let stair = Piece {
            room_name: "Stairs".into(),
            is_stairs: true,
            total_strips: 12,
            stair_number: Some(3),
            ..Default::default()
        };
        assert_eq!(stair.label(), "Stairs 3/12");
    }
}
