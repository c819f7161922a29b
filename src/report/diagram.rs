//! Renderer-agnostic roll diagram geometry.
//!
//! Maps a finished layout to the rectangles and guide lines a rendering
//! layer (canvas, SVG, PDF) needs to draw the cutting plan. All coordinates
//! are in meters in the roll's local frame: x across the width, y along
//! the length.

use serde::{Deserialize, Serialize};

use crate::config::RollConfig;
use crate::model::LayoutResult;
use crate::report::shelf_summaries;

/// One piece rectangle in the diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Display label, e.g. "Hall (Strip 2/3)" or "Stairs 3/12".
    pub label: String,
    /// Color group: pieces from the same room share one.
    pub color_group: usize,
    /// Shade offset within the group so adjacent strips of one room stay
    /// distinguishable: 0 for the base color, -10 for stairs, +/-10 for
    /// alternating strips.
    pub shade: i8,
    pub is_stairs: bool,
    pub is_rotated: bool,
}

/// A cutting-margin strip drawn below a regular piece.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A horizontal guide line across part of the roll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeparatorLine {
    pub x_start: f64,
    pub x_end: f64,
    pub y: f64,
}

/// Complete diagram geometry for one layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollDiagram {
    /// Roll width in meters.
    pub roll_width: f64,
    /// Broadloom meters consumed.
    pub total_length: f64,
    /// Piece rectangles, in placement order.
    pub pieces: Vec<DiagramRect>,
    /// Cutting-margin strips for regular pieces.
    pub margins: Vec<MarginRect>,
    /// Shelf boundary lines (bottom edge of each shelf), full roll width.
    pub shelf_lines: Vec<SeparatorLine>,
}

/// Build the diagram geometry for a layout.
pub fn build_diagram(result: &LayoutResult, config: &RollConfig) -> RollDiagram {
    let mut pieces = Vec::with_capacity(result.pieces.len());
    let mut margins = Vec::new();

    for placed in &result.pieces {
        let piece = &placed.piece;

        let shade: i8 = if piece.is_stairs {
            -10
        } else if piece.strip_index > 0 {
            if piece.strip_index % 2 == 0 {
                10
            } else {
                -10
            }
        } else {
            0
        };

        pieces.push(DiagramRect {
            x: placed.x,
            y: placed.y,
            width: piece.width,
            height: piece.length,
            label: piece.label(),
            color_group: piece.source_room_index,
            shade,
            is_stairs: piece.is_stairs,
            is_rotated: piece.is_rotated,
        });

        if !piece.is_stairs {
            margins.push(MarginRect {
                x: placed.x,
                y: placed.y + piece.length,
                width: piece.width,
                height: config.cutting_margin,
            });
        }
    }

    let shelf_lines = shelf_summaries(result, config)
        .iter()
        .map(|shelf| SeparatorLine {
            x_start: 0.0,
            x_end: config.roll_width,
            y: shelf.y + shelf.height,
        })
        .collect();

    RollDiagram {
        roll_width: config.roll_width,
        total_length: result.total_length,
        pieces,
        margins,
        shelf_lines,
    }
}
