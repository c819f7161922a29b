//! Shelf summaries and material-usage statistics for a finished layout.

use serde::{Deserialize, Serialize};

use crate::config::{RollConfig, SHELF_GROUP_TOL};
use crate::model::LayoutResult;

/// One shelf of the layout, reconstructed from piece positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfSummary {
    /// Top edge along the roll length.
    pub y: f64,
    /// Shelf height including cutting margins.
    pub height: f64,
    /// Number of regular room pieces on this shelf.
    pub regular_pieces: usize,
    /// Number of stair pieces on this shelf.
    pub stair_pieces: usize,
    /// Combined width of the pieces on this shelf.
    pub width_used: f64,
    /// Width utilisation as a whole percentage, capped at 100.
    pub utilization_percent: u32,
}

/// Material-usage statistics for a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutStats {
    /// Combined cut area of all pieces, in square meters.
    pub used_area: f64,
    /// Total roll area consumed (roll width times total length).
    pub roll_area: f64,
    /// Used area over roll area as a whole percentage.
    pub efficiency_percent: u32,
}

/// Group placed pieces back into shelves, ordered top to bottom.
///
/// Pieces whose y positions differ by less than [`SHELF_GROUP_TOL`] share a
/// shelf. The shelf height is the tallest margin-adjusted piece in it.
pub fn shelf_summaries(result: &LayoutResult, config: &RollConfig) -> Vec<ShelfSummary> {
    let mut shelves: Vec<ShelfSummary> = Vec::new();

    for placed in &result.pieces {
        let height = placed.piece.placed_length(config.cutting_margin);
        let position = shelves
            .iter()
            .position(|s| (s.y - placed.y).abs() < SHELF_GROUP_TOL);
        let index = match position {
            Some(index) => index,
            None => {
                shelves.push(ShelfSummary {
                    y: placed.y,
                    height: 0.0,
                    regular_pieces: 0,
                    stair_pieces: 0,
                    width_used: 0.0,
                    utilization_percent: 0,
                });
                shelves.len() - 1
            }
        };
        let shelf = &mut shelves[index];

        shelf.height = shelf.height.max(height);
        shelf.width_used += placed.piece.width;
        if placed.piece.is_stairs {
            shelf.stair_pieces += 1;
        } else {
            shelf.regular_pieces += 1;
        }
    }

    shelves.sort_by(|a, b| a.y.total_cmp(&b.y));

    for shelf in &mut shelves {
        let pct = (shelf.width_used / config.roll_width * 100.0).round() as u32;
        shelf.utilization_percent = pct.min(100);
    }

    shelves
}

/// Compute used-vs-total material statistics for a layout.
pub fn layout_stats(result: &LayoutResult, config: &RollConfig) -> LayoutStats {
    let used_area: f64 = result.pieces.iter().map(|p| p.piece.area()).sum();
    let roll_area = config.roll_width * result.total_length;
    let efficiency_percent = if roll_area > 0.0 {
        (used_area / roll_area * 100.0).round() as u32
    } else {
        0
    };

    LayoutStats {
        used_area,
        roll_area,
        efficiency_percent,
    }
}
