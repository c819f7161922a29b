//! broadloom - Carpet roll cutting-layout engine.
//!
//! Given a list of room specifications and a roll width, this library
//! computes a cutting layout that minimizes (heuristically) the broadloom
//! meters of carpet required. Oversized rooms are split into roll-width
//! strips, staircases expand into individual stair pieces that are never
//! rotated, and everything is packed onto horizontal shelves across the
//! roll width.
//!
//! # Example
//!
//! ```
//! use broadloom::{compute_layout, RoomSpec};
//!
//! let rooms = vec![
//!     RoomSpec::new("Lounge", 5.0, 3.0),
//!     RoomSpec::stairs("Stairs", 1.0, 12),
//! ];
//! let layout = compute_layout(&rooms, 3.66).unwrap();
//! println!("{:.2} broadloom meters", layout.total_length);
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod pack;
pub mod report;
pub mod transform;
pub mod validation;

// Re-exports for convenience
pub use config::{RollConfig, CUTTING_MARGIN, DEFAULT_ROLL_WIDTH, STAIR_DEPTH};
pub use error::{LayoutError, Result};
pub use model::{LayoutResult, Piece, PlacedPiece, RoomSpec};
pub use report::{build_diagram, layout_stats, shelf_summaries, RollDiagram};
pub use validation::{quick_validate, validate_rooms, ValidationResult};

/// Compute a cutting layout for the given rooms and roll width.
///
/// Rooms with unusable dimensions are silently excluded (see
/// [`RoomSpec::is_valid`]); an empty or fully filtered input yields the
/// empty layout. The only error is a non-positive roll width.
///
/// The result is deterministic: the same input always produces the same
/// layout.
pub fn compute_layout(rooms: &[RoomSpec], roll_width: f64) -> Result<LayoutResult> {
    compute_layout_with(rooms, &RollConfig::new(roll_width))
}

/// Compute a cutting layout with explicit roll configuration.
pub fn compute_layout_with(rooms: &[RoomSpec], config: &RollConfig) -> Result<LayoutResult> {
    if config.roll_width <= 0.0 {
        return Err(LayoutError::InvalidRollWidth {
            value: config.roll_width,
        });
    }

    let pieces = transform::derive_pieces(rooms, config);
    Ok(pack::pack_pieces(pieces, config))
}
