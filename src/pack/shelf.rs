//! First-fit shelf packing.
//!
//! A shelf is a horizontal band across the roll width. Pieces are placed
//! left to right on the first shelf with enough remaining width; a new
//! shelf opens below the last when none fits. Placing tall pieces first
//! keeps shelf heights close to their tallest member.

use tracing::debug;

use crate::config::{RollConfig, SORT_LENGTH_TOL};
use crate::model::{LayoutResult, Piece, PlacedPiece};

/// One horizontal band across the roll.
#[derive(Debug, Clone)]
pub struct Shelf {
    /// Top edge along the roll length.
    pub y: f64,
    /// Next free x position.
    pub current_x: f64,
    /// Width still available on this shelf.
    pub remaining_width: f64,
    /// Tallest margin-adjusted piece length on this shelf.
    pub height: f64,
}

/// Sort pieces descending by margin-adjusted length, then width.
///
/// Lengths within [`SORT_LENGTH_TOL`] are treated as equal so near-equal
/// pieces order by width instead of float noise. The sort is stable, so
/// identical pieces keep derivation order and the layout is deterministic.
pub fn sort_for_packing(pieces: &mut [Piece], config: &RollConfig) {
    pieces.sort_by(|a, b| {
        let la = a.placed_length(config.cutting_margin);
        let lb = b.placed_length(config.cutting_margin);
        if (la - lb).abs() > SORT_LENGTH_TOL {
            lb.total_cmp(&la)
        } else {
            b.width.total_cmp(&a.width)
        }
    });
}

/// Sort and place all pieces, returning the finished layout.
///
/// `total_length` is the bottom edge of the last shelf, or zero when no
/// pieces were placed.
pub fn pack_pieces(mut pieces: Vec<Piece>, config: &RollConfig) -> LayoutResult {
    if pieces.is_empty() {
        return LayoutResult::empty();
    }

    sort_for_packing(&mut pieces, config);

    let mut shelves: Vec<Shelf> = Vec::new();
    let mut placed: Vec<PlacedPiece> = Vec::with_capacity(pieces.len());

    for piece in pieces {
        let piece_height = piece.placed_length(config.cutting_margin);

        // First fit: scan shelves top to bottom.
        if let Some(shelf) = shelves
            .iter_mut()
            .find(|s| s.remaining_width >= piece.width)
        {
            let x = shelf.current_x;
            let y = shelf.y;
            shelf.current_x += piece.width;
            shelf.remaining_width -= piece.width;
            shelf.height = shelf.height.max(piece_height);
            placed.push(PlacedPiece { piece, x, y });
            continue;
        }

        // No shelf fits: open a new one below the last.
        let y = shelves.last().map_or(0.0, |s| s.y + s.height);
        shelves.push(Shelf {
            y,
            current_x: piece.width,
            remaining_width: config.roll_width - piece.width,
            height: piece_height,
        });
        placed.push(PlacedPiece { piece, x: 0.0, y });
    }

    let total_length = shelves.last().map_or(0.0, |s| s.y + s.height);
    debug!(
        "Packed {} piece(s) on {} shelf(s), {:.2}m broadloom",
        placed.len(),
        shelves.len(),
        total_length
    );

    LayoutResult {
        total_length,
        pieces: placed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;
    use pretty_assertions::assert_eq;

    fn room_piece(width: f64, length: f64) -> Piece {
        Piece {
            width,
            length,
            total_strips: 1,
            ..Default::default()
        }
    }

    fn stair_piece(width: f64) -> Piece {
        Piece {
            is_stairs: true,
            width,
            length: 0.5,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_input() {
        let config = RollConfig::default();
        let result = pack_pieces(Vec::new(), &config);
        assert!(result.is_empty());
        assert_eq!(result.total_length, 0.0);
    }

    #[test]
    fn test_sort_orders_tall_then_wide() {
        let config = RollConfig::default();
        let mut pieces = vec![
            room_piece(1.0, 2.0),
            room_piece(3.0, 4.0),
            room_piece(2.0, 4.0),
        ];
        sort_for_packing(&mut pieces, &config);
        assert!(approx_eq(pieces[0].width, 3.0));
        assert!(approx_eq(pieces[1].width, 2.0));
        assert!(approx_eq(pieces[2].width, 1.0));
    }

    #[test]
    fn test_stair_sorts_by_bare_length() {
        let config = RollConfig::default();
        // Stair (0.5, no margin) vs room 0.45 (+0.2 = 0.65): room first.
        let mut pieces = vec![stair_piece(1.0), room_piece(1.0, 0.45)];
        sort_for_packing(&mut pieces, &config);
        assert!(!pieces[0].is_stairs);
    }

    #[test]
    fn test_two_pieces_share_a_shelf() {
        let config = RollConfig::default();
        let pieces = vec![room_piece(1.5, 3.0), room_piece(1.5, 2.0)];
        let result = pack_pieces(pieces, &config);

        assert_eq!(result.pieces.len(), 2);
        // Both at y = 0, side by side.
        assert!(result.pieces.iter().all(|p| approx_eq(p.y, 0.0)));
        // Shelf height is the taller piece plus margin.
        assert!(approx_eq(result.total_length, 3.2));
    }

    #[test]
    fn test_new_shelf_opens_below() {
        let config = RollConfig::default();
        let pieces = vec![room_piece(3.0, 4.0), room_piece(3.0, 2.0)];
        let result = pack_pieces(pieces, &config);

        // 3.0 + 3.0 > 3.66: second piece goes on a new shelf at y = 4.2.
        assert!(approx_eq(result.pieces[0].y, 0.0));
        assert!(approx_eq(result.pieces[1].y, 4.2));
        assert!(approx_eq(result.total_length, 4.2 + 2.2));
    }

    #[test]
    fn test_stairs_pack_three_per_shelf() {
        let config = RollConfig::default();
        let pieces: Vec<Piece> = (0..12).map(|_| stair_piece(1.0)).collect();
        let result = pack_pieces(pieces, &config);

        // floor(3.66 / 1.0) = 3 per shelf, 4 shelves of 0.5m.
        assert!(approx_eq(result.total_length, 2.0));
        for piece in &result.pieces {
            assert!(piece.x_max() <= config.roll_width + crate::config::EPS);
        }
    }

    #[test]
    fn test_fit_invariant() {
        let config = RollConfig::default();
        let pieces = vec![
            room_piece(3.66, 5.0),
            room_piece(2.5, 3.0),
            room_piece(1.2, 3.0),
            stair_piece(0.9),
            stair_piece(0.9),
        ];
        let result = pack_pieces(pieces, &config);
        for piece in &result.pieces {
            assert!(piece.x >= 0.0);
            assert!(piece.x_max() <= config.roll_width + crate::config::EPS);
        }
    }
}
