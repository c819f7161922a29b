//! Expand rooms into the rectangular pieces to cut from the roll.

use tracing::{debug, warn};

use crate::config::RollConfig;
use crate::model::{Piece, RoomSpec};
use crate::transform::choose_orientation;

/// Derive every cut piece for the given rooms.
///
/// Invalid rooms are silently skipped. Staircases expand to one piece per
/// stair, never rotated. Regular rooms pick an orientation and split into
/// full-width strips plus a remainder strip when wider than the roll.
///
/// A staircase whose tread width exceeds the roll width is unsupported
/// input and is skipped like an invalid room; boundary validation reports
/// it so callers can surface the problem.
pub fn derive_pieces(rooms: &[RoomSpec], config: &RollConfig) -> Vec<Piece> {
    let mut pieces = Vec::new();

    for (room_index, room) in rooms.iter().enumerate() {
        if !room.is_valid() {
            debug!(
                "Room {} ('{}'): invalid dimensions, excluded from layout",
                room_index, room.name
            );
            continue;
        }

        if room.is_stairs {
            if room.width > config.roll_width {
                warn!(
                    "Room {} ('{}'): stair width {}m exceeds roll width {}m, excluded",
                    room_index, room.name, room.width, config.roll_width
                );
                continue;
            }
            expand_stairs(&mut pieces, room_index, room, config);
        } else {
            split_room(&mut pieces, room_index, room, config);
        }
    }

    pieces
}

/// One piece per stair, fixed depth, never rotated.
fn expand_stairs(pieces: &mut Vec<Piece>, room_index: usize, room: &RoomSpec, config: &RollConfig) {
    for stair in 0..room.stair_count {
        pieces.push(Piece {
            source_room_index: room_index,
            room_name: room.name.clone(),
            is_stairs: true,
            width: room.width,
            length: config.stair_depth,
            strip_index: stair,
            total_strips: room.stair_count,
            stair_number: Some(stair + 1),
            is_rotated: false,
        });
    }
}

/// Orient a regular room and split it into roll-width strips.
fn split_room(pieces: &mut Vec<Piece>, room_index: usize, room: &RoomSpec, config: &RollConfig) {
    let orientation = choose_orientation(room.length, room.width, config);
    let strips = config.strips_needed(orientation.width);
    debug!(
        "Room {} ('{}'): {} strip(s), rotated={}",
        room_index, room.name, strips, orientation.rotated
    );

    for strip in 0..strips {
        // All strips are full roll width except the last remainder strip.
        let strip_width = if strip < strips - 1 {
            config.roll_width
        } else {
            orientation.width - config.roll_width * (strips - 1) as f64
        };

        pieces.push(Piece {
            source_room_index: room_index,
            room_name: room.name.clone(),
            is_stairs: false,
            width: strip_width,
            length: orientation.length,
            strip_index: strip,
            total_strips: strips,
            stair_number: None,
            is_rotated: orientation.rotated,
        });
    }
}
