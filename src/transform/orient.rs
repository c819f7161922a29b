//! Orientation (rotation) selection for regular rooms.
//!
//! Rotation is decided per room. Carpet nap runs along the roll, so a
//! rotated piece represents the room laid with its length across the roll;
//! stairs never rotate and are handled elsewhere.

use crate::config::RollConfig;

/// The orientation chosen for one room: the effective width across the
/// roll and length along it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    /// Effective width across the roll.
    pub width: f64,
    /// Effective length along the roll, margin-free.
    pub length: f64,
    /// Whether length/width were swapped from the input orientation.
    pub rotated: bool,
}

/// Pick the orientation for a regular room of the given dimensions.
///
/// Rules, in order:
/// 1. If both orientations fit in a single strip, take the one using less
///    roll width (tie goes to unrotated).
/// 2. Otherwise take the orientation needing fewer strips.
/// 3. On a strip-count tie, take the lower estimated material use,
///    `strips * (length + margin)` (tie goes to unrotated).
pub fn choose_orientation(length: f64, width: f64, config: &RollConfig) -> Orientation {
    let natural = Orientation {
        width,
        length,
        rotated: false,
    };
    let rotated = Orientation {
        width: length,
        length: width,
        rotated: true,
    };

    let strips_natural = config.strips_needed(natural.width);
    let strips_rotated = config.strips_needed(rotated.width);

    if strips_natural == 1 && strips_rotated == 1 {
        if rotated.width < natural.width {
            return rotated;
        }
        return natural;
    }

    if strips_natural != strips_rotated {
        if strips_rotated < strips_natural {
            return rotated;
        }
        return natural;
    }

    let estimate_natural = strips_natural as f64 * (natural.length + config.cutting_margin);
    let estimate_rotated = strips_rotated as f64 * (rotated.length + config.cutting_margin);
    if estimate_rotated < estimate_natural {
        rotated
    } else {
        natural
    }
}
