//! Validation of room input before layout.
//!
//! The engine itself silently filters unusable rooms; this module is the
//! boundary layer that tells a caller (UI or CLI) what was filtered and
//! why, and rejects inputs the engine has no sensible output for.

use crate::config::RollConfig;
use crate::error::{LayoutError, Result};
use crate::model::RoomSpec;

/// Validation outcome with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }
}

/// Validate rooms against a roll configuration.
///
/// Errors mean the layout cannot be computed as asked (bad roll width,
/// stairs wider than the roll). Warnings flag rooms the engine will drop
/// or handle specially so the caller can surface them.
pub fn validate_rooms(rooms: &[RoomSpec], config: &RollConfig) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if config.roll_width <= 0.0 {
        result.add_error(format!(
            "Roll width must be positive, got {}",
            config.roll_width
        ));
        return result;
    }

    let mut valid_rooms = 0usize;

    for (index, room) in rooms.iter().enumerate() {
        if !room.is_valid() {
            result.add_warning(format!(
                "Room {} ('{}'): invalid dimensions ({} x {}), excluded from layout",
                index + 1,
                room.name,
                room.length,
                room.width
            ));
            continue;
        }
        valid_rooms += 1;

        if room.is_stairs {
            if room.width > config.roll_width {
                result.add_error(format!(
                    "Room {} ('{}'): stair width {}m exceeds roll width {}m; oversized stairs are not supported",
                    index + 1,
                    room.name,
                    room.width,
                    config.roll_width
                ));
            }
            if room.stair_count == 0 {
                result.add_warning(format!(
                    "Room {} ('{}'): staircase with zero stairs produces no pieces",
                    index + 1,
                    room.name
                ));
            }
        } else if room.width > config.roll_width && room.length > config.roll_width {
            result.add_warning(format!(
                "Room {} ('{}'): wider than the roll in both orientations, will be cut into multiple strips",
                index + 1,
                room.name
            ));
        }
    }

    if valid_rooms == 0 {
        result.add_warning("No valid rooms; layout will be empty".to_string());
    }

    result
}

/// Validation check for the command-line `--validate` flag.
pub fn quick_validate(rooms: &[RoomSpec], config: &RollConfig) -> Result<()> {
    let result = validate_rooms(rooms, config);

    if !result.passed {
        return Err(LayoutError::Validation {
            message: result.errors.join("; "),
        });
    }

    Ok(())
}
