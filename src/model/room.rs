//! Room specification as entered by a customer.

use serde::{Deserialize, Serialize};

use crate::config::STAIR_DEPTH;

/// A customer-entered rectangular area or staircase to be carpeted.
///
/// Dimensions come from free-text form fields, so a `RoomSpec` may hold
/// non-positive or non-finite values. Such rooms fail [`RoomSpec::is_valid`]
/// and are excluded from layout rather than reported as errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomSpec {
    /// Display name; not required to be unique.
    pub name: String,
    /// Room length in meters. For staircases this is a derived display
    /// value and is not consulted by the layout engine.
    pub length: f64,
    /// Room width in meters; for stairs, the tread/riser width.
    pub width: f64,
    /// Whether this entry is a staircase.
    pub is_stairs: bool,
    /// Number of stairs; only meaningful when `is_stairs`.
    pub stair_count: u32,
}

impl RoomSpec {
    /// Create a regular room.
    pub fn new(name: impl Into<String>, length: f64, width: f64) -> Self {
        Self {
            name: name.into(),
            length,
            width,
            ..Default::default()
        }
    }

    /// Create a staircase. The length is derived from the stair count so
    /// the room displays a sensible total run.
    pub fn stairs(name: impl Into<String>, width: f64, stair_count: u32) -> Self {
        Self {
            name: name.into(),
            length: stair_count as f64 * STAIR_DEPTH,
            width,
            is_stairs: true,
            stair_count,
        }
    }

    /// Parse a regular room from raw form-field text. Unparseable fields
    /// become NaN, so the resulting room simply fails [`RoomSpec::is_valid`].
    pub fn parse(name: impl Into<String>, length: &str, width: &str) -> Self {
        Self::new(name, parse_dimension(length), parse_dimension(width))
    }

    /// Parse a staircase from raw form-field text.
    pub fn parse_stairs(name: impl Into<String>, width: &str, stair_count: &str) -> Self {
        Self::stairs(
            name,
            parse_dimension(width),
            stair_count.trim().parse().unwrap_or(0),
        )
    }

    /// Whether this room carries usable dimensions for layout.
    ///
    /// Regular rooms need positive finite length and width. Staircases need
    /// only a positive finite tread width; their extent comes from the
    /// stair count.
    pub fn is_valid(&self) -> bool {
        if !(self.width.is_finite() && self.width > 0.0) {
            return false;
        }
        self.is_stairs || (self.length.is_finite() && self.length > 0.0)
    }

    /// Floor area in square meters.
    pub fn area(&self) -> f64 {
        self.length * self.width
    }
}

fn parse_dimension(s: &str) -> f64 {
    s.trim().parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_room() {
        assert!(RoomSpec::new("Living Room", 5.0, 4.0).is_valid());
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(!RoomSpec::new("Zero", 0.0, 4.0).is_valid());
        assert!(!RoomSpec::new("Negative", 5.0, -1.0).is_valid());
        assert!(!RoomSpec::new("NaN", f64::NAN, 4.0).is_valid());
        assert!(!RoomSpec::new("Infinite", f64::INFINITY, 4.0).is_valid());
    }

    #[test]
    fn test_stairs_need_only_width() {
        let stairs = RoomSpec {
            name: "Stairs".into(),
            length: 0.0,
            width: 1.0,
            is_stairs: true,
            stair_count: 12,
        };
        assert!(stairs.is_valid());
    }

    #[test]
    fn test_stairs_constructor_derives_length() {
        let stairs = RoomSpec::stairs("Stairs", 1.0, 12);
        assert!((stairs.length - 6.0).abs() < 1e-9);
        assert!(stairs.is_valid());
    }

    #[test]
    fn test_parse_form_text() {
        let room = RoomSpec::parse("Bedroom", " 4.5 ", "3.2");
        assert!(room.is_valid());
        assert!((room.length - 4.5).abs() < 1e-9);

        let bad = RoomSpec::parse("Bedroom", "four", "3.2");
        assert!(!bad.is_valid());
    }

    #[test]
    fn test_parse_stairs_text() {
        let stairs = RoomSpec::parse_stairs("Stairs", "0.9", "13");
        assert!(stairs.is_valid());
        assert_eq!(stairs.stair_count, 13);

        let bad = RoomSpec::parse_stairs("Stairs", "0.9", "many");
        assert_eq!(bad.stair_count, 0);
    }
}
