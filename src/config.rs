//! Configuration constants and settings for the layout engine.

use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Default manufactured roll width in meters (12 ft broadloom).
pub const DEFAULT_ROLL_WIDTH: f64 = 3.66;

/// Cutting margin added to each non-stair piece's length, in meters (200mm).
pub const CUTTING_MARGIN: f64 = 0.2;

/// Depth of a single stair piece (riser + tread), in meters (500mm).
pub const STAIR_DEPTH: f64 = 0.5;

/// Length tolerance when ordering pieces for packing. Pieces whose
/// margin-adjusted lengths differ by less than this are ordered by width.
pub const SORT_LENGTH_TOL: f64 = 0.01;

/// Y tolerance when grouping placed pieces back into shelves for reporting.
pub const SHELF_GROUP_TOL: f64 = 0.01;

/// Roll configuration for a layout computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollConfig {
    /// Manufactured roll width in meters.
    pub roll_width: f64,
    /// Cutting margin added to non-stair pieces, in meters.
    pub cutting_margin: f64,
    /// Depth of one stair piece, in meters.
    pub stair_depth: f64,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            roll_width: DEFAULT_ROLL_WIDTH,
            cutting_margin: CUTTING_MARGIN,
            stair_depth: STAIR_DEPTH,
        }
    }
}

impl RollConfig {
    /// Create a configuration for the given roll width.
    pub fn new(roll_width: f64) -> Self {
        Self {
            roll_width,
            ..Default::default()
        }
    }

    /// Number of roll strips needed to cover a span of the given width.
    pub fn strips_needed(&self, width: f64) -> u32 {
        if width <= 0.0 || self.roll_width <= 0.0 {
            return 0;
        }
        (width / self.roll_width).ceil() as u32
    }

    /// Quick single-room estimate: strips times margin-adjusted length.
    ///
    /// This matches the per-room figure shown next to each room in a quote
    /// form. The full layout engine usually does better by interlocking
    /// pieces across rooms.
    pub fn carpet_required(&self, length: f64, width: f64) -> f64 {
        self.strips_needed(width) as f64 * (length + self.cutting_margin)
    }

    /// Number of shelf rows needed for a staircase of the given tread width.
    pub fn stair_rows(&self, width: f64, stair_count: u32) -> u32 {
        if width <= 0.0 || stair_count == 0 {
            return 0;
        }
        let per_row = (self.roll_width / width).floor() as u32;
        if per_row == 0 {
            return 0;
        }
        stair_count.div_ceil(per_row)
    }

    /// Quick staircase estimate: rows times stair depth. No cutting margin
    /// is applied to stair pieces.
    pub fn stair_broadloom(&self, width: f64, stair_count: u32) -> f64 {
        self.stair_rows(width, stair_count) as f64 * self.stair_depth
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strips_needed() {
        let config = RollConfig::default();
        assert_eq!(config.strips_needed(3.0), 1);
        assert_eq!(config.strips_needed(3.66), 1);
        assert_eq!(config.strips_needed(4.0), 2);
        assert_eq!(config.strips_needed(7.4), 3);
        assert_eq!(config.strips_needed(0.0), 0);
    }

    #[test]
    fn test_carpet_required_single_strip() {
        let config = RollConfig::default();
        let required = config.carpet_required(5.0, 3.0);
        assert!(float_cmp::approx_eq(required, 5.2));
    }

    #[test]
    fn test_carpet_required_multi_strip() {
        let config = RollConfig::default();
        let required = config.carpet_required(5.0, 4.0);
        assert!(float_cmp::approx_eq(required, 10.4));
    }

    #[test]
    fn test_default_roll_config() {
        let config = RollConfig::default();
        assert!(float_cmp::approx_eq(config.roll_width, 3.66));
        assert!(float_cmp::approx_eq(config.cutting_margin, 0.2));
        assert!(float_cmp::approx_eq(config.stair_depth, 0.5));
    }

    #[test]
    fn test_stair_rows() {
        let config = RollConfig::default();
        // floor(3.66 / 1.0) = 3 stairs per row
        assert_eq!(config.stair_rows(1.0, 12), 4);
        assert_eq!(config.stair_rows(1.0, 0), 0);
        // Tread wider than the roll: no row fits.
        assert_eq!(config.stair_rows(4.0, 5), 0);
    }

    #[test]
    fn test_stair_broadloom() {
        let config = RollConfig::default();
        assert!(float_cmp::approx_eq(config.stair_broadloom(1.0, 12), 2.0));
    }

    #[test]
    fn test_approx_helpers() {
        assert!(float_cmp::approx_eq(1.0, 1.0 + EPS / 2.0));
        assert!(!float_cmp::approx_eq(1.0, 1.001));
        assert!(float_cmp::approx_zero(EPS / 2.0));
    }
}
