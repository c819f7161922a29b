//! Error types for the layout engine.

use thiserror::Error;

/// Main error type for layout computation.
///
/// Per-room problems (unparseable or non-positive dimensions) are not
/// errors: those rooms are filtered out before layout. Only inputs the
/// engine has no sensible output for are rejected.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Roll width must be positive, got {value}")]
    InvalidRollWidth { value: f64 },

    #[error("Validation failed: {message}")]
    Validation { message: String },
}

/// Result type alias for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LayoutError::InvalidRollWidth { value: -1.0 };
        assert_eq!(err.to_string(), "Roll width must be positive, got -1");

        let err = LayoutError::Validation {
            message: "stairs too wide".into(),
        };
        assert_eq!(err.to_string(), "Validation failed: stairs too wide");
    }
}
