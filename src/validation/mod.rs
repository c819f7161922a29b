//! Boundary validation for room input.

mod validate;

pub use validate::{quick_validate, validate_rooms, ValidationResult};
