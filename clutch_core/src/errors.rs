//! # Error Types
//!
//! Structured error types for clutch_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! All failures in this crate are deterministic input-validation failures.
//! Nothing is retried and no partial result accompanies an error.
//!
//! ## Example
//!
//! ```rust
//! use clutch_core::errors::{CalcError, CalcResult};
//!
//! fn validate_pressure(pressure_pa: f64) -> CalcResult<()> {
//!     if pressure_pa <= 0.0 {
//!         return Err(CalcError::invalid_parameter(
//!             "allowable_pressure_pa",
//!             pressure_pa.to_string(),
//!             "Allowable pressure must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_pressure(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for clutch_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Friction face geometry is degenerate (non-positive radius, or
    /// inner radius not strictly inside the outer radius)
    #[error("Invalid geometry for '{field}': {value} - {reason}")]
    InvalidGeometry {
        field: String,
        value: String,
        reason: String,
    },

    /// A non-geometric input is out of range (pressure, friction, surface count)
    #[error("Invalid parameter '{field}': {value} - {reason}")]
    InvalidParameter {
        field: String,
        value: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidGeometry error
    pub fn invalid_geometry(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidGeometry {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidParameter error
    pub fn invalid_parameter(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidParameter {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Name of the offending input field, if the error refers to one
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidGeometry { field, .. }
            | CalcError::InvalidParameter { field, .. } => Some(field),
            CalcError::SerializationError { .. } => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::InvalidParameter { .. } => "INVALID_PARAMETER",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_geometry(
            "inner_radius_m",
            "0.12",
            "Inner radius must be less than outer radius",
        );
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidGeometry\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_geometry("a", "b", "c").error_code(), "INVALID_GEOMETRY");
        assert_eq!(CalcError::invalid_parameter("a", "b", "c").error_code(), "INVALID_PARAMETER");
        assert_eq!(CalcError::serialization("bad").error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_error_field() {
        let error = CalcError::invalid_parameter("surface_count", "0", "No friction surfaces");
        assert_eq!(error.field(), Some("surface_count"));
        assert_eq!(CalcError::serialization("bad").field(), None);
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<f64>("not a number").unwrap_err();
        let calc: CalcError = err.into();
        assert_eq!(calc.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_display_message() {
        let error =
            CalcError::invalid_geometry("outer_radius_m", "0", "Outer radius must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid geometry for 'outer_radius_m': 0 - Outer radius must be positive"
        );
    }
}
