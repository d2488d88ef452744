//! # Error Types
//!
//! Structured error types for foundation_core. Every failure the engine can
//! produce is attributable to a specific input field or reference-data row,
//! so each variant carries enough context for a caller to present a
//! user-actionable message or fix the problem programmatically.
//!
//! ## Example
//!
//! ```rust
//! use foundation_core::errors::{CalcError, CalcResult};
//!
//! fn validate_slab_area(area_m2: f64) -> CalcResult<()> {
//!     if area_m2 <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "slab_area_m2",
//!             area_m2.to_string(),
//!             "Slab area must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type alias for foundation_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong. Errors are
/// values, never panics: nothing escapes the engine boundary as an exception.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive, out of range, wrong shape)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing or empty
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Reference-data row absent for the given key (soil or load table)
    #[error("Reference not found in {table}: '{key}'")]
    ReferenceNotFound { table: String, key: String },

    /// A derived area or volume came out non-finite or non-positive
    #[error("Geometry error for {quantity}: {reason}")]
    Geometry { quantity: String, reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a ReferenceNotFound error
    pub fn reference_not_found(table: impl Into<String>, key: impl Into<String>) -> Self {
        CalcError::ReferenceNotFound {
            table: table.into(),
            key: key.into(),
        }
    }

    /// Create a Geometry error
    pub fn geometry(quantity: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::Geometry {
            quantity: quantity.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::ReferenceNotFound { .. } => "REFERENCE_NOT_FOUND",
            CalcError::Geometry { .. } => "GEOMETRY_ERROR",
        }
    }
}

/// Aggregate failure returned by the calculation pipeline.
///
/// Validation collects every problem before reporting, so a failure may
/// carry several field-level errors. Success and failure returns are fully
/// separate: a `CalcFailure` never carries a partial result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalcFailure {
    /// Human-readable summary of the failure
    pub message: String,

    /// Field-level errors, in the order they were detected
    pub errors: Vec<CalcError>,
}

impl CalcFailure {
    /// Wrap a single error
    pub fn from_error(error: CalcError) -> Self {
        CalcFailure {
            message: error.to_string(),
            errors: vec![error],
        }
    }

    /// Wrap a collected list of validation errors
    pub fn from_errors(errors: Vec<CalcError>) -> Self {
        let message = match errors.len() {
            1 => errors[0].to_string(),
            n => format!("Input validation failed with {n} errors"),
        };
        CalcFailure { message, errors }
    }
}

impl fmt::Display for CalcFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CalcFailure {}

impl From<CalcError> for CalcFailure {
    fn from(error: CalcError) -> Self {
        CalcFailure::from_error(error)
    }
}

impl From<Vec<CalcError>> for CalcFailure {
    fn from(errors: Vec<CalcError>) -> Self {
        CalcFailure::from_errors(errors)
    }
}
