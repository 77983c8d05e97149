//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and provide
//! clear error messages with context.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error enum for the MCP core.
///
/// Settings construction is the only fallible operation in this crate;
/// curated-registry lookups are total over all string inputs and never fail.
#[derive(Error, Debug)]
pub enum Error {
    /// A supplied configuration value cannot be coerced to its field's type.
    #[error("validation error: field `{field}` expects {expected}, got `{value}`")]
    Validation {
        /// Settings field that rejected the value.
        field: &'static str,
        /// Shape the field accepts.
        expected: &'static str,
        /// Offending raw value, rendered for diagnostics.
        value: String,
    },
}

// Convenience constructors
impl Error {
    pub fn validation(
        field: &'static str,
        expected: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::Validation {
            field,
            expected,
            value: value.into(),
        }
    }

    /// Settings field a validation failure is attributed to.
    pub fn field(&self) -> &'static str {
        match self {
            Error::Validation { field, .. } => field,
        }
    }
}
