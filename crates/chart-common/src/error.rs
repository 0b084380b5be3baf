//! Error types for label and marker placement.

use thiserror::Error;

/// Result type alias using LocatorError.
pub type LocatorResult<T> = Result<T, LocatorError>;

/// Primary error type for locator operations.
///
/// Every variant is fatal for the current rendering run. The only silent
/// outcome in the locators is dropping a candidate outside the bounding box,
/// which is not an error at all.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocatorError {
    // === Configuration Errors ===
    #[error("Cannot change {0} once coordinates have been added")]
    ConfigurationLocked(&'static str),

    #[error("Empty bounding box not allowed: ({x1},{y1}) - ({x2},{y2})")]
    InvalidBoundingBox { x1: i32, y1: i32, x2: i32, y2: i32 },

    #[error("Invalid minimum distance for '{name}': {value}")]
    InvalidDistance { name: &'static str, value: f64 },

    // === Usage Errors ===
    #[error("Cannot add label location before setting the parameter")]
    NoActiveParameter,

    #[error("Cannot activate parameter number {0}, it is reserved for no parameter")]
    InvalidParameter(i32),

    // === Internal Errors ===
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LocatorError {
    /// True for errors raised by configuration setters.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            LocatorError::ConfigurationLocked(_)
                | LocatorError::InvalidBoundingBox { .. }
                | LocatorError::InvalidDistance { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LocatorError::ConfigurationLocked("bounding box");
        assert_eq!(
            err.to_string(),
            "Cannot change bounding box once coordinates have been added"
        );

        let err = LocatorError::InvalidParameter(0);
        assert!(err.to_string().contains("number 0"));
    }

    #[test]
    fn test_is_configuration_error() {
        assert!(LocatorError::ConfigurationLocked("x").is_configuration_error());
        assert!(LocatorError::InvalidBoundingBox {
            x1: 0,
            y1: 0,
            x2: 0,
            y2: 0
        }
        .is_configuration_error());
        assert!(!LocatorError::NoActiveParameter.is_configuration_error());
        assert!(!LocatorError::Internal("oops".into()).is_configuration_error());
    }
}
