//! Error type shared by every fallible entry point.

use thiserror::Error;

/// Errors raised at the configuration boundary.
///
/// Capacity shortfalls are not errors: stops that fit no vehicle are reported
/// in the `unassigned` list of an assignment instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// Fleet, stop set, or algorithm parameters are unusable.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// What was wrong.
        reason: String,
    },

    /// A sequencing or assignment method name was not recognized.
    #[error("unknown {kind} method `{name}`")]
    UnknownMethod {
        /// Method family ("sequencing" or "assignment").
        kind: &'static str,
        /// The rejected name.
        name: String,
    },

    /// A stop index does not exist in the distance matrix.
    #[error("stop index {index} is out of range for {size} stops")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of stops in the matrix.
        size: usize,
    },
}

impl RoutingError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RoutingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = RoutingError::invalid("vehicle 3 has capacity 0");
        assert_eq!(
            err.to_string(),
            "invalid configuration: vehicle 3 has capacity 0"
        );

        let err = RoutingError::UnknownMethod {
            kind: "sequencing",
            name: "three_opt".to_string(),
        };
        assert_eq!(err.to_string(), "unknown sequencing method `three_opt`");

        let err = RoutingError::IndexOutOfRange { index: 7, size: 3 };
        assert_eq!(err.to_string(), "stop index 7 is out of range for 3 stops");
    }
}
