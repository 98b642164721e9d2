//! Error types for optimization operations.

use std::fmt;

/// Result type for optimization operations.
pub type OptimizeResult<T> = Result<T, OptimizeError>;

/// Errors that can occur during optimization.
#[derive(Debug, Clone)]
pub enum OptimizeError {
    /// A configuration value cannot drive the optimizer (e.g. an empty swarm).
    InvalidConfiguration { parameter: String, message: String },

    /// Invalid starting point (empty, or containing non-finite entries).
    InvalidInput { context: String },

    /// A tensor operation failed part-way through an update.
    NumericalError { message: String },

    /// Error from underlying numr operation.
    NumrError(String),
}

impl OptimizeError {
    pub(crate) fn configuration(parameter: &str, message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            parameter: parameter.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for OptimizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { parameter, message } => {
                write!(f, "Invalid configuration '{}': {}", parameter, message)
            }
            Self::InvalidInput { context } => {
                write!(f, "Invalid input in {}", context)
            }
            Self::NumericalError { message } => {
                write!(f, "Numerical error: {}", message)
            }
            Self::NumrError(msg) => {
                write!(f, "numr error: {}", msg)
            }
        }
    }
}

impl std::error::Error for OptimizeError {}

impl From<numr::error::Error> for OptimizeError {
    fn from(err: numr::error::Error) -> Self {
        Self::NumrError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_configuration() {
        let err = OptimizeError::configuration("population_size", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid configuration 'population_size': must be at least 1"
        );
    }

    #[test]
    fn test_display_input() {
        let err = OptimizeError::InvalidInput {
            context: "particle_swarm: empty starting point".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid input in particle_swarm: empty starting point"
        );
    }
}
