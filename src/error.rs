//! Validation errors for problem instances, text input and generator configs.

use thiserror::Error;

/// Why an instance, a text file or a generator config was rejected.
///
/// Solvers never produce this error: they only accept instances that
/// already passed validation. An infeasible instance is reported as a
/// missing solution, not as an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A numeric value violates a documented lower or upper bound.
    #[error("{name} = {value} is out of range (expected {expected})")]
    OutOfRange {
        /// Name of the offending parameter or cell.
        name: String,
        /// The rejected value.
        value: f64,
        /// Human-readable description of the accepted range.
        expected: String,
    },

    /// A matrix is not square or does not match a paired matrix.
    #[error("shape mismatch in {what}: expected {expected}, found {found}")]
    ShapeMismatch {
        what: String,
        expected: usize,
        found: usize,
    },

    /// Two items share an id.
    #[error("duplicate identifier `{0}`")]
    DuplicateIdentifier(String),

    /// A token could not be read as the expected value.
    #[error("line {line}: malformed token `{token}`")]
    MalformedToken {
        /// 1-based line number (0 when the token did not come from text).
        line: usize,
        token: String,
    },

    /// Fewer lines or fields than the format requires.
    #[error("insufficient data: {0}")]
    InsufficientData(String),
}

impl ValidationError {
    pub(crate) fn out_of_range(
        name: impl Into<String>,
        value: impl Into<f64>,
        expected: impl Into<String>,
    ) -> Self {
        Self::OutOfRange {
            name: name.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    pub(crate) fn shape(what: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::ShapeMismatch {
            what: what.into(),
            expected,
            found,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ValidationError::out_of_range("max_weight", 0u32, ">= 1");
        assert_eq!(
            err.to_string(),
            "max_weight = 0 is out of range (expected >= 1)"
        );

        let err = ValidationError::shape("row 2", 4, 3);
        assert_eq!(
            err.to_string(),
            "shape mismatch in row 2: expected 4, found 3"
        );

        let err = ValidationError::MalformedToken {
            line: 3,
            token: "abc".into(),
        };
        assert_eq!(err.to_string(), "line 3: malformed token `abc`");
    }
}
