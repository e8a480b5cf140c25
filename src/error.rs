//! Error types for qdsl.

use crate::ast::Operator;
use thiserror::Error;

/// The main error type for qdsl operations.
#[derive(Debug, Error)]
pub enum QdslError {
    /// An operation was built with the wrong number of operands.
    #[error("Invalid arity for {operator}: expected {expected} operand(s), got {actual}")]
    InvalidArity {
        operator: Operator,
        expected: usize,
        actual: usize,
    },

    /// A collection operator was given an empty collection.
    #[error("Empty collection passed to {operator}")]
    EmptyCollection { operator: Operator },

    /// No template for the operator in the dialect or any of its parents.
    #[error("Operator {operator} is not supported by dialect '{dialect}'")]
    UnsupportedOperator { operator: Operator, dialect: String },

    /// A template pattern could not be parsed.
    #[error("Invalid template '{pattern}': {message}")]
    InvalidTemplate { pattern: String, message: String },

    /// Template placeholders disagree with the operand count.
    /// This is a defect in a dialect table, never a user input problem.
    #[error(
        "Template mismatch for {operator} in dialect '{dialect}': pattern '{pattern}' expects {expected} operand(s), operation has {actual}"
    )]
    TemplateMismatch {
        operator: Operator,
        dialect: String,
        pattern: String,
        expected: usize,
        actual: usize,
    },

    /// A constant has no inline spelling in the dialect (NaN, infinities).
    #[error("Value {value} has no literal form in dialect '{dialect}'")]
    NoLiteral { value: String, dialect: String },

    /// A parameter had no value in the binding map.
    #[error("Parameter '{name}' is not bound")]
    ParamNotBound { name: String },

    /// Unknown dialect name.
    #[error("Unknown dialect: '{0}'")]
    UnknownDialect(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML decode error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QdslError {
    /// Create an invalid template error for the given pattern.
    pub fn template(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidTemplate {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Create an unsupported operator error.
    pub fn unsupported(operator: Operator, dialect: impl Into<String>) -> Self {
        Self::UnsupportedOperator {
            operator,
            dialect: dialect.into(),
        }
    }

    /// Create a parameter-not-bound error.
    pub fn unbound(name: impl Into<String>) -> Self {
        Self::ParamNotBound { name: name.into() }
    }
}

/// Result type alias for qdsl operations.
pub type QdslResult<T> = Result<T, QdslError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QdslError::unsupported(Operator::Xnor, "sql");
        assert_eq!(
            err.to_string(),
            "Operator XNOR is not supported by dialect 'sql'"
        );
    }

    #[test]
    fn test_arity_display() {
        let err = QdslError::InvalidArity {
            operator: Operator::Between,
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "Invalid arity for BETWEEN: expected 3 operand(s), got 2"
        );
    }

    #[test]
    fn test_no_literal_display() {
        let err = QdslError::NoLiteral {
            value: "NaN".into(),
            dialect: "mysql".into(),
        };
        assert_eq!(
            err.to_string(),
            "Value NaN has no literal form in dialect 'mysql'"
        );
    }
}
