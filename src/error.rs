//! Error types for the Construction Cost Estimating Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Data-quality issues (unresolvable analysis references, absent numeric
//! fields) never surface here: they coerce to zero inside the calculation
//! functions. Errors are reserved for configuration problems, rejected
//! quantity formulas, and out-of-range reorder requests.

use thiserror::Error;

/// The main error type for the Construction Cost Estimating Engine.
///
/// # Example
///
/// ```
/// use estimate_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A quantity formula contained tokens outside the allowed arithmetic
    /// subset or was structurally malformed.
    #[error("Invalid quantity formula '{expression}': {message}")]
    FormulaSyntax {
        /// The rejected formula text.
        expression: String,
        /// A description of what made the formula invalid.
        message: String,
    },

    /// A quantity formula parsed but could not be evaluated (division by
    /// zero, numeric overflow).
    #[error("Failed to evaluate quantity formula '{expression}': {message}")]
    FormulaEvaluation {
        /// The formula text that failed to evaluate.
        expression: String,
        /// A description of the evaluation failure.
        message: String,
    },

    /// A reorder request referenced an entry index outside the sequence.
    #[error("Cannot reorder from index {from}: sequence has {len} entries")]
    InvalidReorder {
        /// The out-of-range source index.
        from: usize,
        /// The length of the entry sequence.
        len: usize,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
