//! Error types for corpus loading and rank estimation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all ranking operations
#[derive(Debug)]
pub enum RankError {
    /// Corpus contains no pages, so no distribution can be formed
    EmptyCorpus,

    /// Page identifier is not a key of the corpus
    UnknownPage {
        /// The identifier that was looked up
        page: String,
    },

    /// Estimator parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Corpus source exists but holds nothing that can be ranked
    InvalidCorpus {
        /// Directory that was crawled
        path: PathBuf,
        /// Description of what's wrong with the source
        reason: String,
    },

    /// Iterative estimator exceeded its iteration bound
    NoConvergence {
        /// Number of iterations performed
        iterations: usize,
        /// Largest per-page change in the last iteration
        max_delta: f64,
        /// Threshold that every per-page change had to fall below
        threshold: f64,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for RankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCorpus => write!(f, "Corpus contains no pages"),
            Self::UnknownPage { page } => write!(f, "Page '{page}' is not part of the corpus"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidCorpus { path, reason } => {
                write!(f, "Invalid corpus '{}': {reason}", path.display())
            }
            Self::NoConvergence {
                iterations,
                max_delta,
                threshold,
            } => {
                write!(
                    f,
                    "No convergence after {iterations} iterations (max change {max_delta:e}, threshold {threshold:e})"
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for RankError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for ranking results
pub type Result<T> = std::result::Result<T, RankError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> RankError {
    RankError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> RankError {
    RankError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a file system error that remembers the path involved
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> RankError {
    RankError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
