//! Error types for propositional model checking

use std::fmt;

/// Errors raised while evaluating or model checking sentences
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicError {
    /// A model has no value for a symbol the sentence uses
    UnknownSymbol {
        /// Name of the symbol
        symbol: String,
    },

    /// Enumerating every model over this many symbols is out of reach
    TooManySymbols {
        /// Distinct symbols in knowledge and query
        count: usize,
        /// Largest supported symbol count
        max: usize,
    },
}

impl fmt::Display for LogicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSymbol { symbol } => write!(f, "Symbol '{symbol}' has no value"),
            Self::TooManySymbols { count, max } => {
                write!(f, "Model checking {count} symbols exceeds the limit of {max}")
            }
        }
    }
}

impl std::error::Error for LogicError {}

/// Convenience type alias for logic results
pub type Result<T> = std::result::Result<T, LogicError>;
