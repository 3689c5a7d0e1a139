//! Error types for pedigree loading and inference

use std::fmt;
use std::path::PathBuf;

/// Errors raised while loading a pedigree or computing its distributions
#[derive(Debug)]
pub enum HeredityError {
    /// Pedigree file could not be opened or parsed as CSV
    Csv {
        /// File that was read
        path: PathBuf,
        /// Underlying CSV error
        source: csv::Error,
    },

    /// A row is missing a column or holds an unreadable value
    InvalidRecord {
        /// One-based data row number
        row: usize,
        /// Description of what's wrong with the row
        reason: String,
    },

    /// Two rows share the same name
    DuplicatePerson {
        /// Repeated name
        name: String,
    },

    /// A person names exactly one parent
    IncompleteParents {
        /// Person with a single known parent
        person: String,
    },

    /// A parent name is not a person of the pedigree
    UnknownParent {
        /// Child whose parent is missing
        person: String,
        /// Name that was not found
        parent: String,
    },

    /// Enumeration over this many people is out of reach
    TooManyPeople {
        /// Number of people in the pedigree
        count: usize,
        /// Largest supported pedigree
        max: usize,
    },

    /// A probability table entry is outside [0, 1] or a table does not sum to 1
    InvalidProbability {
        /// Table entry that failed validation
        parameter: &'static str,
        /// Offending value
        value: f64,
    },

    /// Every assignment consistent with the evidence has probability 0
    ImpossibleEvidence,
}

impl fmt::Display for HeredityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv { path, source } => {
                write!(f, "Failed to read pedigree '{}': {source}", path.display())
            }
            Self::InvalidRecord { row, reason } => write!(f, "Invalid row {row}: {reason}"),
            Self::DuplicatePerson { name } => write!(f, "Person '{name}' appears twice"),
            Self::IncompleteParents { person } => {
                write!(f, "Person '{person}' must name both parents or neither")
            }
            Self::UnknownParent { person, parent } => {
                write!(f, "Parent '{parent}' of '{person}' is not in the pedigree")
            }
            Self::TooManyPeople { count, max } => {
                write!(f, "Pedigree of {count} people exceeds the limit of {max}")
            }
            Self::InvalidProbability { parameter, value } => {
                write!(f, "Invalid probability '{parameter}' = {value}")
            }
            Self::ImpossibleEvidence => {
                write!(f, "No gene assignment is consistent with the observed traits")
            }
        }
    }
}

impl std::error::Error for HeredityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Csv { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for heredity results
pub type Result<T> = std::result::Result<T, HeredityError>;
