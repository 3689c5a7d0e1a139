//! Exact gene and trait inference over a family pedigree
//!
//! Each person carries zero, one or two copies of a gene and may show a
//! trait. Given the traits observed for some people, every consistent
//! assignment is enumerated to obtain each person's exact distributions.

/// Pedigree loading and inference errors
pub mod error;
/// Joint probability, enumeration and normalization
pub mod inference;
/// People and their parents
pub mod pedigree;
/// Inheritance model tables
pub mod probabilities;

pub use error::HeredityError;
pub use inference::{PersonProbabilities, infer};
pub use pedigree::{Pedigree, Person};
pub use probabilities::{GeneCopies, ProbabilityTables};

/// Largest pedigree accepted; enumeration visits 6^n assignments
pub const MAX_PEOPLE: usize = 10;
