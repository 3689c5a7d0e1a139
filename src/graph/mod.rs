//! Corpus link graph

/// Page set and link structure with the dangling-page rule
pub mod corpus;
/// Bitset of out-links for a single page
pub mod links;

pub use corpus::Corpus;
pub use links::LinkSet;
