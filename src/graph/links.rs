use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset holding the out-links of one page
///
/// Bit `i` is set when the page links to the page with index `i` in the
/// corpus ordering. Provides O(1) membership testing and ascending iteration.
#[derive(Clone, PartialEq, Eq)]
pub struct LinkSet {
    bits: BitVec,
}

impl LinkSet {
    /// Create a link set with no links
    pub fn new(page_count: usize) -> Self {
        Self {
            bits: bitvec![0; page_count],
        }
    }

    /// Create a link set pointing at every page
    pub fn all(page_count: usize) -> Self {
        Self {
            bits: bitvec![1; page_count],
        }
    }

    /// Build a link set from page indices, ignoring indices out of range
    pub fn from_indices(indices: impl IntoIterator<Item = usize>, page_count: usize) -> Self {
        let mut set = Self::new(page_count);
        for index in indices {
            set.insert(index);
        }
        set
    }

    /// Insert a page index
    pub fn insert(&mut self, page: usize) {
        if page < self.bits.len() {
            self.bits.set(page, true);
        }
    }

    /// Test page membership
    pub fn contains(&self, page: usize) -> bool {
        self.bits.get(page).as_deref() == Some(&true)
    }

    /// Point at every page
    pub fn fill(&mut self) {
        self.bits.fill(true);
    }

    /// Test if no links are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count links in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Number of pages this set can address
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Iterate linked page indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all linked page indices as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl fmt::Debug for LinkSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
