use std::collections::BTreeMap;

/// Estimated importance of every page, keyed in lexicographic page order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RankDistribution {
    ranks: BTreeMap<String, f64>,
}

impl RankDistribution {
    /// Wrap an existing page to rank mapping
    pub const fn new(ranks: BTreeMap<String, f64>) -> Self {
        Self { ranks }
    }

    /// Pair page identifiers with rank values position by position
    pub fn from_pages<'a>(
        pages: impl IntoIterator<Item = &'a String>,
        values: impl IntoIterator<Item = f64>,
    ) -> Self {
        Self {
            ranks: pages.into_iter().cloned().zip(values).collect(),
        }
    }

    /// Rank of `page`, if present
    pub fn get(&self, page: &str) -> Option<f64> {
        self.ranks.get(page).copied()
    }

    /// Iterate `(page, rank)` pairs in lexicographic page order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.ranks.iter().map(|(page, &rank)| (page.as_str(), rank))
    }

    /// Number of pages with a rank
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Test if no page has a rank
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Sum of all rank values
    pub fn total(&self) -> f64 {
        self.ranks.values().sum()
    }

    /// Largest absolute rank difference between two distributions
    ///
    /// Pages missing from one side count as rank 0 there.
    pub fn max_abs_difference(&self, other: &Self) -> f64 {
        self.ranks
            .keys()
            .chain(other.ranks.keys())
            .map(|page| {
                let left = self.get(page).unwrap_or(0.0);
                let right = other.get(page).unwrap_or(0.0);
                (left - right).abs()
            })
            .fold(0.0, f64::max)
    }

    /// Consume into the underlying mapping
    pub fn into_inner(self) -> BTreeMap<String, f64> {
        self.ranks
    }
}
