//! Gene, trait and mutation probability tables

use crate::heredity::error::{HeredityError, Result};

/// Copies of the gene a person carries
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GeneCopies {
    /// No copy of the gene
    Zero,
    /// One copy of the gene
    One,
    /// Two copies of the gene
    Two,
}

impl GeneCopies {
    /// Every copy count, ascending
    pub const ALL: [Self; 3] = [Self::Zero, Self::One, Self::Two];

    /// Number of copies as an integer
    pub const fn count(self) -> usize {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

/// Probability tables of the inheritance model
///
/// Replaces module-level constants so that alternative tables can be passed
/// to [`crate::heredity::inference::infer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProbabilityTables {
    /// Unconditional probability of each copy count for a person without known parents,
    /// indexed by [`GeneCopies::count`]
    pub gene: [f64; 3],
    /// Probability of showing the trait given each copy count
    pub trait_given_gene: [f64; 3],
    /// Probability that a passed-on gene flips
    pub mutation: f64,
}

impl Default for ProbabilityTables {
    fn default() -> Self {
        Self {
            gene: [0.96, 0.03, 0.01],
            trait_given_gene: [0.01, 0.56, 0.65],
            mutation: 0.01,
        }
    }
}

fn check_probability(parameter: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(HeredityError::InvalidProbability { parameter, value })
    }
}

impl ProbabilityTables {
    /// Check every entry is a probability and the gene table sums to 1
    ///
    /// # Errors
    ///
    /// Returns [`HeredityError::InvalidProbability`] naming the first bad entry
    pub fn validate(&self) -> Result<()> {
        for &value in &self.gene {
            check_probability("gene", value)?;
        }
        for &value in &self.trait_given_gene {
            check_probability("trait", value)?;
        }
        check_probability("mutation", self.mutation)?;

        let total: f64 = self.gene.iter().sum();
        if (total - 1.0).abs() > 1e-9 {
            return Err(HeredityError::InvalidProbability {
                parameter: "gene total",
                value: total,
            });
        }
        Ok(())
    }

    /// Probability of `copies` for a person without known parents
    pub fn unconditional(&self, copies: GeneCopies) -> f64 {
        self.gene.get(copies.count()).copied().unwrap_or_default()
    }

    /// Probability of the trait being present (`true`) or absent given `copies`
    pub fn trait_probability(&self, copies: GeneCopies, has_trait: bool) -> f64 {
        let present = self
            .trait_given_gene
            .get(copies.count())
            .copied()
            .unwrap_or_default();
        if has_trait { present } else { 1.0 - present }
    }

    /// Probability that a parent carrying `copies` passes the gene to a child
    pub const fn passing(&self, copies: GeneCopies) -> f64 {
        match copies {
            GeneCopies::Zero => self.mutation,
            GeneCopies::One => 0.5,
            GeneCopies::Two => 1.0 - self.mutation,
        }
    }

    /// Probability of a child carrying `child` copies given both parents' copies
    ///
    /// Each parent passes one gene independently.
    pub fn inheritance(&self, mother: GeneCopies, father: GeneCopies, child: GeneCopies) -> f64 {
        let from_mother = self.passing(mother);
        let from_father = self.passing(father);

        match child {
            GeneCopies::Zero => (1.0 - from_mother) * (1.0 - from_father),
            GeneCopies::One => {
                from_mother.mul_add(1.0 - from_father, (1.0 - from_mother) * from_father)
            }
            GeneCopies::Two => from_mother * from_father,
        }
    }
}
