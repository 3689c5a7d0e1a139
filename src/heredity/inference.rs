//! Exact inference by enumerating every gene and trait assignment

use crate::heredity::error::{HeredityError, Result};
use crate::heredity::pedigree::Pedigree;
use crate::heredity::probabilities::{GeneCopies, ProbabilityTables};
use std::fmt;
use tracing::{debug, info};

/// Gene copies and trait of every person, in pedigree order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    /// Copies carried by each person
    pub genes: Vec<GeneCopies>,
    /// Whether each person shows the trait
    pub traits: Vec<bool>,
}

impl Assignment {
    /// Everyone without the gene and without the trait
    pub fn empty(people: usize) -> Self {
        Self {
            genes: vec![GeneCopies::Zero; people],
            traits: vec![false; people],
        }
    }

    fn gene(&self, index: usize) -> GeneCopies {
        self.genes.get(index).copied().unwrap_or(GeneCopies::Zero)
    }

    fn has_trait(&self, index: usize) -> bool {
        self.traits.get(index).copied().unwrap_or(false)
    }

    /// Advance the gene counts like an odometer, returning `false` after the last combination
    fn next_genes(&mut self) -> bool {
        for copies in &mut self.genes {
            match *copies {
                GeneCopies::Zero => *copies = GeneCopies::One,
                GeneCopies::One => *copies = GeneCopies::Two,
                GeneCopies::Two => {
                    *copies = GeneCopies::Zero;
                    continue;
                }
            }
            return true;
        }
        false
    }

    /// Advance the unobserved traits, returning `false` after the last combination
    fn next_traits(&mut self, observed: &[Option<bool>]) -> bool {
        for (has_trait, evidence) in self.traits.iter_mut().zip(observed) {
            if evidence.is_some() {
                continue;
            }
            if *has_trait {
                *has_trait = false;
            } else {
                *has_trait = true;
                return true;
            }
        }
        false
    }
}

/// Probability that every person has exactly the genes and traits of `assignment`
///
/// People with both parents known inherit one gene from each; everyone else
/// draws from the unconditional gene table.
pub fn joint_probability(
    pedigree: &Pedigree,
    tables: &ProbabilityTables,
    assignment: &Assignment,
) -> f64 {
    (0..pedigree.len())
        .map(|index| {
            let copies = assignment.gene(index);
            let gene_probability = pedigree.parents_of(index).map_or_else(
                || tables.unconditional(copies),
                |(mother, father)| {
                    tables.inheritance(assignment.gene(mother), assignment.gene(father), copies)
                },
            );
            gene_probability * tables.trait_probability(copies, assignment.has_trait(index))
        })
        .product()
}

/// Gene and trait distribution of one person
#[derive(Clone, Debug, PartialEq)]
pub struct PersonProbabilities {
    /// Person the distributions belong to
    pub name: String,
    /// Probability of carrying no copy
    pub zero_copies: f64,
    /// Probability of carrying one copy
    pub one_copy: f64,
    /// Probability of carrying two copies
    pub two_copies: f64,
    /// Probability of showing the trait
    pub trait_present: f64,
    /// Probability of not showing the trait
    pub trait_absent: f64,
}

impl PersonProbabilities {
    /// All-zero distributions for `name`
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            zero_copies: 0.0,
            one_copy: 0.0,
            two_copies: 0.0,
            trait_present: 0.0,
            trait_absent: 0.0,
        }
    }

    /// Probability of carrying `copies`
    pub const fn gene(&self, copies: GeneCopies) -> f64 {
        match copies {
            GeneCopies::Zero => self.zero_copies,
            GeneCopies::One => self.one_copy,
            GeneCopies::Two => self.two_copies,
        }
    }

    /// Probability of the trait being present or absent
    pub const fn trait_probability(&self, has_trait: bool) -> f64 {
        if has_trait {
            self.trait_present
        } else {
            self.trait_absent
        }
    }

    /// Add `probability` to the entries for `copies` and `has_trait`
    pub const fn update(&mut self, copies: GeneCopies, has_trait: bool, probability: f64) {
        match copies {
            GeneCopies::Zero => self.zero_copies += probability,
            GeneCopies::One => self.one_copy += probability,
            GeneCopies::Two => self.two_copies += probability,
        }
        if has_trait {
            self.trait_present += probability;
        } else {
            self.trait_absent += probability;
        }
    }

    /// Rescale both distributions to sum to 1, keeping their proportions
    ///
    /// A distribution that sums to 0 is left unchanged.
    pub const fn normalize(&mut self) {
        let gene_total = self.zero_copies + self.one_copy + self.two_copies;
        if gene_total > 0.0 {
            self.zero_copies /= gene_total;
            self.one_copy /= gene_total;
            self.two_copies /= gene_total;
        }

        let trait_total = self.trait_present + self.trait_absent;
        if trait_total > 0.0 {
            self.trait_present /= trait_total;
            self.trait_absent /= trait_total;
        }
    }
}

impl fmt::Display for PersonProbabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.name)?;
        writeln!(f, "  Gene:")?;
        for copies in GeneCopies::ALL.into_iter().rev() {
            writeln!(f, "    {}: {:.4}", copies.count(), self.gene(copies))?;
        }
        writeln!(f, "  Trait:")?;
        writeln!(f, "    True: {:.4}", self.trait_present)?;
        writeln!(f, "    False: {:.4}", self.trait_absent)
    }
}

/// Gene and trait distributions of every person given the observed traits
///
/// Sums the joint probability of every assignment that agrees with the
/// evidence, then normalizes each person's distributions.
///
/// # Errors
///
/// Returns [`HeredityError::InvalidProbability`] for malformed tables and
/// [`HeredityError::ImpossibleEvidence`] if no assignment has positive probability
pub fn infer(pedigree: &Pedigree, tables: &ProbabilityTables) -> Result<Vec<PersonProbabilities>> {
    tables.validate()?;

    let mut probabilities: Vec<PersonProbabilities> = pedigree
        .people()
        .iter()
        .map(|person| PersonProbabilities::new(&person.name))
        .collect();
    let observed: Vec<Option<bool>> = pedigree
        .people()
        .iter()
        .map(|person| person.has_trait)
        .collect();

    let mut assignment = Assignment::empty(pedigree.len());
    for (has_trait, evidence) in assignment.traits.iter_mut().zip(&observed) {
        *has_trait = evidence.unwrap_or(false);
    }

    let mut evidence_total = 0.0;
    let mut assignments = 0_usize;
    loop {
        loop {
            let probability = joint_probability(pedigree, tables, &assignment);
            for (index, person) in probabilities.iter_mut().enumerate() {
                person.update(
                    assignment.gene(index),
                    assignment.has_trait(index),
                    probability,
                );
            }
            evidence_total += probability;
            assignments += 1;

            if !assignment.next_genes() {
                break;
            }
        }
        if !assignment.next_traits(&observed) {
            break;
        }
    }
    debug!(assignments, evidence_total, "enumerated assignments");

    if evidence_total <= 0.0 {
        return Err(HeredityError::ImpossibleEvidence);
    }

    for person in &mut probabilities {
        person.normalize();
    }
    info!(people = probabilities.len(), "pedigree inference complete");
    Ok(probabilities)
}

/// Render every person's distributions with four decimal places
pub fn format_probabilities(probabilities: &[PersonProbabilities]) -> String {
    probabilities.iter().map(ToString::to_string).collect()
}
