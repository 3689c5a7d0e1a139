use crate::graph::Corpus;
use crate::io::error::{RankError, Result, computation_error, invalid_parameter};
use crate::rank::distribution::RankDistribution;
use crate::rank::transition::validate_damping;
use ndarray::Array1;
use tracing::{debug, info, warn};

/// Fixed-point solver for the PageRank recurrence
///
/// `rank(p) = (1 - d) / N + d * sum(rank(q) / L(q))` over the parents `q` of
/// `p`. Every step computes the whole new vector from the previous one before
/// replacing it.
#[derive(Clone, Debug)]
pub struct PowerIteration {
    pages: Vec<String>,
    parents: Vec<Vec<usize>>,
    out_degrees: Array1<f64>,
    ranks: Array1<f64>,
    damping: f64,
    iterations: usize,
}

impl PowerIteration {
    /// Set up the solver with every page at rank `1 / N`
    ///
    /// Dangling pages are rewritten to link to every page on a private copy
    /// of the corpus; the caller's corpus is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error for a bad damping factor
    pub fn new(corpus: &Corpus, damping: f64) -> Result<Self> {
        validate_damping(damping)?;

        let dangling = corpus.dangling_pages();
        if !dangling.is_empty() {
            warn!(
                count = dangling.len(),
                "dangling pages treated as linking to every page"
            );
        }

        let mut normalized = corpus.clone();
        normalized.normalize_dangling();

        let page_count = normalized.page_count();
        let out_degrees = (0..page_count)
            .map(|index| normalized.out_degree(index).unwrap_or(page_count) as f64)
            .collect::<Array1<f64>>();

        Ok(Self {
            pages: normalized.pages().to_vec(),
            parents: normalized.parents(),
            out_degrees,
            ranks: Array1::from_elem(page_count, 1.0 / page_count as f64),
            damping,
            iterations: 0,
        })
    }

    /// Apply one synchronous update and return the largest per-page change
    pub fn step(&mut self) -> f64 {
        let page_count = self.pages.len() as f64;
        let teleport = (1.0 - self.damping) / page_count;

        let next: Array1<f64> = self
            .parents
            .iter()
            .map(|parents| {
                let inflow: f64 = parents
                    .iter()
                    .map(|&parent| {
                        let rank = self.ranks.get(parent).copied().unwrap_or(0.0);
                        let degree = self.out_degrees.get(parent).copied().unwrap_or(1.0);
                        rank / degree
                    })
                    .sum();
                self.damping.mul_add(inflow, teleport)
            })
            .collect();

        let max_delta = self
            .ranks
            .iter()
            .zip(next.iter())
            .map(|(old, new)| (new - old).abs())
            .fold(0.0, f64::max);

        self.ranks = next;
        self.iterations += 1;
        max_delta
    }

    /// Step until every per-page change falls below `threshold`
    ///
    /// The change is measured after each new vector is computed, so the
    /// returned vector is the one whose step satisfied the threshold.
    /// Returns the total number of steps taken.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::NoConvergence`] when `max_iterations` steps do not
    /// suffice, or a computation error if a rank becomes non-finite
    pub fn converge(&mut self, threshold: f64, max_iterations: usize) -> Result<usize> {
        if !(threshold.is_finite() && threshold > 0.0) {
            return Err(invalid_parameter(
                "threshold",
                &threshold,
                &"must be a positive finite number",
            ));
        }

        let mut max_delta = f64::INFINITY;
        for _ in 0..max_iterations {
            max_delta = self.step();
            debug!(iteration = self.iterations, max_delta, "pagerank iteration");

            if !max_delta.is_finite() || self.ranks.iter().any(|rank| !rank.is_finite()) {
                return Err(computation_error(
                    "iterate pagerank",
                    &format!("non-finite rank after iteration {}", self.iterations),
                ));
            }

            if max_delta < threshold {
                info!(iterations = self.iterations, max_delta, "iteration converged");
                return Ok(self.iterations);
            }
        }

        Err(RankError::NoConvergence {
            iterations: self.iterations,
            max_delta,
            threshold,
        })
    }

    /// Number of steps applied so far
    pub const fn iterations(&self) -> usize {
        self.iterations
    }

    /// Current rank vector in corpus page order
    pub const fn rank_vector(&self) -> &Array1<f64> {
        &self.ranks
    }

    /// Current ranks keyed by page
    pub fn ranks(&self) -> RankDistribution {
        RankDistribution::from_pages(&self.pages, self.ranks.iter().copied())
    }
}

/// Compute PageRank as the fixed point of the recurrence
///
/// # Errors
///
/// Returns an error if `damping` or `threshold` is invalid, or the iteration
/// fails to converge within `max_iterations` steps
pub fn iterate_pagerank(
    corpus: &Corpus,
    damping: f64,
    threshold: f64,
    max_iterations: usize,
) -> Result<RankDistribution> {
    let mut solver = PowerIteration::new(corpus, damping)?;
    solver.converge(threshold, max_iterations)?;
    Ok(solver.ranks())
}
