//! PageRank estimators over a [`Corpus`]

use crate::graph::Corpus;
use crate::io::configuration::{
    CONVERGENCE_THRESHOLD, DEFAULT_DAMPING, DEFAULT_SAMPLES, DEFAULT_SEED, MAX_ITERATIONS,
};
use crate::io::error::{Result, invalid_parameter};

/// Page to rank mapping produced by the estimators
pub mod distribution;
/// Deterministic fixed-point estimator
pub mod iteration;
/// Random-walk estimator
pub mod sampling;
/// Next-page probability distributions
pub mod transition;

pub use distribution::RankDistribution;

/// Parameters shared by both estimators
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankConfig {
    /// Probability of following a link rather than jumping to a random page
    pub damping: f64,
    /// Number of pages visited by the random walk
    pub samples: usize,
    /// Per-page change below which iteration stops
    pub threshold: f64,
    /// Iteration bound for the fixed-point estimator
    pub max_iterations: usize,
    /// Seed for the random walk
    pub seed: u64,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
            threshold: CONVERGENCE_THRESHOLD,
            max_iterations: MAX_ITERATIONS,
            seed: DEFAULT_SEED,
        }
    }
}

impl RankConfig {
    /// Check every parameter before any estimator runs
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error naming the first bad field
    pub fn validate(&self) -> Result<()> {
        transition::validate_damping(self.damping)?;

        if self.samples == 0 {
            return Err(invalid_parameter(
                "samples",
                &self.samples,
                &"at least one sample is required",
            ));
        }
        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            return Err(invalid_parameter(
                "threshold",
                &self.threshold,
                &"must be a positive finite number",
            ));
        }
        if self.max_iterations == 0 {
            return Err(invalid_parameter(
                "max_iterations",
                &self.max_iterations,
                &"at least one iteration is required",
            ));
        }

        Ok(())
    }

    /// Run the sampling estimator with these parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn sample(&self, corpus: &Corpus) -> Result<RankDistribution> {
        self.validate()?;
        sampling::sample_pagerank(corpus, self.damping, self.samples, self.seed)
    }

    /// Run the iterative estimator with these parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or iteration does not converge
    pub fn iterate(&self, corpus: &Corpus) -> Result<RankDistribution> {
        self.validate()?;
        iteration::iterate_pagerank(corpus, self.damping, self.threshold, self.max_iterations)
    }
}
