use crate::graph::Corpus;
use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::rank::distribution::RankDistribution;
use crate::rank::transition::TransitionMatrix;
use ndarray::ArrayView1;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info};

/// Seeded random selector for reproducible stochastic choices
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform choice of an index in `0..count`
    ///
    /// Returns 0 when `count` is 0.
    pub fn uniform_index(&mut self, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        self.rng.random_range(0..count)
    }

    /// Weighted random selection
    ///
    /// Returns index into weights array using cumulative distribution
    pub fn weighted_choice(&mut self, weights: ArrayView1<'_, f64>) -> usize {
        let total: f64 = weights.sum();
        if total <= 0.0 || weights.is_empty() {
            return 0;
        }

        let mut rand_val = self.rng.random::<f64>() * total;
        for (i, &weight) in weights.iter().enumerate() {
            rand_val -= weight;
            if rand_val <= 0.0 {
                return i;
            }
        }
        weights.len() - 1
    }
}

/// Random surfer over the corpus that tallies the pages it visits
///
/// The first page is drawn uniformly; each later page is drawn from the
/// transition distribution of the page before it.
pub struct RandomWalk {
    pages: Vec<String>,
    transitions: TransitionMatrix,
    selector: RandomSelector,
    visits: Vec<usize>,
    current: Option<usize>,
    samples_taken: usize,
}

impl RandomWalk {
    /// Prepare a walk over `corpus` without taking any step
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error for a bad damping factor
    pub fn new(corpus: &Corpus, damping: f64, seed: u64) -> Result<Self> {
        let transitions = TransitionMatrix::build(corpus, damping)?;

        Ok(Self {
            pages: corpus.pages().to_vec(),
            transitions,
            selector: RandomSelector::new(seed),
            visits: vec![0; corpus.page_count()],
            current: None,
            samples_taken: 0,
        })
    }

    /// Visit the next page and return its index
    ///
    /// # Errors
    ///
    /// Returns a computation error if the walk reaches a page without a transition row
    pub fn step(&mut self) -> Result<usize> {
        let next = match self.current {
            None => self.selector.uniform_index(self.pages.len()),
            Some(current) => {
                let row = self.transitions.row(current).ok_or_else(|| {
                    computation_error(
                        "random walk",
                        &format!("no transition row for page {current}"),
                    )
                })?;
                self.selector.weighted_choice(row)
            }
        };

        let count = self.visits.get_mut(next).ok_or_else(|| {
            computation_error(
                "random walk",
                &format!("sampled page {next} outside the corpus"),
            )
        })?;
        *count += 1;

        self.current = Some(next);
        self.samples_taken += 1;
        Ok(next)
    }

    /// Identifier of the page the walk is currently on
    pub fn current(&self) -> Option<&str> {
        self.current
            .and_then(|index| self.pages.get(index))
            .map(String::as_str)
    }

    /// Number of pages visited so far
    pub const fn samples_taken(&self) -> usize {
        self.samples_taken
    }

    /// Visit frequency of every page, unvisited pages included with rank 0
    ///
    /// # Errors
    ///
    /// Returns a computation error if no step has been taken yet
    pub fn ranks(&self) -> Result<RankDistribution> {
        if self.samples_taken == 0 {
            return Err(computation_error("random walk", &"no samples have been taken"));
        }

        let samples = self.samples_taken as f64;
        Ok(RankDistribution::from_pages(
            &self.pages,
            self.visits.iter().map(|&count| count as f64 / samples),
        ))
    }
}

/// Estimate PageRank by the visit frequencies of a random walk of `samples` pages
///
/// # Errors
///
/// Returns an error if `samples` is 0 or `damping` lies outside (0, 1)
pub fn sample_pagerank(
    corpus: &Corpus,
    damping: f64,
    samples: usize,
    seed: u64,
) -> Result<RankDistribution> {
    sample_pagerank_with_progress(corpus, damping, samples, seed, |_| {})
}

/// Same as [`sample_pagerank`], calling `on_sample` with the number of samples taken
/// after every step
///
/// # Errors
///
/// Returns an error if `samples` is 0 or `damping` lies outside (0, 1)
pub fn sample_pagerank_with_progress(
    corpus: &Corpus,
    damping: f64,
    samples: usize,
    seed: u64,
    mut on_sample: impl FnMut(usize),
) -> Result<RankDistribution> {
    if samples == 0 {
        return Err(invalid_parameter(
            "samples",
            &samples,
            &"at least one sample is required",
        ));
    }

    let mut walk = RandomWalk::new(corpus, damping, seed)?;
    for _ in 0..samples {
        walk.step()?;
        on_sample(walk.samples_taken());
    }

    let ranks = walk.ranks()?;
    let unvisited = ranks.iter().filter(|(_, rank)| *rank <= 0.0).count();
    if unvisited > 0 {
        debug!(unvisited, "pages never reached by the random walk");
    }
    info!(samples, pages = corpus.page_count(), "sampling estimate complete");

    Ok(ranks)
}
