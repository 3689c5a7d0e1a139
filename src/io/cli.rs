//! Command-line interface for ranking a corpus of HTML pages

use crate::graph::Corpus;
use crate::io::configuration::{
    CONVERGENCE_THRESHOLD, DEFAULT_DAMPING, DEFAULT_SAMPLES, DEFAULT_SEED, MAX_ITERATIONS,
};
use crate::io::crawl::crawl;
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::io::report::{ITERATION_TITLE, format_ranks, sampling_title};
use crate::rank::sampling::sample_pagerank_with_progress;
use crate::rank::{RankConfig, RankDistribution};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

#[derive(Parser)]
#[command(name = "pagerank")]
#[command(
    author,
    version,
    about = "Rank HTML pages by random-walk sampling and by iteration"
)]
/// Command-line arguments for the ranking tool
pub struct Cli {
    /// Directory of HTML pages to rank
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Probability of following a link instead of jumping to a random page
    #[arg(short, long, default_value_t = DEFAULT_DAMPING)]
    pub damping: f64,

    /// Number of pages visited by the random walk
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLES)]
    pub samples: usize,

    /// Random seed for reproducible sampling
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Estimator parameters assembled from the arguments
    pub const fn rank_config(&self) -> RankConfig {
        RankConfig {
            damping: self.damping,
            samples: self.samples,
            threshold: CONVERGENCE_THRESHOLD,
            max_iterations: MAX_ITERATIONS,
            seed: self.seed,
        }
    }
}

/// Runs both estimators over the crawled corpus and renders the report
pub struct RankProcessor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl RankProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Crawl the corpus, run both estimators and return the two rank tables
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid, the corpus cannot be
    /// loaded, or the iterative estimator fails to converge
    pub fn process(&mut self) -> Result<String> {
        let config = self.cli.rank_config();
        config.validate()?;

        let corpus = crawl(&self.cli.corpus)?;

        let start_time = Instant::now();
        let sampled = self.run_sampling(&corpus, &config)?;
        info!(elapsed = ?start_time.elapsed(), "sampling finished");

        let start_time = Instant::now();
        let iterated = config.iterate(&corpus)?;
        info!(elapsed = ?start_time.elapsed(), "iteration finished");

        let mut report = format_ranks(&sampling_title(config.samples), &sampled);
        report.push_str(&format_ranks(ITERATION_TITLE, &iterated));
        Ok(report)
    }

    fn run_sampling(&mut self, corpus: &Corpus, config: &RankConfig) -> Result<RankDistribution> {
        self.progress_manager.start_phase("Sampling", config.samples);
        let progress = &self.progress_manager;
        let ranks = sample_pagerank_with_progress(
            corpus,
            config.damping,
            config.samples,
            config.seed,
            |completed| progress.update(completed),
        );
        self.progress_manager.finish_phase();

        ranks
    }
}
