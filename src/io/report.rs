//! Plain-text rank tables

use crate::io::configuration::RANK_PRECISION;
use crate::rank::RankDistribution;

/// Heading of the iterative estimator's table
pub const ITERATION_TITLE: &str = "PageRank Results from Iteration";

/// Heading of the sampling estimator's table for `samples` walk steps
pub fn sampling_title(samples: usize) -> String {
    format!("PageRank Results from Sampling (n = {samples})")
}

/// Render `title` followed by one line per page in lexicographic order
pub fn format_ranks(title: &str, ranks: &RankDistribution) -> String {
    let mut table = String::new();
    table.push_str(title);
    table.push('\n');
    for (page, rank) in ranks.iter() {
        table.push_str(&format!(
            "  {page}: {rank:.precision$}\n",
            precision = RANK_PRECISION
        ));
    }
    table
}
