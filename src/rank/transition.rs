use crate::graph::Corpus;
use crate::io::error::{Result, invalid_parameter};
use ndarray::{Array1, Array2, ArrayView1};
use std::collections::BTreeMap;

/// Reject damping factors outside the open interval (0, 1)
///
/// # Errors
///
/// Returns an invalid parameter error for values outside (0, 1) or non-finite values
pub fn validate_damping(damping: f64) -> Result<()> {
    if damping.is_finite() && damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(invalid_parameter(
            "damping",
            &damping,
            &"must lie strictly between 0 and 1",
        ))
    }
}

/// Probability of moving from the page at `index` to every page, in corpus order
///
/// With probability `damping` one of the page's effective links is followed,
/// otherwise any page of the corpus is chosen uniformly.
///
/// # Errors
///
/// Returns an error if `damping` is invalid or `index` is outside the corpus
pub fn transition_row(corpus: &Corpus, index: usize, damping: f64) -> Result<Array1<f64>> {
    validate_damping(damping)?;

    let page_count = corpus.page_count();
    let links = corpus
        .effective_links(index)
        .ok_or_else(|| invalid_parameter("index", &index, &"page index outside the corpus"))?;

    let link_probability = damping / links.count() as f64;
    let jump_probability = (1.0 - damping) / page_count as f64;

    let mut row = Array1::from_elem(page_count, jump_probability);
    for target in links.iter() {
        if let Some(value) = row.get_mut(target) {
            *value += link_probability;
        }
    }

    Ok(row)
}

/// Probability distribution over which page to visit after `page`
///
/// # Errors
///
/// Returns [`crate::RankError::UnknownPage`] if `page` is not in the corpus,
/// or an invalid parameter error for a bad damping factor
pub fn transition_model(
    corpus: &Corpus,
    page: &str,
    damping: f64,
) -> Result<BTreeMap<String, f64>> {
    let index = corpus.require_index(page)?;
    let row = transition_row(corpus, index, damping)?;

    Ok(corpus.pages().iter().cloned().zip(row.iter().copied()).collect())
}

/// Transition rows of every page, computed once
///
/// Row `i` holds the distribution over next pages when the walk is at page `i`.
#[derive(Clone, Debug)]
pub struct TransitionMatrix {
    probabilities: Array2<f64>,
}

impl TransitionMatrix {
    /// Compute the transition row of every page in the corpus
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error for a bad damping factor
    pub fn build(corpus: &Corpus, damping: f64) -> Result<Self> {
        let page_count = corpus.page_count();
        let mut probabilities = Array2::<f64>::zeros((page_count, page_count));

        for (index, mut target_row) in probabilities.rows_mut().into_iter().enumerate() {
            target_row.assign(&transition_row(corpus, index, damping)?);
        }

        Ok(Self { probabilities })
    }

    /// Number of pages covered by the matrix
    pub fn page_count(&self) -> usize {
        self.probabilities.nrows()
    }

    /// Next-page distribution for the page at `index`
    pub fn row(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.page_count()).then(|| self.probabilities.row(index))
    }

    /// Full matrix view
    pub fn probabilities(&self) -> &Array2<f64> {
        &self.probabilities
    }
}
