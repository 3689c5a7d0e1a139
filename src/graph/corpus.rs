use crate::graph::links::LinkSet;
use crate::io::error::{RankError, Result};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Directed link graph over a fixed set of pages
///
/// Pages are stored in lexicographic order and addressed by their position in
/// that order, so every computation over the corpus visits pages in the same
/// sequence. Links only ever point at pages inside the corpus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Corpus {
    pages: Vec<String>,
    index: HashMap<String, usize>,
    links: Vec<LinkSet>,
}

impl Corpus {
    /// Build a corpus from a mapping of page to linked pages
    ///
    /// Self-links and links to identifiers that are not keys of the mapping
    /// are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::EmptyCorpus`] if the mapping has no pages
    pub fn new(link_map: BTreeMap<String, BTreeSet<String>>) -> Result<Self> {
        if link_map.is_empty() {
            return Err(RankError::EmptyCorpus);
        }

        let pages: Vec<String> = link_map.keys().cloned().collect();
        let index: HashMap<String, usize> = pages
            .iter()
            .enumerate()
            .map(|(i, page)| (page.clone(), i))
            .collect();
        let page_count = pages.len();

        let links = link_map
            .iter()
            .map(|(page, targets)| {
                LinkSet::from_indices(
                    targets
                        .iter()
                        .filter(|target| *target != page)
                        .filter_map(|target| index.get(target).copied()),
                    page_count,
                )
            })
            .collect();

        Ok(Self {
            pages,
            index,
            links,
        })
    }

    /// Number of pages in the corpus
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Page identifiers in lexicographic order
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Identifier of the page at `index`
    pub fn page(&self, index: usize) -> Option<&str> {
        self.pages.get(index).map(String::as_str)
    }

    /// Position of `page` in the corpus ordering
    pub fn index_of(&self, page: &str) -> Option<usize> {
        self.index.get(page).copied()
    }

    /// Position of `page`, failing for identifiers outside the corpus
    ///
    /// # Errors
    ///
    /// Returns [`RankError::UnknownPage`] if the page is not a key of the corpus
    pub fn require_index(&self, page: &str) -> Result<usize> {
        self.index_of(page).ok_or_else(|| RankError::UnknownPage {
            page: page.to_string(),
        })
    }

    /// Stored out-links of the page at `index`
    pub fn links(&self, index: usize) -> Option<&LinkSet> {
        self.links.get(index)
    }

    /// Stored out-links of `page`
    pub fn links_of(&self, page: &str) -> Option<&LinkSet> {
        self.index_of(page).and_then(|index| self.links(index))
    }

    /// Test whether the page at `index` has no out-links
    pub fn is_dangling(&self, index: usize) -> bool {
        self.links(index).is_some_and(LinkSet::is_empty)
    }

    /// Identifiers of every page without out-links
    pub fn dangling_pages(&self) -> Vec<&str> {
        self.pages
            .iter()
            .zip(&self.links)
            .filter(|(_, links)| links.is_empty())
            .map(|(page, _)| page.as_str())
            .collect()
    }

    /// Out-links used for ranking
    ///
    /// A dangling page is treated as linking to every page, itself included.
    pub fn effective_links(&self, index: usize) -> Option<LinkSet> {
        self.links(index).map(|links| {
            if links.is_empty() {
                LinkSet::all(self.page_count())
            } else {
                links.clone()
            }
        })
    }

    /// Size of the effective link set, `N` for dangling pages
    pub fn out_degree(&self, index: usize) -> Option<usize> {
        self.links(index).map(|links| {
            if links.is_empty() {
                self.page_count()
            } else {
                links.count()
            }
        })
    }

    /// Rewrite every dangling page to link to all pages
    ///
    /// Applying this to an already rewritten corpus changes nothing.
    pub fn normalize_dangling(&mut self) {
        for links in self.links.iter_mut().filter(|links| links.is_empty()) {
            links.fill();
        }
    }

    /// Parent pages of every page under the dangling-page rule
    ///
    /// Entry `p` lists, in ascending order, every page `q` whose effective
    /// links include `p`.
    pub fn parents(&self) -> Vec<Vec<usize>> {
        let page_count = self.page_count();
        let mut parents = vec![Vec::new(); page_count];

        for (source, links) in self.links.iter().enumerate() {
            if links.is_empty() {
                for targets in &mut parents {
                    targets.push(source);
                }
            } else {
                for target in links.iter() {
                    if let Some(targets) = parents.get_mut(target) {
                        targets.push(source);
                    }
                }
            }
        }

        parents
    }

    /// Convert back to a mapping of page to linked pages
    pub fn to_link_map(&self) -> BTreeMap<String, BTreeSet<String>> {
        self.pages
            .iter()
            .zip(&self.links)
            .map(|(page, links)| {
                let targets = links
                    .iter()
                    .filter_map(|target| self.page(target).map(str::to_string))
                    .collect();
                (page.clone(), targets)
            })
            .collect()
    }
}
