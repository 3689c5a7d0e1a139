//! Tests for corpus construction, link filtering and the dangling-page rule

#[cfg(test)]
mod tests {
    use pagerank::{Corpus, RankError};
    use std::collections::{BTreeMap, BTreeSet};

    fn link_map(entries: &[(&str, &[&str])]) -> BTreeMap<String, BTreeSet<String>> {
        entries
            .iter()
            .map(|(page, links)| {
                (
                    (*page).to_string(),
                    links.iter().map(|link| (*link).to_string()).collect(),
                )
            })
            .collect()
    }

    // Tests pages are ordered lexicographically regardless of insertion
    // Verified by storing pages in insertion order
    #[test]
    fn test_pages_sorted() {
        let corpus = Corpus::new(link_map(&[("c", &["a"]), ("a", &["b"]), ("b", &["c"])])).unwrap();

        assert_eq!(corpus.pages(), ["a", "b", "c"]);
        assert_eq!(corpus.index_of("b"), Some(1));
        assert_eq!(corpus.page(2), Some("c"));
        assert_eq!(corpus.page(3), None);
    }

    // Tests self links and links outside the corpus are dropped
    // Verified by removing the self-link filter
    #[test]
    fn test_filters_self_and_external_links() {
        let corpus = Corpus::new(link_map(&[
            ("a", &["a", "b", "https://example.com"]),
            ("b", &["a", "missing"]),
        ]))
        .unwrap();

        let expected = link_map(&[("a", &["b"]), ("b", &["a"])]);
        assert_eq!(corpus.to_link_map(), expected);
        assert_eq!(corpus.links_of("a").map(pagerank::graph::LinkSet::count), Some(1));
    }

    // Tests an empty mapping is rejected
    // Verified by removing the emptiness check
    #[test]
    fn test_empty_corpus_rejected() {
        let result = Corpus::new(BTreeMap::new());

        assert!(matches!(result, Err(RankError::EmptyCorpus)));
    }

    // Tests unknown pages produce a descriptive error
    // Verified by returning index 0 for unknown pages
    #[test]
    fn test_require_index_unknown_page() {
        let corpus = Corpus::new(link_map(&[("a", &[])])).unwrap();

        match corpus.require_index("z") {
            Err(RankError::UnknownPage { page }) => assert_eq!(page, "z"),
            other => unreachable!("Expected UnknownPage, got {other:?}"),
        }
    }

    // Tests a page without links behaves as linking everywhere
    // Verified by returning the stored empty set from effective_links
    #[test]
    fn test_dangling_effective_links() {
        let corpus = Corpus::new(link_map(&[("a", &["b"]), ("b", &[]), ("c", &["a"])])).unwrap();

        assert!(corpus.is_dangling(1));
        assert!(!corpus.is_dangling(0));
        assert_eq!(corpus.dangling_pages(), vec!["b"]);
        assert_eq!(corpus.effective_links(1).map(|l| l.to_vec()), Some(vec![0, 1, 2]));
        assert_eq!(corpus.out_degree(1), Some(3));
        assert_eq!(corpus.out_degree(0), Some(1));
        assert_eq!(corpus.out_degree(9), None);
    }

    // Tests the dangling rewrite fills empty link sets and is idempotent
    // Verified by also filling non-empty link sets
    #[test]
    fn test_normalize_dangling_idempotent() {
        let mut corpus =
            Corpus::new(link_map(&[("a", &["b"]), ("b", &[]), ("c", &["a"])])).unwrap();

        corpus.normalize_dangling();
        let once = corpus.clone();
        corpus.normalize_dangling();

        assert_eq!(corpus, once);
        assert!(corpus.dangling_pages().is_empty());
        assert_eq!(corpus.links(1).map(pagerank::graph::LinkSet::to_vec), Some(vec![0, 1, 2]));
        assert_eq!(corpus.links(0).map(pagerank::graph::LinkSet::to_vec), Some(vec![1]));
    }

    // Tests parent lists include dangling pages as parents of every page
    // Verified by skipping dangling pages when collecting parents
    #[test]
    fn test_parents_with_dangling_page() {
        let corpus =
            Corpus::new(link_map(&[("a", &["b"]), ("b", &[]), ("c", &["a", "b"])])).unwrap();

        let parents = corpus.parents();

        assert_eq!(parents, vec![vec![1, 2], vec![0, 1, 2], vec![1]]);
    }

    // Tests parents are identical before and after the dangling rewrite
    // Verified by ignoring dangling pages in parents
    #[test]
    fn test_parents_unchanged_by_rewrite() {
        let mut corpus = Corpus::new(link_map(&[("a", &[]), ("b", &["a"])])).unwrap();
        let before = corpus.parents();

        corpus.normalize_dangling();

        assert_eq!(corpus.parents(), before);
    }
}
