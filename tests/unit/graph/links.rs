//! Tests for the out-link bitset

#[cfg(test)]
mod tests {
    use pagerank::graph::LinkSet;

    // Tests insertion, membership and ascending iteration
    // Verified by storing indices off by one
    #[test]
    fn test_insert_and_contains() {
        let mut links = LinkSet::new(6);
        links.insert(4);
        links.insert(1);
        links.insert(4);

        assert!(links.contains(1));
        assert!(links.contains(4));
        assert!(!links.contains(0));
        assert_eq!(links.count(), 2);
        assert_eq!(links.to_vec(), vec![1, 4]);
    }

    // Tests that indices beyond the page count are ignored
    // Verified by removing the bounds check in insert
    #[test]
    fn test_out_of_range_ignored() {
        let mut links = LinkSet::new(3);
        links.insert(3);
        links.insert(100);

        assert!(links.is_empty());
        assert!(!links.contains(100));
        assert_eq!(links.capacity(), 3);
    }

    // Tests the all-pages constructor and fill agree
    // Verified by making fill set only the first bit
    #[test]
    fn test_all_and_fill() {
        let all = LinkSet::all(5);
        let mut filled = LinkSet::new(5);
        filled.fill();

        assert_eq!(all, filled);
        assert_eq!(filled.count(), 5);
        assert_eq!(filled.to_vec(), vec![0, 1, 2, 3, 4]);
    }

    // Tests building from an index list
    // Verified by dropping the final index
    #[test]
    fn test_from_indices() {
        let links = LinkSet::from_indices([2, 0, 7], 4);

        assert_eq!(links.to_vec(), vec![0, 2]);
        assert_eq!(format!("{links:?}"), "{0, 2}");
    }
}
