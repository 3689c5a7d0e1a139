//! Tests for command-line interface parsing and report generation

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pagerank::RankError;
    use pagerank::io::cli::{Cli, RankProcessor};
    use pagerank::io::configuration::{
        CONVERGENCE_THRESHOLD, DEFAULT_DAMPING, DEFAULT_SAMPLES, DEFAULT_SEED, MAX_ITERATIONS,
    };
    use pagerank::io::crawl::crawl;
    use pagerank::io::report::{format_ranks, sampling_title};
    use pagerank::rank::sampling::sample_pagerank;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn create_test_cli(corpus: &str) -> Cli {
        Cli::parse_from(["program", corpus, "--quiet"])
    }

    // Tests CLI parsing with only the required corpus argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "corpus0"]);

        assert_eq!(cli.corpus, PathBuf::from("corpus0"));
        assert!((cli.damping - DEFAULT_DAMPING).abs() < f64::EPSILON);
        assert_eq!(cli.samples, DEFAULT_SAMPLES);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert!(cli.should_show_progress());
    }

    // Tests short and long flag parsing
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_parse_flags() {
        let cli = Cli::parse_from([
            "program", "corpus1", "-d", "0.5", "-n", "500", "--seed", "7", "-q",
        ]);

        assert!((cli.damping - 0.5).abs() < f64::EPSILON);
        assert_eq!(cli.samples, 500);
        assert_eq!(cli.seed, 7);
        assert!(!cli.should_show_progress());
    }

    // Tests missing and extra positional arguments are usage errors
    // Verified by making the corpus argument optional
    #[test]
    fn test_cli_argument_count() {
        assert!(Cli::try_parse_from(["program"]).is_err());
        assert!(Cli::try_parse_from(["program", "corpus0", "corpus1"]).is_err());
    }

    // Tests the run configuration carries flags and fixed limits
    // Verified by swapping seed and samples
    #[test]
    fn test_rank_config() {
        let cli = Cli::parse_from(["program", "corpus0", "-n", "123", "-s", "9"]);

        let config = cli.rank_config();

        assert_eq!(config.samples, 123);
        assert_eq!(config.seed, 9);
        assert_eq!(config.max_iterations, MAX_ITERATIONS);
        assert!((config.threshold - CONVERGENCE_THRESHOLD).abs() < f64::EPSILON);
    }

    // Tests a full run renders both tables
    // Verified by omitting the iteration table
    #[test]
    fn test_process_renders_report() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("1.html"), r#"<a href="2.html">2</a>"#).unwrap();
        fs::write(temp_dir.path().join("2.html"), r#"<a href="1.html">1</a>"#).unwrap();

        let mut processor = RankProcessor::new(create_test_cli(temp_dir.path().to_str().unwrap()));
        let report = processor.process().unwrap();

        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines,
            vec![
                "PageRank Results from Sampling (n = 10000)",
                lines[1],
                lines[2],
                "PageRank Results from Iteration",
                "  1.html: 0.5000",
                "  2.html: 0.5000",
            ]
        );
        assert!(lines[1].starts_with("  1.html: 0.4") || lines[1].starts_with("  1.html: 0.5"));
        assert!(lines[2].starts_with("  2.html: 0.4") || lines[2].starts_with("  2.html: 0.5"));
    }

    // Tests the sampling table matches the library estimator for the same seed
    // Verified by running a separate walk loop in the processor
    #[test]
    fn test_process_sampling_matches_estimator() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("1.html"), r#"<a href="2.html">2</a>"#).unwrap();
        fs::write(
            temp_dir.path().join("2.html"),
            r#"<a href="1.html">1</a><a href="3.html">3</a>"#,
        )
        .unwrap();
        fs::write(temp_dir.path().join("3.html"), r#"<p>end</p>"#).unwrap();
        let path = temp_dir.path().to_str().unwrap();

        let cli = Cli::parse_from(["program", path, "-n", "777", "-s", "5", "-q"]);
        let report = RankProcessor::new(cli).process().unwrap();

        let corpus = crawl(temp_dir.path()).unwrap();
        let expected = sample_pagerank(&corpus, DEFAULT_DAMPING, 777, 5).unwrap();
        assert!(report.starts_with(&format_ranks(&sampling_title(777), &expected)));
    }

    // Tests error handling for a missing corpus directory
    // Verified by returning an empty report for missing directories
    #[test]
    fn test_process_missing_corpus() {
        let mut processor = RankProcessor::new(create_test_cli("nonexistent-corpus"));

        let result = processor.process();

        assert!(matches!(result, Err(RankError::FileSystem { .. })));
    }

    // Tests invalid flags fail before the corpus is read
    // Verified by validating after crawling
    #[test]
    fn test_process_invalid_damping() {
        let cli = Cli::parse_from(["program", "nonexistent-corpus", "-d", "1.5", "-q"]);
        let mut processor = RankProcessor::new(cli);

        let result = processor.process();

        assert!(matches!(
            result,
            Err(RankError::InvalidParameter { parameter: "damping", .. })
        ));
    }
}
