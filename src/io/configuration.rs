//! Estimator constants and runtime configuration defaults

/// Probability of following a link rather than jumping to a random page
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Number of pages visited by the random walk
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Every per-page change must fall below this before iteration stops
pub const CONVERGENCE_THRESHOLD: f64 = 0.001;

// Guards the fixed-point loop against non-termination
/// Maximum iterations before the iterative estimator gives up
pub const MAX_ITERATIONS: usize = 10_000;

/// Fixed seed for reproducible sampling
pub const DEFAULT_SEED: u64 = 42;

/// File extension of documents picked up by the crawler
pub const DOCUMENT_EXTENSION: &str = "html";

/// Pattern matching anchor tags, first capture group is the link target
pub const LINK_PATTERN: &str = r#"<a\s+(?:[^>]*?)href="([^"]*)""#;

/// Decimal places used when printing rank values
pub const RANK_PRECISION: usize = 4;

// Progress bar display settings
/// Walk steps between progress bar refreshes
pub const PROGRESS_REFRESH_INTERVAL: usize = 250;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
