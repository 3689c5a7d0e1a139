/// Command-line parsing and run orchestration
pub mod cli;
/// Default parameters and display settings
pub mod configuration;
/// HTML corpus loader
pub mod crawl;
/// Error types shared by the whole crate
pub mod error;
/// Terminal progress display
pub mod progress;
/// Rank table rendering
pub mod report;
