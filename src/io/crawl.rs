//! Corpus loading from a directory of HTML pages

use crate::graph::Corpus;
use crate::io::configuration::{DOCUMENT_EXTENSION, LINK_PATTERN};
use crate::io::error::{RankError, Result, computation_error, file_system_error};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info};

static LINK_REGEX: LazyLock<std::result::Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(LINK_PATTERN));

/// Anchor pattern used to find link targets, compiled once per process
///
/// # Errors
///
/// Returns a computation error if the link pattern fails to compile
pub fn link_pattern() -> Result<&'static Regex> {
    LINK_REGEX
        .as_ref()
        .map_err(|error| computation_error("link pattern", error))
}

/// Every `href` target of an anchor tag in `html`
///
/// # Errors
///
/// Returns a computation error if the link pattern fails to compile
pub fn extract_links(html: &str) -> Result<BTreeSet<String>> {
    Ok(collect_links(link_pattern()?, html))
}

fn collect_links(pattern: &Regex, html: &str) -> BTreeSet<String> {
    pattern
        .captures_iter(html)
        .filter_map(|captures| captures.get(1))
        .map(|target| target.as_str().to_string())
        .collect()
}

/// Parse every HTML page in `directory` into a corpus
///
/// Pages are keyed by file name. Self links and links to files that are not
/// pages of the directory are dropped.
///
/// # Errors
///
/// Returns a file system error if the directory or a page cannot be read,
/// and [`RankError::InvalidCorpus`] if the directory holds no HTML pages
pub fn crawl(directory: &Path) -> Result<Corpus> {
    let pattern = link_pattern()?;
    let entries = std::fs::read_dir(directory)
        .map_err(|error| file_system_error(directory, "read directory", error))?;

    let mut link_map = BTreeMap::new();
    for entry in entries {
        let path = entry
            .map_err(|error| file_system_error(directory, "read directory entry", error))?
            .path();

        if !path.is_file()
            || path.extension().and_then(|ext| ext.to_str()) != Some(DOCUMENT_EXTENSION)
        {
            continue;
        }
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };

        let contents = std::fs::read_to_string(&path)
            .map_err(|error| file_system_error(&path, "read page", error))?;
        let links = collect_links(pattern, &contents);
        debug!(page = name, links = links.len(), "parsed page");

        link_map.insert(name.to_string(), links);
    }

    if link_map.is_empty() {
        return Err(RankError::InvalidCorpus {
            path: directory.to_path_buf(),
            reason: format!("no .{DOCUMENT_EXTENSION} pages found"),
        });
    }

    let corpus = Corpus::new(link_map)?;
    info!(
        pages = corpus.page_count(),
        directory = %directory.display(),
        "corpus loaded"
    );
    Ok(corpus)
}
