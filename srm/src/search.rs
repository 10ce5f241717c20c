use std::path::Path;
use tracing::{debug, info};

use crate::config::SearchConfig;
use crate::errors::{SearchError, SearchResult};
use crate::filters::ExclusionSet;
use crate::locator::find_files;
use crate::results::SearchOutput;
use crate::scanner::{scan_file, LineMatcher};

/// Runs a complete search described by `config`.
///
/// The pattern is compiled once, before any file is opened, so an invalid
/// pattern fails the invocation with no output produced. A target that is
/// an existing regular file is scanned directly and the exclusion list is
/// ignored; an existing directory is walked and each discovered file is
/// scanned in traversal order; anything else is
/// [`SearchError::NotFileOrDirectory`].
pub fn search(config: &SearchConfig) -> SearchResult<SearchOutput> {
    let matcher = LineMatcher::new(&config.pattern)?;
    let mut output = SearchOutput::new();

    if config.path.is_file() {
        // Exclusions apply only to directory scans
        scan_into(&mut output, &config.path, &matcher)?;
    } else if config.path.is_dir() {
        let excludes = ExclusionSet::new(&config.exclude_patterns)?;
        let files = find_files(&config.path, &excludes);
        for file in &files {
            scan_into(&mut output, file, &matcher)?;
        }
    } else {
        return Err(SearchError::not_file_or_directory(&config.path));
    }

    info!(
        "search complete: {} matches in {} of {} files ({} skipped)",
        output.total_matches, output.files_with_matches, output.files_scanned, output.files_skipped
    );

    Ok(output)
}

/// Scans one file into `output`, treating a non-UTF-8 file as a silent
/// skip; every other error is fatal.
fn scan_into(output: &mut SearchOutput, path: &Path, matcher: &LineMatcher) -> SearchResult<()> {
    match scan_file(path, matcher) {
        Ok(result) => output.add_file_result(result),
        Err(err) if err.is_binary_skip() => {
            debug!("skipping non-UTF-8 file {}", path.display());
            output.record_skip();
        }
        Err(err) => return Err(err),
    }
    Ok(())
}
