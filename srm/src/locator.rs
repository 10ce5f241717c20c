use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::filters::ExclusionSet;

/// Recursively collects every regular file under `root`, in filesystem
/// traversal order, dropping paths matched by `excludes`.
///
/// Discovery is exhaustive: hidden files are visited and no ignore files
/// (gitignore or otherwise) are consulted, so only the exclusion set
/// narrows the candidate list. Symbolic links are not followed and are
/// never scanned. Entries that error during traversal are skipped; the
/// list contains only paths that existed and were regular files at scan
/// time.
pub fn find_files(root: &Path, excludes: &ExclusionSet) -> Vec<PathBuf> {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(false)
        .follow_links(false);

    let files: Vec<PathBuf> = builder
        .build()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .map(|entry| normalize(entry.into_path()))
        .filter(|path| !excludes.is_excluded(path))
        .collect();

    debug!(
        "discovered {} candidate files under {}",
        files.len(),
        root.display()
    );

    files
}

/// Strips a leading `./` component so that a scan rooted at `.` yields
/// `sub/file.txt` rather than `./sub/file.txt`. The normalized form is
/// both what the exclusion set tests and what the output prints.
fn normalize(path: PathBuf) -> PathBuf {
    match path.strip_prefix(".") {
        Ok(stripped) if !stripped.as_os_str().is_empty() => stripped.to_path_buf(),
        _ => path,
    }
}
