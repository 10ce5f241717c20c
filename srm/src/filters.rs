use regex::Regex;
use std::path::Path;

use crate::errors::{SearchError, SearchResult};

/// User-supplied exclusion regexes combined into a single alternation,
/// tested against candidate path strings anchored at the start.
///
/// Each exclude string becomes its own capturing group and the groups are
/// OR-joined, so `["^(\.git).*", ".*(\.venv).*"]` compiles to
/// `(^(\.git).*)|(.*(\.venv).*)`. A candidate is dropped iff the combined
/// pattern matches beginning at position 0 of the path string; the match
/// does not have to consume the whole string. A pattern written to match
/// only a suffix therefore never excludes anything unless it absorbs the
/// prefix itself (e.g. with a leading `.*`).
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    combined: Option<Regex>,
}

impl ExclusionSet {
    /// Builds the combined pattern from `patterns`.
    ///
    /// An empty list produces a set that excludes nothing. Any exclude
    /// string that fails to compile makes the whole construction fail,
    /// before any filtering happens.
    pub fn new(patterns: &[String]) -> SearchResult<Self> {
        if patterns.is_empty() {
            return Ok(ExclusionSet { combined: None });
        }

        let alternation = format!("({})", patterns.join(")|("));
        // The non-capturing wrapper anchors the whole alternation at
        // position 0 without changing group numbering or requiring the
        // match to span the full string.
        let combined = Regex::new(&format!("^(?:{})", alternation))
            .map_err(|e| SearchError::invalid_pattern(alternation, e))?;

        Ok(ExclusionSet {
            combined: Some(combined),
        })
    }

    /// True when `path` should be dropped from the scan set
    pub fn is_excluded(&self, path: &Path) -> bool {
        match &self.combined {
            Some(regex) => regex.is_match(path.to_string_lossy().as_ref()),
            None => false,
        }
    }

    /// True when no exclusion patterns were supplied
    pub fn is_empty(&self) -> bool {
        self.combined.is_none()
    }
}
