use std::path::PathBuf;

/// Configuration for a single search invocation
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// The pattern to search for (regex)
    pub pattern: String,

    /// The file or directory to search in
    pub path: PathBuf,

    /// Regexes for paths to exclude from directory scans, each tested
    /// against the candidate path string anchored at its start
    pub exclude_patterns: Vec<String>,
}

impl SearchConfig {
    /// Creates a new configuration with the given pattern and target path
    pub fn new(pattern: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        SearchConfig {
            pattern: pattern.into(),
            path: path.into(),
            exclude_patterns: vec![],
        }
    }

    /// Builder method to set exclusion patterns
    pub fn with_exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }
}
