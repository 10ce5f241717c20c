use std::path::PathBuf;
use thiserror::Error;

/// Result type for search operations
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors that can occur while locating or scanning files
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
    #[error("file is not valid UTF-8: {0}")]
    Utf8(PathBuf),
    #[error("{0} is neither a file nor a directory")]
    NotFileOrDirectory(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SearchError {
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    pub fn utf8(path: impl Into<PathBuf>) -> Self {
        Self::Utf8(path.into())
    }

    pub fn not_file_or_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotFileOrDirectory(path.into())
    }

    /// The one error kind that is recovered locally rather than surfaced:
    /// a file that is not valid UTF-8 contributes no output and is skipped.
    pub fn is_binary_skip(&self) -> bool {
        matches!(self, Self::Utf8(_))
    }
}
