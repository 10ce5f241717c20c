use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::trace;

use crate::errors::{SearchError, SearchResult};
use crate::results::{FileResult, Match};

/// A compiled search pattern plus its match-reporting policy.
///
/// When the pattern contains exactly one capturing group, each match
/// reports that group's captured text (the empty string when the group
/// did not participate in the match). With zero or multiple groups the
/// full matched span is reported.
#[derive(Debug, Clone)]
pub struct LineMatcher {
    regex: Regex,
    single_group: bool,
}

impl LineMatcher {
    /// Compiles `pattern`. Invalid syntax is a fatal input error for the
    /// whole invocation.
    pub fn new(pattern: &str) -> SearchResult<Self> {
        let regex =
            Regex::new(pattern).map_err(|e| SearchError::invalid_pattern(pattern, e))?;
        // captures_len counts the implicit whole-match group 0
        let single_group = regex.captures_len() == 2;
        Ok(LineMatcher {
            regex,
            single_group,
        })
    }

    /// All non-overlapping matches in `line`, left to right
    pub fn find_matches(&self, line: &str) -> Vec<String> {
        self.regex
            .captures_iter(line)
            .map(|caps| {
                let text = if self.single_group {
                    caps.get(1).map(|g| g.as_str()).unwrap_or("")
                } else {
                    caps.get(0).map(|g| g.as_str()).unwrap_or("")
                };
                text.to_string()
            })
            .collect()
    }
}

/// Scans `path` line by line, collecting every match of `matcher`.
///
/// The file is read whole and validated as UTF-8 before any line is
/// examined, so a file with invalid bytes anywhere yields
/// [`SearchError::Utf8`] and no partial results. Lines are numbered from
/// 1; the line terminator is not part of the matched content.
pub fn scan_file(path: &Path, matcher: &LineMatcher) -> SearchResult<FileResult> {
    trace!("scanning {}", path.display());

    let bytes = fs::read(path)?;
    let contents = String::from_utf8(bytes).map_err(|_| SearchError::utf8(path))?;

    let mut matches = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        for text in matcher.find_matches(line) {
            matches.push(Match {
                line_number: index + 1,
                text,
            });
        }
    }

    Ok(FileResult {
        path: path.to_path_buf(),
        matches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content).unwrap();
        path
    }

    #[test]
    fn test_matches_with_line_numbers() {
        let dir = tempdir().unwrap();
        let path = write_file(&dir, "test.txt", b"foo\nbar TODO baz\nfoo2\n");

        let matcher = LineMatcher::new("foo").unwrap();
        let result = scan_file(&path, &matcher).unwrap();

        assert_eq!(result.matches.len(), 2);
        assert_eq!(result.matches[0].line_number, 1);
        assert_eq!(result.matches[0].text, "foo");
        assert_eq!(result.matches[1].line_number, 3);
        assert_eq!(result.matches[1].text, "foo");
    }

    #[test]
    fn test_no_matches_yields_empty_result() {
        let dir = tempdir().unwrap();
        let path = write_file(&dir, "test.txt", b"nothing here\n");

        let matcher = LineMatcher::new("absent").unwrap();
        let result = scan_file(&path, &matcher).unwrap();
        assert!(result.matches.is_empty());
    }

    #[test]
    fn test_multiple_matches_per_line_left_to_right() {
        let dir = tempdir().unwrap();
        let path = write_file(&dir, "test.txt", b"foo then fooo\n");

        let matcher = LineMatcher::new("fo+").unwrap();
        let result = scan_file(&path, &matcher).unwrap();

        assert_eq!(result.matches.len(), 2);
        assert_eq!(result.matches[0].line_number, 1);
        assert_eq!(result.matches[0].text, "foo");
        assert_eq!(result.matches[1].line_number, 1);
        assert_eq!(result.matches[1].text, "fooo");
    }

    #[test]
    fn test_single_group_reports_group_text() {
        let matcher = LineMatcher::new(r"# (TODO.*)").unwrap();
        let matches = matcher.find_matches("# TODO fix the walker");
        assert_eq!(matches, vec!["TODO fix the walker".to_string()]);
    }

    #[test]
    fn test_nonparticipating_group_reports_empty_text() {
        let matcher = LineMatcher::new(r"(x)?y").unwrap();
        let matches = matcher.find_matches("y xy");
        assert_eq!(matches, vec!["".to_string(), "x".to_string()]);
    }

    #[test]
    fn test_multiple_groups_report_full_span() {
        let matcher = LineMatcher::new(r"(foo)-(bar)").unwrap();
        let matches = matcher.find_matches("a foo-bar b");
        assert_eq!(matches, vec!["foo-bar".to_string()]);
    }

    #[test]
    fn test_zero_groups_report_full_span() {
        let matcher = LineMatcher::new(r"fo+").unwrap();
        let matches = matcher.find_matches("foo");
        assert_eq!(matches, vec!["foo".to_string()]);
    }

    #[test]
    fn test_line_terminator_not_matched() {
        let dir = tempdir().unwrap();
        let path = write_file(&dir, "test.txt", b"end\r\nend\n");

        let matcher = LineMatcher::new("end.?$").unwrap();
        let result = scan_file(&path, &matcher).unwrap();

        assert_eq!(result.matches.len(), 2);
        assert_eq!(result.matches[0].text, "end");
        assert_eq!(result.matches[1].text, "end");
    }

    #[test]
    fn test_binary_file_is_a_utf8_error() {
        let dir = tempdir().unwrap();
        let path = write_file(&dir, "data.bin", b"foo\n\xff\xfe\x00bar\n");

        let matcher = LineMatcher::new("foo").unwrap();
        let err = scan_file(&path, &matcher).unwrap_err();
        assert!(err.is_binary_skip());
    }

    #[test]
    fn test_invalid_pattern_is_fatal() {
        let err = LineMatcher::new("(unclosed").unwrap_err();
        assert!(matches!(err, SearchError::InvalidPattern { .. }));
    }
}
