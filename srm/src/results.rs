use std::path::PathBuf;

/// A single regex match found while scanning a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// 1-based line number where the match was found
    pub line_number: usize,
    /// The reported match text: the full matched span, or the lone
    /// capture group's text when the pattern has exactly one group
    pub text: String,
}

/// All matches found in a single file
#[derive(Debug, Clone)]
pub struct FileResult {
    /// The path the file was scanned under (and is reported as)
    pub path: PathBuf,
    /// All matches found in the file, in line order then left to right
    pub matches: Vec<Match>,
}

/// Aggregated results for a whole invocation
#[derive(Debug, Clone, Default)]
pub struct SearchOutput {
    /// Per-file results, in scan order
    pub file_results: Vec<FileResult>,
    /// Number of files scanned to completion
    pub files_scanned: usize,
    /// Number of files skipped because they were not valid UTF-8
    pub files_skipped: usize,
    /// Number of scanned files with at least one match
    pub files_with_matches: usize,
    /// Total number of matches across all files
    pub total_matches: usize,
}

impl SearchOutput {
    /// Creates a new empty output
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds one file's results and updates the aggregate counters
    pub fn add_file_result(&mut self, file_result: FileResult) {
        self.files_scanned += 1;
        if !file_result.matches.is_empty() {
            self.total_matches += file_result.matches.len();
            self.files_with_matches += 1;
        }
        self.file_results.push(file_result);
    }

    /// Records a file skipped as non-UTF-8
    pub fn record_skip(&mut self) {
        self.files_skipped += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_result(path: &str, matches: Vec<Match>) -> FileResult {
        FileResult {
            path: PathBuf::from(path),
            matches,
        }
    }

    #[test]
    fn test_empty_output() {
        let output = SearchOutput::new();
        assert_eq!(output.files_scanned, 0);
        assert_eq!(output.files_skipped, 0);
        assert_eq!(output.files_with_matches, 0);
        assert_eq!(output.total_matches, 0);
        assert!(output.file_results.is_empty());
    }

    #[test]
    fn test_add_file_result_updates_counters() {
        let mut output = SearchOutput::new();

        output.add_file_result(file_result(
            "a.txt",
            vec![
                Match {
                    line_number: 1,
                    text: "foo".to_string(),
                },
                Match {
                    line_number: 3,
                    text: "foo".to_string(),
                },
            ],
        ));

        assert_eq!(output.files_scanned, 1);
        assert_eq!(output.files_with_matches, 1);
        assert_eq!(output.total_matches, 2);

        // A matchless file counts as scanned but nothing else
        output.add_file_result(file_result("b.txt", vec![]));

        assert_eq!(output.files_scanned, 2);
        assert_eq!(output.files_with_matches, 1);
        assert_eq!(output.total_matches, 2);
    }

    #[test]
    fn test_record_skip() {
        let mut output = SearchOutput::new();
        output.record_skip();
        output.record_skip();

        assert_eq!(output.files_skipped, 2);
        assert_eq!(output.files_scanned, 0);
    }
}
