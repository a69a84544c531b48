//! Comment run extraction.
//!
//! A comment run is a stretch of consecutive `//` lines. Only runs whose last
//! line contains the `Styleguide` marker are documentation blocks; every other
//! comment is ignored.

/// Prefix that starts a single-line comment.
pub const COMMENT_PREFIX: &str = "//";

/// Keyword that marks the last line of a documentation block.
pub const MARKER: &str = "Styleguide";

/// Iterator over documentation comment runs in a sequence of source lines.
///
/// Each item is the run's lines with the comment prefix (and one following
/// space) removed and trailing whitespace trimmed. A run is only emitted once
/// a non-comment line ends it, so a block in the very last lines of a file is
/// not yielded; see [`CommentRuns::into_unterminated`].
#[derive(Debug)]
pub struct CommentRuns<I> {
    lines: I,
    current: Vec<String>,
}

/// Extract documentation comment runs from source lines.
pub fn extract_runs<I, S>(lines: I) -> CommentRuns<I::IntoIter>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    CommentRuns {
        lines: lines.into_iter(),
        current: Vec::new(),
    }
}

impl<I> CommentRuns<I> {
    /// The run left open at end of input, if it would have been a block.
    ///
    /// Call after the iterator is exhausted to find a documentation block that
    /// was dropped because nothing followed it.
    pub fn into_unterminated(self) -> Option<Vec<String>> {
        is_documented(&self.current).then_some(self.current)
    }
}

impl<I, S> Iterator for CommentRuns<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            match strip_comment(line.as_ref()) {
                Some(content) => self.current.push(content.to_string()),
                None => {
                    let run = std::mem::take(&mut self.current);
                    if is_documented(&run) {
                        return Some(run);
                    }
                }
            }
        }

        None
    }
}

/// Strip the comment prefix and one separating space from a comment line.
///
/// Returns `None` for lines that are not comments. Indented comments do not
/// count.
fn strip_comment(line: &str) -> Option<&str> {
    let content = line.strip_prefix(COMMENT_PREFIX)?;
    let content = content.strip_prefix(' ').unwrap_or(content);
    Some(content.trim_end())
}

fn is_documented(run: &[String]) -> bool {
    run.last().is_some_and(|line| line.contains(MARKER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_blocks() {
        let source = r#"
// No block
.foobar {}

// Block1
//
// foobar
//
// Styleguide
div {}

// Block2
//
// Styleguide
        "#;

        let runs: Vec<Vec<String>> = extract_runs(source.lines()).collect();

        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], vec!["Block1", "", "foobar", "", "Styleguide"]);
        assert_eq!(runs[1], vec!["Block2", "", "Styleguide"]);
    }

    #[test]
    fn test_skips_run_without_marker() {
        let source = "// Just a note\n// about layout\n\n// Card\n//\n// Styleguide 1.1\n.card {}\n";

        let runs: Vec<Vec<String>> = extract_runs(source.lines()).collect();

        assert_eq!(runs, vec![vec!["Card", "", "Styleguide 1.1"]]);
    }

    #[test]
    fn test_marker_must_be_on_last_line() {
        let source = "// Styleguide 1.1\n// trailing note\nbody {}\n";

        assert_eq!(extract_runs(source.lines()).count(), 0);
    }

    #[test]
    fn test_strips_prefix_and_trailing_whitespace() {
        let lines = ["//  indented   ", "//tight", "//", "// Styleguide 1", ""];

        let runs: Vec<Vec<String>> = extract_runs(lines).collect();

        assert_eq!(runs, vec![vec![" indented", "tight", "", "Styleguide 1"]]);
    }

    #[test]
    fn test_indented_comments_are_not_runs() {
        let source = "  // Name\n  //\n  // Styleguide 1\n\n";

        assert_eq!(extract_runs(source.lines()).count(), 0);
    }

    #[test]
    fn test_blank_source_line_splits_runs() {
        let source = "// Name\n\n// Styleguide 1\nx\n";

        let runs: Vec<Vec<String>> = extract_runs(source.lines()).collect();

        // Only the second half carries the marker
        assert_eq!(runs, vec![vec!["Styleguide 1"]]);
    }

    #[test]
    fn test_unterminated_run_at_eof_is_dropped() {
        let source = "// Name\n//\n// Styleguide 2.0";

        let mut runs = extract_runs(source.lines());

        assert_eq!(runs.next(), None);
        assert_eq!(
            runs.into_unterminated(),
            Some(vec!["Name".to_string(), "".to_string(), "Styleguide 2.0".to_string()])
        );
    }

    #[test]
    fn test_unterminated_plain_comment_is_not_reported() {
        let mut runs = extract_runs("a {}\n// just a comment".lines());

        assert_eq!(runs.next(), None);
        assert_eq!(runs.into_unterminated(), None);
    }

    #[test]
    fn test_crlf_lines() {
        let source = "// Name\r\n//\r\n// Styleguide 1\r\n\r\n";

        let runs: Vec<Vec<String>> = extract_runs(source.split('\n')).collect();

        assert_eq!(runs, vec![vec!["Name", "", "Styleguide 1"]]);
    }
}
