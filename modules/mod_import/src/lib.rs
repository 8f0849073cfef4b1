//! Flat-file import parsing for campaign identities and proxy endpoints.
//!
//! Both parsers share the same contract: blank and `#`-comment lines are
//! skipped, malformed lines are counted as invalid rather than raised, and
//! parsing is pure with no state carried between calls.

pub mod account;
pub mod proxy;

pub use account::parse_account_file;
pub use proxy::{parse_proxy_file, parse_proxy_line};

/// Splits file content into the lines that participate in an import:
/// trimmed, non-empty, and not comments.
fn import_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        let content = "one\n\n   \n# comment\n  # indented comment\ntwo\r\n";
        let lines: Vec<&str> = import_lines(content).collect();
        assert_eq!(lines, vec!["one", "two"]);
    }
}
