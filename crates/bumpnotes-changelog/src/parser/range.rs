//! Version range extraction
//!
//! A changelog is a sequence of lines where some lines are version headers:
//! lines ending in a `MAJOR.MINOR.PATCH` token, such as `## 1.4.0` or
//! `Version 2.0.0`. Each header opens the segment for that version.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// A line ending in a three-part dotted version
static VERSION_HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.[0-9]+\.[0-9]+$").expect("Invalid regex"));

/// Check whether a line is a version header
pub fn is_version_header(line: &str) -> bool {
    VERSION_HEADER_REGEX.is_match(line)
}

/// Extract the part of a changelog covering two versions.
///
/// Lines are copied from the start of the document. A header containing
/// either target version (as a substring) marks that target as seen; once
/// every distinct target has been seen, copying stops at the next header.
/// The segment of the last matched version is therefore included in full.
///
/// When neither version appears in any header the whole document is
/// returned. `from_version == to_version` counts as a single target, and a
/// repeated header for an already seen version does not count again.
///
/// Every returned line ends with `\n`.
pub fn extract_range(changelog: &str, from_version: &str, to_version: &str) -> String {
    let mut unseen = vec![from_version];
    if to_version != from_version {
        unseen.push(to_version);
    }

    let mut output = String::with_capacity(changelog.len());
    let mut copied = 0usize;

    for line in changelog.lines() {
        let header = is_version_header(line);
        if header && unseen.is_empty() {
            break;
        }

        output.push_str(line);
        output.push('\n');
        copied += 1;

        if header {
            unseen.retain(|version| !line.contains(version));
        }
    }

    debug!(
        from = from_version,
        to = to_version,
        lines = copied,
        complete = unseen.is_empty(),
        "extracted changelog range"
    );
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHANGELOG: &str = "# 2.0.0\nFOO-1\n# 1.0.0\nFOO-2\n# 0.9.0\nFOO-3";

    #[test]
    fn test_is_version_header() {
        assert!(is_version_header("# 1.0.0"));
        assert!(is_version_header("## Version 12.30.4"));
        assert!(is_version_header("1.0.0"));
        assert!(!is_version_header("# 1.0"));
        assert!(!is_version_header("# 1.0.0 (2015-01-01)"));
        assert!(!is_version_header("- fixed FOO-12"));
    }

    #[test]
    fn test_range_between_versions() {
        let range = extract_range(CHANGELOG, "1.0.0", "2.0.0");
        assert_eq!(range, "# 2.0.0\nFOO-1\n# 1.0.0\nFOO-2\n");
    }

    #[test]
    fn test_argument_order_does_not_matter() {
        assert_eq!(
            extract_range(CHANGELOG, "2.0.0", "1.0.0"),
            extract_range(CHANGELOG, "1.0.0", "2.0.0")
        );
    }

    #[test]
    fn test_preamble_is_kept() {
        let changelog = "Changelog\n=========\n\n## 1.1.0\n- DEV-7 thing\n## 1.0.0\n- DEV-3 other\n## 0.1.0\n- DEV-1";
        let range = extract_range(changelog, "1.0.0", "1.1.0");
        assert_eq!(
            range,
            "Changelog\n=========\n\n## 1.1.0\n- DEV-7 thing\n## 1.0.0\n- DEV-3 other\n"
        );
    }

    #[test]
    fn test_no_matching_headers_returns_everything() {
        let range = extract_range(CHANGELOG, "5.0.0", "6.0.0");
        assert_eq!(range, format!("{}\n", CHANGELOG));
    }

    #[test]
    fn test_only_one_version_present() {
        // Stopping needs both targets, so everything after the one match stays.
        let range = extract_range(CHANGELOG, "1.0.0", "3.0.0");
        assert_eq!(range, format!("{}\n", CHANGELOG));
    }

    #[test]
    fn test_equal_versions_take_single_segment() {
        let range = extract_range(CHANGELOG, "2.0.0", "2.0.0");
        assert_eq!(range, "# 2.0.0\nFOO-1\n");
    }

    #[test]
    fn test_duplicate_header_does_not_count_twice() {
        let changelog = "# 2.0.0\nA-1\n# 2.0.0\nA-2\n# 1.0.0\nA-3\n# 0.9.0\nA-4\n";
        let range = extract_range(changelog, "1.0.0", "2.0.0");
        assert_eq!(range, "# 2.0.0\nA-1\n# 2.0.0\nA-2\n# 1.0.0\nA-3\n");
    }

    #[test]
    fn test_substring_match_on_header() {
        // "1.2.1" is contained in "11.2.1", so that header counts as a match.
        let changelog = "# 11.2.1\nX-1\n# 1.3.0\nX-2\n# 1.2.9\nX-3";
        let range = extract_range(changelog, "1.2.1", "1.3.0");
        assert_eq!(range, "# 11.2.1\nX-1\n# 1.3.0\nX-2\n");
    }

    #[test]
    fn test_crlf_lines() {
        let changelog = "# 2.0.0\r\nFOO-1\r\n# 1.0.0\r\nFOO-2\r\n# 0.9.0\r\n";
        let range = extract_range(changelog, "1.0.0", "2.0.0");
        assert_eq!(range, "# 2.0.0\nFOO-1\n# 1.0.0\nFOO-2\n");
    }

    #[test]
    fn test_idempotent_once_versions_are_gone() {
        let first = extract_range(CHANGELOG, "7.0.0", "8.0.0");
        let second = extract_range(&first, "7.0.0", "8.0.0");
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_changelog() {
        assert_eq!(extract_range("", "1.0.0", "2.0.0"), "");
    }
}
