//! Small text helpers used by every scanner.

use std::path::Path;
use tracing::debug;

/// Read a file as text, replacing malformed UTF-8 sequences.
///
/// Returns `None` when the file cannot be opened or read at all; callers treat
/// that as "nothing found".
pub fn read_lossy(path: &Path) -> Option<String> {
    match std::fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            debug!(path = ?path, error = %e, "skipping unreadable file");
            None
        }
    }
}

/// Truncate to at most `max` characters (not bytes).
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

/// Trim a line and cap it at `max` characters, the form stored as match context.
pub fn context_snippet(line: &str, max: usize) -> String {
    truncate_chars(line.trim(), max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo wörld", 4), "héll");
        assert_eq!(truncate_chars("short", 80), "short");
        assert_eq!(truncate_chars("", 3), "");
    }

    #[test]
    fn snippet_trims_before_truncating() {
        assert_eq!(context_snippet("    abcdef   ", 3), "abc");
        assert_eq!(context_snippet("\t- item\r", 100), "- item");
    }

    #[test]
    fn read_lossy_replaces_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.md");
        std::fs::write(&path, b"ok \xff\xfe line\n").unwrap();

        let text = read_lossy(&path).unwrap();
        assert!(text.starts_with("ok "));
        assert!(text.contains("line"));
    }

    #[test]
    fn read_lossy_missing_file_is_none() {
        assert!(read_lossy(Path::new("/nonexistent/skillscan/file.md")).is_none());
    }
}
