//! Line-by-line instruction pattern matching.

use skillscan_core::PatternMatch;
use skillscan_core::text::{context_snippet, read_lossy};
use std::path::Path;

use crate::catalog::PatternCatalog;

/// Scan one file against every pattern in the catalog.
///
/// Unreadable files produce no matches.
pub fn scan_file(path: &Path, catalog: &PatternCatalog, context_chars: usize) -> Vec<PatternMatch> {
    match read_lossy(path) {
        Some(content) => match_lines(&content, &path.display().to_string(), catalog, context_chars),
        None => Vec::new(),
    }
}

/// Match every line of `content` against every pattern. A line yields one
/// match per pattern it satisfies.
pub fn match_lines(
    content: &str,
    file: &str,
    catalog: &PatternCatalog,
    context_chars: usize,
) -> Vec<PatternMatch> {
    let mut matches = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        for pattern in catalog.iter() {
            if pattern.regex.is_match(line) {
                matches.push(PatternMatch {
                    file: file.to_string(),
                    line: idx + 1,
                    pattern: pattern.source().to_string(),
                    label: pattern.label.clone(),
                    context: context_snippet(line, context_chars),
                });
            }
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillscan_config::CatalogConfig;

    fn default_catalog() -> PatternCatalog {
        PatternCatalog::compile(&CatalogConfig::default().instruction_patterns).unwrap()
    }

    #[test]
    fn one_line_can_match_several_patterns() {
        let matches = match_lines(
            "intro\nClaude should always verify input\n",
            "CLAUDE.md",
            &default_catalog(),
            100,
        );
        let labels: Vec<&str> = matches.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["Validation requirement", "Claude-specific instruction"]);
        assert!(matches.iter().all(|m| m.line == 2));
        assert_eq!(matches[0].context, "Claude should always verify input");
        assert_eq!(matches[0].pattern, "always (check|verify|ensure|validate)");
    }

    #[test]
    fn matching_ignores_case() {
        let matches = match_lines("NEVER PUSH WITHOUT review", "f", &default_catalog(), 100);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].label, "Safety gate");
    }

    #[test]
    fn context_is_trimmed_and_capped() {
        let line = format!("   when asked to {}", "x".repeat(200));
        let matches = match_lines(&line, "f", &default_catalog(), 100);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].context.chars().count(), 100);
        assert!(matches[0].context.starts_with("when asked to"));
    }

    #[test]
    fn no_matches_in_plain_text() {
        let content = "just some notes\nnothing here";
        assert!(match_lines(content, "f", &default_catalog(), 100).is_empty());
    }

    #[test]
    fn missing_file_yields_nothing() {
        let matches = scan_file(Path::new("/nonexistent/CLAUDE.md"), &default_catalog(), 100);
        assert!(matches.is_empty());
    }

    #[test]
    fn scan_file_records_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("AGENTS.md");
        std::fs::write(&path, b"Use the checklist \xff before merging").unwrap();

        let matches = scan_file(&path, &default_catalog(), 100);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].label, "Template usage");
        assert_eq!(matches[0].file, path.display().to_string());
    }
}
