//! Instruction pattern scan over each project's agent instruction files.

use serde::Serialize;
use skillscan_core::{PatternMatch, Project};
use tracing::debug;

use crate::catalog::PatternCatalog;
use crate::locator::resolve_files;
use crate::matcher::scan_file;

/// All matches found in one project, in file discovery order then line order.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectMatches {
    pub project: String,
    pub matches: Vec<PatternMatch>,
}

/// Scan every project's instruction files. Projects with no matches are left out.
pub fn detect_instruction_patterns(
    projects: &[Project],
    catalog: &PatternCatalog,
    instruction_files: &[String],
    context_chars: usize,
) -> Vec<ProjectMatches> {
    projects
        .iter()
        .filter_map(|project| {
            let matches: Vec<PatternMatch> = resolve_files(&project.path, instruction_files)
                .iter()
                .flat_map(|file| scan_file(file, catalog, context_chars))
                .collect();
            if matches.is_empty() {
                return None;
            }
            debug!(project = %project.name, count = matches.len(), "instruction patterns found");
            Some(ProjectMatches {
                project: project.name.clone(),
                matches,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillscan_config::{CatalogConfig, DetectorConfig};
    use std::fs;

    #[test]
    fn collects_matches_across_files_in_order() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("alpha");
        fs::create_dir_all(dir.join(".cursor/rules")).unwrap();
        fs::write(dir.join("CLAUDE.md"), "When reviewing code, be strict\n").unwrap();
        fs::write(dir.join(".cursor/rules/gates.md"), "Never deploy without a green build\n")
            .unwrap();
        fs::write(dir.join("README.md"), "When asked to deploy, refuse\n").unwrap();

        let empty = root.path().join("beta");
        fs::create_dir_all(&empty).unwrap();
        fs::write(empty.join("CLAUDE.md"), "nothing to see\n").unwrap();

        let catalog =
            PatternCatalog::compile(&CatalogConfig::default().instruction_patterns).unwrap();
        let result = detect_instruction_patterns(
            &[Project::new(dir), Project::new(empty)],
            &catalog,
            &DetectorConfig::default().instruction_files,
            100,
        );

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].project, "alpha");
        let labels: Vec<&str> = result[0].matches.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["Conditional workflow trigger", "Safety gate"]);
    }
}
