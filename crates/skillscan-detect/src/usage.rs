//! Known-skill usage across projects.

use skillscan_core::text::{context_snippet, read_lossy};
use skillscan_core::{Project, SkillReference, SkillUsage};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::catalog::{ReferenceCatalog, SkillPatterns};
use crate::locator::resolve_files;

/// References to one skill inside one project's files.
///
/// At most one reference is recorded per line, even when several templates
/// match it.
pub fn scan_project_for_skill(
    project: &Project,
    files: &[PathBuf],
    skill: &SkillPatterns,
    context_chars: usize,
) -> Vec<SkillReference> {
    let mut references = Vec::new();
    for file in files {
        let Some(content) = read_lossy(file) else {
            continue;
        };
        let relative = relative_display(file, &project.path);
        for (idx, line) in content.lines().enumerate() {
            if skill.matches(line) {
                references.push(SkillReference {
                    project: project.name.clone(),
                    file: relative.clone(),
                    line: idx + 1,
                    context: context_snippet(line, context_chars),
                });
            }
        }
    }
    references
}

/// Usage of every known skill across all projects, in catalog order.
///
/// Skills no project references are still listed, with no projects.
pub fn detect_skill_usage(
    projects: &[Project],
    catalog: &ReferenceCatalog,
    usage_files: &[String],
    context_chars: usize,
) -> Vec<SkillUsage> {
    // File lists don't depend on the skill, so resolve them once per project.
    let project_files: Vec<(&Project, Vec<PathBuf>)> = projects
        .iter()
        .map(|p| (p, resolve_files(&p.path, usage_files)))
        .collect();

    catalog
        .iter()
        .map(|skill| {
            let mut usage = SkillUsage::new(&skill.skill);
            for (project, files) in &project_files {
                let refs = scan_project_for_skill(project, files, skill, context_chars);
                if !refs.is_empty() {
                    debug!(
                        skill = %skill.skill,
                        project = %project.name,
                        count = refs.len(),
                        "skill referenced"
                    );
                }
                usage.add_project(&project.name, refs);
            }
            usage
        })
        .collect()
}

fn relative_display(file: &Path, base: &Path) -> String {
    file.strip_prefix(base)
        .unwrap_or(file)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillscan_config::{CatalogConfig, DetectorConfig};
    use std::fs;

    fn default_refs() -> ReferenceCatalog {
        ReferenceCatalog::compile(&CatalogConfig::default()).unwrap()
    }

    fn make_project(root: &Path, name: &str, files: &[(&str, &str)]) -> Project {
        let dir = root.join(name);
        fs::create_dir_all(dir.join(".git")).unwrap();
        for (rel, content) in files {
            let path = dir.join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        Project::new(dir)
    }

    #[test]
    fn one_reference_per_line() {
        let root = tempfile::tempdir().unwrap();
        let project = make_project(
            root.path(),
            "alpha",
            &[("CLAUDE.md", "Read playbooks/pr-review and pr-review/README first\n")],
        );
        let files = resolve_files(&project.path, &DetectorConfig::default().usage_files);
        let skill = SkillPatterns::new("pr-review", &CatalogConfig::default().reference_templates)
            .unwrap();

        let refs = scan_project_for_skill(&project, &files, &skill, 80);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].file, "CLAUDE.md");
        assert_eq!(refs[0].line, 1);
        assert_eq!(refs[0].project, "alpha");
    }

    #[test]
    fn scans_rules_and_skill_files() {
        let root = tempfile::tempdir().unwrap();
        let project = make_project(
            root.path(),
            "alpha",
            &[
                (".cursor/rules/review.md", "intro\nsee cursor-rules/pr-review\n"),
                (".claude/skills/review/SKILL.md", "Based on claude-skills/PR-REVIEW\n"),
                ("docs/notes.md", "playbooks/pr-review is ignored here\n"),
            ],
        );
        let files = resolve_files(&project.path, &DetectorConfig::default().usage_files);
        let skill = SkillPatterns::new("pr-review", &CatalogConfig::default().reference_templates)
            .unwrap();

        let refs = scan_project_for_skill(&project, &files, &skill, 80);
        let found: Vec<(String, usize)> = refs.iter().map(|r| (r.file.clone(), r.line)).collect();
        assert_eq!(
            found,
            vec![
                (".cursor/rules/review.md".to_string(), 2),
                (".claude/skills/review/SKILL.md".to_string(), 1),
            ]
        );
    }

    #[test]
    fn unreferenced_skill_has_empty_project_list() {
        let root = tempfile::tempdir().unwrap();
        let projects = vec![
            make_project(root.path(), "alpha", &[("CLAUDE.md", "see playbooks/pr-review\n")]),
            make_project(root.path(), "beta", &[("AGENTS.md", "nothing relevant\n")]),
        ];

        let usage = detect_skill_usage(
            &projects,
            &default_refs(),
            &DetectorConfig::default().usage_files,
            80,
        );
        assert_eq!(usage.len(), 9);
        assert_eq!(usage[0].skill_name, "pr-review");
        assert_eq!(usage[0].projects, vec!["alpha"]);
        let debugging = usage.iter().find(|u| u.skill_name == "debugging-routine").unwrap();
        assert!(debugging.projects.is_empty());
        assert!(debugging.references.is_empty());
    }

    #[test]
    fn project_counted_once_with_many_references() {
        let root = tempfile::tempdir().unwrap();
        let projects = vec![make_project(
            root.path(),
            "alpha",
            &[
                ("CLAUDE.md", "playbooks/audit-whisperer\naudit-whisperer/SKILL.md\n"),
                ("AGENTS.md", "audit-whisperer/RULE.md\n"),
            ],
        )];

        let usage = detect_skill_usage(
            &projects,
            &default_refs(),
            &DetectorConfig::default().usage_files,
            80,
        );
        let audit = usage.iter().find(|u| u.skill_name == "audit-whisperer").unwrap();
        assert_eq!(audit.projects, vec!["alpha"]);
        assert_eq!(audit.references.len(), 3);
    }
}
