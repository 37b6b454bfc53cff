//! Project discovery and per-project file resolution.

use glob::MatchOptions;
use skillscan_config::DetectorConfig;
use skillscan_core::Project;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Immediate children of `root` that look like projects, sorted by path.
///
/// A child qualifies when it is a directory, is not hidden, is not on the skip
/// list, and contains one of the project markers (`.git`, `README.md`).
pub fn find_projects(root: &Path, config: &DetectorConfig) -> Vec<Project> {
    let entries = match std::fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(root = ?root, error = %e, "cannot list projects root");
            return Vec::new();
        }
    };

    let mut projects: Vec<Project> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| is_project_dir(path, config))
        .map(Project::new)
        .collect();

    projects.sort_by(|a, b| a.path.cmp(&b.path));
    debug!(root = ?root, count = projects.len(), "discovered projects");
    projects
}

fn is_project_dir(path: &Path, config: &DetectorConfig) -> bool {
    if !path.is_dir() {
        return false;
    }
    let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
        return false;
    };
    if name.starts_with('.') || config.skip_dirs.iter().any(|s| *s == name) {
        return false;
    }
    config
        .project_markers
        .iter()
        .any(|marker| path.join(marker).exists())
}

/// Resolve a list of file entries relative to `dir`.
///
/// Literal entries are kept when they name an existing file. Entries with a
/// `*` are glob patterns; wildcards match hidden names but never cross `/`.
/// Output keeps entry order, and glob hits are sorted.
pub fn resolve_files(dir: &Path, entries: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in entries {
        if entry.contains('*') {
            files.extend(glob_files(dir, entry));
        } else {
            let path = dir.join(entry);
            if path.is_file() {
                files.push(path);
            }
        }
    }
    files
}

/// Files under `dir` matching `pattern`, sorted.
pub fn glob_files(dir: &Path, pattern: &str) -> Vec<PathBuf> {
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };
    let full = format!(
        "{}/{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        pattern
    );
    let paths = match glob::glob_with(&full, options) {
        Ok(paths) => paths,
        Err(e) => {
            warn!(pattern = %full, error = %e, "invalid file pattern");
            return Vec::new();
        }
    };
    let mut files: Vec<PathBuf> = paths
        .filter_map(|p| p.ok())
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    files
}
