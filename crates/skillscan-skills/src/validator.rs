use serde::Serialize;
use skillscan_config::ValidatorConfig;
use skillscan_core::{Result, SkillscanError};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::definition::SkillDefinition;
use crate::rules::{validate_description, validate_name};

/// Errors collected for one failing skill directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillFailure {
    pub skill: String,
    pub errors: Vec<String>,
}

/// Outcome of validating a whole skills directory.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationSummary {
    pub passed: usize,
    pub failed: usize,
    /// Failing skills in directory-name order.
    pub failures: Vec<SkillFailure>,
}

impl ValidationSummary {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// `Ok` when every skill passed, otherwise [`SkillscanError::ValidationFailed`].
    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(SkillscanError::ValidationFailed {
                failed: self.failed,
                total: self.total(),
            })
        }
    }
}

/// Validates SKILL.md files against the configured field limits.
pub struct SkillValidator {
    config: ValidatorConfig,
}

impl SkillValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn skills_dir(&self) -> &Path {
        &self.config.skills_dir
    }

    /// Validate a single SKILL.md. An empty list means it passed.
    pub fn validate_file(&self, skill_md: &Path) -> Vec<String> {
        let def = match SkillDefinition::from_file(skill_md) {
            Ok(def) => def,
            Err(errors) => return errors,
        };

        let mut errors = validate_name(&def.name, &def.directory_name(), self.config.max_name_len);
        errors.extend(validate_description(
            &def.description,
            self.config.max_description_len,
        ));
        errors
    }

    /// Validate every skill under the configured skills directory.
    pub fn validate_all(&self) -> Result<ValidationSummary> {
        self.validate_dir(&self.config.skills_dir)
    }

    /// Validate every skill directory under `dir`. Hidden (`.`) and template
    /// (`_`) directories are skipped; loose files are ignored.
    pub fn validate_dir(&self, dir: &Path) -> Result<ValidationSummary> {
        if !dir.is_dir() {
            return Err(SkillscanError::SkillsDirNotFound(dir.to_path_buf()));
        }

        let mut skill_dirs: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        skill_dirs.sort();

        let mut summary = ValidationSummary::default();
        for path in skill_dirs {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if name.starts_with('.') || name.starts_with('_') {
                debug!(skill = %name, "skipping hidden or template directory");
                continue;
            }

            let skill_md = path.join("SKILL.md");
            let errors = if skill_md.is_file() {
                self.validate_file(&skill_md)
            } else {
                vec!["Missing SKILL.md file".to_string()]
            };

            if errors.is_empty() {
                debug!(skill = %name, "skill passed");
                summary.passed += 1;
            } else {
                debug!(skill = %name, errors = errors.len(), "skill failed");
                summary.failed += 1;
                summary.failures.push(SkillFailure {
                    skill: name,
                    errors,
                });
            }
        }

        info!(
            passed = summary.passed,
            failed = summary.failed,
            "skill validation complete"
        );
        Ok(summary)
    }
}
