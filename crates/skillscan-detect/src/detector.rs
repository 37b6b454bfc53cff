use skillscan_config::{DetectorConfig, FeedbackConfig, PolicyConfig, ScanConfig};
use skillscan_core::{Result, SkillscanError};
use std::path::Path;
use tracing::info;

use crate::aggregate::find_repeated_patterns;
use crate::catalog::{PatternCatalog, ReferenceCatalog};
use crate::feedback::collect_feedback;
use crate::instructions::detect_instruction_patterns;
use crate::locator::find_projects;
use crate::report::Report;
use crate::usage::detect_skill_usage;

/// Runs the full detection pipeline over a projects root.
///
/// Catalogs are compiled once at construction; `run` can be called for any
/// number of roots.
pub struct Detector {
    detector: DetectorConfig,
    policy: PolicyConfig,
    feedback: FeedbackConfig,
    patterns: PatternCatalog,
    references: ReferenceCatalog,
}

impl Detector {
    pub fn from_config(config: &ScanConfig) -> Result<Self> {
        Ok(Self {
            detector: config.detector.clone(),
            policy: config.policy.clone(),
            feedback: config.feedback.clone(),
            patterns: PatternCatalog::compile(&config.catalog.instruction_patterns)?,
            references: ReferenceCatalog::compile(&config.catalog)?,
        })
    }

    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Scan `root` and build the report. A missing root is the only error.
    pub fn run(&self, root: &Path) -> Result<Report> {
        if !root.exists() {
            return Err(SkillscanError::ProjectsRootNotFound(root.to_path_buf()));
        }

        let projects = find_projects(root, &self.detector);
        info!(root = ?root, projects = projects.len(), "scanning projects");

        let usage = detect_skill_usage(
            &projects,
            &self.references,
            &self.detector.usage_files,
            self.policy.reference_context_chars,
        );
        let by_project = detect_instruction_patterns(
            &projects,
            &self.patterns,
            &self.detector.instruction_files,
            self.policy.match_context_chars,
        );
        let candidates = find_repeated_patterns(&by_project, &self.policy);
        let feedback = collect_feedback(&projects, &self.detector.index_glob, &self.feedback);

        info!(
            candidates = candidates.len(),
            feedback = feedback.len(),
            "detection complete"
        );
        Ok(Report::new(usage, candidates, &feedback))
    }
}
