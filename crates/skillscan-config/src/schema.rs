use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Placeholder substituted with the escaped skill identifier in reference templates.
pub const SKILL_PLACEHOLDER: &str = "{skill}";

/// Root configuration, mapped to `skillscan.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub detector: DetectorConfig,
    pub policy: PolicyConfig,
    pub feedback: FeedbackConfig,
    pub validator: ValidatorConfig,
    pub logging: LoggingConfig,
    pub catalog: CatalogConfig,
}

// ── Detector ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Directory whose immediate children are scanned as projects.
    pub projects_root: PathBuf,
    /// Child directory names that are never projects.
    pub skip_dirs: Vec<String>,
    /// A child directory is a project when it contains any of these entries.
    pub project_markers: Vec<String>,
    /// Files scanned for instruction patterns, relative to each project.
    /// Entries containing `*` are glob patterns.
    pub instruction_files: Vec<String>,
    /// Files scanned for known-skill references, relative to each project.
    pub usage_files: Vec<String>,
    /// Index files holding skill feedback, matched in the project root.
    pub index_glob: String,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            projects_root: dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("projects"),
            skip_dirs: vec![
                "node_modules".into(),
                "venv".into(),
                ".venv".into(),
                "__pycache__".into(),
            ],
            project_markers: vec![".git".into(), "README.md".into()],
            instruction_files: vec![
                ".cursorrules".into(),
                "CLAUDE.md".into(),
                "AGENTS.md".into(),
                ".github/copilot-instructions.md".into(),
                ".cursor/rules/*.md".into(),
                ".claude/skills/*/SKILL.md".into(),
            ],
            usage_files: vec![
                ".cursorrules".into(),
                "CLAUDE.md".into(),
                "AGENTS.md".into(),
                ".cursor/rules/*.md".into(),
                ".claude/skills/*/SKILL.md".into(),
            ],
            index_glob: "00_Index_*.md".into(),
        }
    }
}

// ── Policy ─────────────────────────────────────────────────────

/// Thresholds and limits that shape the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Distinct projects a pattern label needs before it becomes a candidate.
    pub candidate_min_projects: usize,
    /// Distinct projects at which a candidate is "Proven" rather than "Emerging".
    pub proven_min_projects: usize,
    /// A known skill used in exactly this many projects is up for promotion.
    pub promotion_project_count: usize,
    /// Evidence entries kept per candidate.
    pub max_evidence: usize,
    /// Candidates shown in the human report.
    pub top_candidates: usize,
    /// Characters of context kept for an instruction-pattern match.
    pub match_context_chars: usize,
    /// Characters of context kept for a skill reference.
    pub reference_context_chars: usize,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            candidate_min_projects: 2,
            proven_min_projects: 3,
            promotion_project_count: 2,
            max_evidence: 5,
            top_candidates: 10,
            match_context_chars: 100,
            reference_context_chars: 80,
        }
    }
}

// ── Feedback ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// A line containing any of these opens an improvement section.
    pub improvement_headings: Vec<String>,
    /// A line containing any of these opens a new-pattern section.
    pub new_pattern_headings: Vec<String>,
    /// Unfilled template text; bullets carrying it are dropped.
    pub placeholders: Vec<String>,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            improvement_headings: vec!["Improvements suggested".into(), "Skill Feedback".into()],
            new_pattern_headings: vec!["New patterns emerging".into(), "patterns emerging".into()],
            placeholders: vec![
                "[What could be better? Edge cases found?]".into(),
                "[Pattern description]".into(),
                "[Could this become a skill? Used in other projects?]".into(),
            ],
        }
    }
}

// ── Validator ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Directory holding one sub-directory per skill. Relative paths resolve
    /// against the directory of the `skillscan` executable.
    pub skills_dir: PathBuf,
    pub max_name_len: usize,
    pub max_description_len: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            skills_dir: PathBuf::from("claude-skills"),
            max_name_len: 64,
            max_description_len: 1024,
        }
    }
}

// ── Logging ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub level: String,
    /// Output format: "pretty" or "json".
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

// ── Catalog ────────────────────────────────────────────────────

/// A regular expression and the label its matches are grouped under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternDef {
    pub pattern: String,
    pub label: String,
}

impl PatternDef {
    pub fn new(pattern: &str, label: &str) -> Self {
        Self {
            pattern: pattern.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Skill identifiers whose usage is tracked.
    pub known_skills: Vec<String>,
    /// Regex templates naming a skill; `{skill}` is replaced by the identifier.
    pub reference_templates: Vec<String>,
    /// Instruction-like phrases mined for new skill candidates.
    pub instruction_patterns: Vec<PatternDef>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            known_skills: [
                "pr-review",
                "debugging-routine",
                "youtube-channel-analysis",
                "ai-router-delegation",
                "spec-driven-developer",
                "audit-whisperer",
                "financial-integrity-guard",
                "tax-discovery-engine",
                "staged-prompt-engineering",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            reference_templates: [
                "playbooks/{skill}",
                "claude-skills/{skill}",
                "cursor-rules/{skill}",
                "{skill}/README",
                "{skill}/SKILL",
                "{skill}/RULE",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            instruction_patterns: vec![
                PatternDef::new(r"playbooks/[\w-]+/", "Playbook reference"),
                PatternDef::new(r"agent-skills-library", "Skills library reference"),
                PatternDef::new(r"SKILL\.md", "Skill file reference"),
                PatternDef::new(
                    r"when (reviewing|debugging|analyzing)",
                    "Conditional workflow trigger",
                ),
                PatternDef::new(
                    r"follow (the|this) (process|playbook|routine)",
                    "Process reference",
                ),
                PatternDef::new(r"use (the|this) (checklist|template|format)", "Template usage"),
                PatternDef::new(r"always (check|verify|ensure|validate)", "Validation requirement"),
                PatternDef::new(r"never (commit|push|deploy) without", "Safety gate"),
                PatternDef::new(r"Claude should", "Claude-specific instruction"),
                PatternDef::new(r"AI assistant", "AI instruction"),
                PatternDef::new(r"when asked to", "AI trigger phrase"),
            ],
        }
    }
}

// ── Validation ─────────────────────────────────────────────────

/// A config validation finding.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub field: String,
    pub message: String,
    pub severity: WarningSeverity,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let icon = match self.severity {
            WarningSeverity::Error => "❌",
            WarningSeverity::Warning => "⚠️ ",
            WarningSeverity::Info => "💡",
        };
        write!(f, "{} {}: {}", icon, self.field, self.message)?;
        if let Some(ref h) = self.hint {
            write!(f, "\n   ↳ {}", h)?;
        }
        Ok(())
    }
}

impl ScanConfig {
    /// Validate the config and return a list of warnings.
    /// Returns `Err` with all messages joined if any severity is Error.
    pub fn validate(&self) -> Result<Vec<ConfigWarning>, String> {
        let mut warnings = Vec::new();

        // ── Thresholds ───
        let policy = &self.policy;
        if policy.candidate_min_projects == 0 {
            warnings.push(ConfigWarning {
                field: "policy.candidate_min_projects".into(),
                message: "threshold is 0: every label would be a candidate".into(),
                severity: WarningSeverity::Error,
                hint: Some("Set to 2 to require a pattern in at least two projects".into()),
            });
        } else if policy.candidate_min_projects == 1 {
            warnings.push(ConfigWarning {
                field: "policy.candidate_min_projects".into(),
                message: "threshold is 1: single-project patterns become candidates".into(),
                severity: WarningSeverity::Warning,
                hint: Some("Candidates are meant to be repeated across projects".into()),
            });
        }
        if policy.proven_min_projects < policy.candidate_min_projects {
            warnings.push(ConfigWarning {
                field: "policy.proven_min_projects".into(),
                message: format!(
                    "proven threshold {} is below candidate threshold {}",
                    policy.proven_min_projects, policy.candidate_min_projects
                ),
                severity: WarningSeverity::Error,
                hint: Some("Proven must be at least the candidate threshold".into()),
            });
        }
        if policy.max_evidence == 0 {
            warnings.push(ConfigWarning {
                field: "policy.max_evidence".into(),
                message: "no evidence will be attached to candidates".into(),
                severity: WarningSeverity::Warning,
                hint: Some("Set to e.g. 5".into()),
            });
        }
        if policy.match_context_chars == 0 || policy.reference_context_chars == 0 {
            warnings.push(ConfigWarning {
                field: "policy.*_context_chars".into(),
                message: "context length is 0: reports will show empty snippets".into(),
                severity: WarningSeverity::Warning,
                hint: None,
            });
        }

        // ── Catalog ───
        for (i, def) in self.catalog.instruction_patterns.iter().enumerate() {
            if let Err(e) = regex::Regex::new(&def.pattern) {
                warnings.push(ConfigWarning {
                    field: format!("catalog.instruction_patterns[{i}]"),
                    message: format!("pattern '{}' does not compile: {}", def.pattern, e),
                    severity: WarningSeverity::Error,
                    hint: None,
                });
            }
            if def.label.trim().is_empty() {
                warnings.push(ConfigWarning {
                    field: format!("catalog.instruction_patterns[{i}]"),
                    message: format!("pattern '{}' has an empty label", def.pattern),
                    severity: WarningSeverity::Error,
                    hint: Some("Candidates are grouped by label".into()),
                });
            }
        }
        for (i, template) in self.catalog.reference_templates.iter().enumerate() {
            if !template.contains(SKILL_PLACEHOLDER) {
                warnings.push(ConfigWarning {
                    field: format!("catalog.reference_templates[{i}]"),
                    message: format!(
                        "template '{template}' has no {SKILL_PLACEHOLDER} placeholder"
                    ),
                    severity: WarningSeverity::Error,
                    hint: Some("e.g. 'playbooks/{skill}'".into()),
                });
            } else if let Err(e) = regex::Regex::new(&template.replace(SKILL_PLACEHOLDER, "x")) {
                warnings.push(ConfigWarning {
                    field: format!("catalog.reference_templates[{i}]"),
                    message: format!("template '{template}' does not compile: {e}"),
                    severity: WarningSeverity::Error,
                    hint: None,
                });
            }
        }
        if self.catalog.known_skills.is_empty() {
            warnings.push(ConfigWarning {
                field: "catalog.known_skills".into(),
                message: "no known skills: usage section will be empty".into(),
                severity: WarningSeverity::Info,
                hint: None,
            });
        }
        if self.catalog.instruction_patterns.is_empty() {
            warnings.push(ConfigWarning {
                field: "catalog.instruction_patterns".into(),
                message: "no instruction patterns: no candidates can be found".into(),
                severity: WarningSeverity::Info,
                hint: None,
            });
        }

        // ── Logging ───
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.level".into(),
                message: format!("unknown log level '{}'", self.logging.level),
                severity: WarningSeverity::Warning,
                hint: Some(format!("Valid values: {}", valid_levels.join(", "))),
            });
        }
        if !["pretty", "json"].contains(&self.logging.format.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.format".into(),
                message: format!("unknown log format '{}'", self.logging.format),
                severity: WarningSeverity::Warning,
                hint: Some("Valid values: pretty, json".into()),
            });
        }

        let errors: Vec<String> = warnings
            .iter()
            .filter(|w| w.severity == WarningSeverity::Error)
            .map(|w| w.to_string())
            .collect();
        if !errors.is_empty() {
            return Err(errors.join("\n"));
        }

        Ok(warnings)
    }
}
