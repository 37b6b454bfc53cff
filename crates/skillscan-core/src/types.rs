use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::path::PathBuf;

/// A directory recognised as an independent codebase under the projects root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Directory basename.
    pub name: String,
    pub path: PathBuf,
}

impl Project {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { name, path }
    }
}

/// One line in one file that satisfied one instruction pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternMatch {
    pub file: String,
    /// 1-based line number.
    pub line: usize,
    /// Regex source that fired.
    pub pattern: String,
    /// Human-readable label of the pattern; candidates are grouped on this.
    pub label: String,
    pub context: String,
}

/// A line in a project file that names a known skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillReference {
    pub project: String,
    /// Path relative to the project directory.
    pub file: String,
    pub line: usize,
    pub context: String,
}

/// Where a known skill is referenced.
///
/// A project name appears at most once in `projects`, however many
/// references it contributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillUsage {
    pub skill_name: String,
    pub projects: Vec<String>,
    pub references: Vec<SkillReference>,
}

impl SkillUsage {
    pub fn new(skill_name: impl Into<String>) -> Self {
        Self {
            skill_name: skill_name.into(),
            ..Default::default()
        }
    }

    /// Record all references found in one project.
    pub fn add_project(&mut self, project: &str, references: Vec<SkillReference>) {
        if references.is_empty() {
            return;
        }
        if !self.projects.iter().any(|p| p == project) {
            self.projects.push(project.to_string());
        }
        self.references.extend(references);
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }
}

impl Serialize for SkillUsage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("SkillUsage", 3)?;
        s.serialize_field("projects", &self.projects)?;
        s.serialize_field("project_count", &self.project_count())?;
        s.serialize_field("references", &self.references)?;
        s.end()
    }
}

/// How firmly a candidate pattern is established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    Emerging,
    Proven,
}

impl Confidence {
    pub fn badge(self) -> &'static str {
        match self {
            Confidence::Emerging => "🟡",
            Confidence::Proven => "🟢",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::Emerging => write!(f, "Emerging"),
            Confidence::Proven => write!(f, "Proven"),
        }
    }
}

/// One occurrence backing a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    pub project: String,
    pub file: String,
    pub context: String,
}

/// A pattern label seen in enough distinct projects to propose a new skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCandidate {
    pub pattern: String,
    pub description: String,
    /// Distinct contributing projects, in first-seen order.
    pub projects: Vec<String>,
    pub confidence: Confidence,
    pub evidence: Vec<Evidence>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    Improvement,
    NewPattern,
}

/// A bullet parsed out of a project's index file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub kind: FeedbackKind,
    /// Skill name for improvements, pattern description for new patterns.
    pub subject: String,
    pub project: String,
    pub text: String,
}
