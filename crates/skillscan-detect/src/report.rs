//! The structured detection report.
//!
//! This is the single source both renderers read: `--output-json` serialises it
//! as-is, and the text report in [`crate::render`] is a projection of it.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use skillscan_core::{FeedbackEntry, FeedbackKind, Result, SkillCandidate, SkillUsage};

/// Per-skill usage, serialised as an object keyed by skill name in catalog order.
#[derive(Debug, Clone, Default)]
pub struct UsageTable(pub Vec<SkillUsage>);

impl UsageTable {
    pub fn iter(&self) -> impl Iterator<Item = &SkillUsage> {
        self.0.iter()
    }

    pub fn get(&self, skill: &str) -> Option<&SkillUsage> {
        self.0.iter().find(|u| u.skill_name == skill)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for UsageTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for usage in &self.0 {
            map.serialize_entry(&usage.skill_name, usage)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Improvement {
    pub skill: String,
    pub project: String,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternProposal {
    pub pattern: String,
    pub project: String,
    pub notes: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FeedbackReport {
    pub improvements: Vec<Improvement>,
    pub new_patterns: Vec<PatternProposal>,
}

impl From<&[FeedbackEntry]> for FeedbackReport {
    fn from(entries: &[FeedbackEntry]) -> Self {
        let mut report = FeedbackReport::default();
        for e in entries {
            match e.kind {
                FeedbackKind::Improvement => report.improvements.push(Improvement {
                    skill: e.subject.clone(),
                    project: e.project.clone(),
                    feedback: e.text.clone(),
                }),
                FeedbackKind::NewPattern => report.new_patterns.push(PatternProposal {
                    pattern: e.subject.clone(),
                    project: e.project.clone(),
                    notes: e.text.clone(),
                }),
            }
        }
        report
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub skill_usage: UsageTable,
    pub candidates: Vec<SkillCandidate>,
    pub feedback: FeedbackReport,
}

impl Report {
    pub fn new(
        skill_usage: Vec<SkillUsage>,
        candidates: Vec<SkillCandidate>,
        feedback: &[FeedbackEntry],
    ) -> Self {
        Self {
            skill_usage: UsageTable(skill_usage),
            candidates,
            feedback: FeedbackReport::from(feedback),
        }
    }

    /// Skills used in exactly `count` projects, in catalog order.
    pub fn promotable(&self, count: usize) -> Vec<&SkillUsage> {
        self.skill_usage
            .iter()
            .filter(|u| u.project_count() == count)
            .collect()
    }

    /// Skills referenced by at least one project.
    pub fn skills_in_use(&self) -> usize {
        self.skill_usage.iter().filter(|u| u.project_count() > 0).count()
    }

    /// Usage sorted by project count, descending; ties keep catalog order.
    pub fn usage_by_count(&self) -> Vec<&SkillUsage> {
        let mut sorted: Vec<&SkillUsage> = self.skill_usage.iter().collect();
        sorted.sort_by(|a, b| b.project_count().cmp(&a.project_count()));
        sorted
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
