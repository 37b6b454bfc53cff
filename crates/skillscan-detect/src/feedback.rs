//! Skill feedback harvested from project index files.
//!
//! Index files (`00_Index_*.md`) carry two hand-written sections:
//!
//! ```markdown
//! ### Skill Feedback
//! - pr-review: the checklist misses migration files
//!
//! ### New patterns emerging
//! - Release notes drafting: used in three repos already
//! ```
//!
//! The parser is a three-state machine scanned strictly forward. Heading
//! triggers switch section, `## ` and `---` lines close it, and bullets of the
//! form `- subject: text` inside a section become entries.

use skillscan_config::FeedbackConfig;
use skillscan_core::text::read_lossy;
use skillscan_core::{FeedbackEntry, FeedbackKind, Project};
use tracing::debug;

use crate::locator::glob_files;

/// Which feedback section the scanner is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Outside,
    Improvements,
    NewPatterns,
}

impl Section {
    fn kind(self) -> Option<FeedbackKind> {
        match self {
            Section::Outside => None,
            Section::Improvements => Some(FeedbackKind::Improvement),
            Section::NewPatterns => Some(FeedbackKind::NewPattern),
        }
    }
}

/// What a trimmed line means to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent<'a> {
    OpenImprovements,
    OpenNewPatterns,
    Boundary,
    Bullet { subject: &'a str, text: &'a str },
    Other,
}

/// Parses the feedback sections of index files.
pub struct FeedbackParser<'a> {
    config: &'a FeedbackConfig,
}

impl<'a> FeedbackParser<'a> {
    pub fn new(config: &'a FeedbackConfig) -> Self {
        Self { config }
    }

    /// Classify one trimmed line. Heading triggers take precedence over the
    /// boundary markers, so `## Skill Feedback` opens a section.
    pub fn classify<'l>(&self, line: &'l str) -> LineEvent<'l> {
        if self.config.improvement_headings.iter().any(|h| line.contains(h.as_str())) {
            return LineEvent::OpenImprovements;
        }
        if self.config.new_pattern_headings.iter().any(|h| line.contains(h.as_str())) {
            return LineEvent::OpenNewPatterns;
        }
        if line.starts_with("## ") || line.starts_with("---") {
            return LineEvent::Boundary;
        }
        if let Some(rest) = line.strip_prefix("- ") {
            if let Some((subject, text)) = rest.split_once(':') {
                return LineEvent::Bullet {
                    subject: subject.trim(),
                    text: text.trim(),
                };
            }
        }
        LineEvent::Other
    }

    /// Apply one line to the current state, returning the next state and any entry.
    pub fn step(
        &self,
        state: Section,
        line: &str,
        project: &str,
    ) -> (Section, Option<FeedbackEntry>) {
        match self.classify(line) {
            LineEvent::OpenImprovements => (Section::Improvements, None),
            LineEvent::OpenNewPatterns => (Section::NewPatterns, None),
            LineEvent::Boundary => (Section::Outside, None),
            LineEvent::Bullet { subject, text } => {
                let entry = state
                    .kind()
                    .filter(|&kind| self.accepts(kind, subject, text))
                    .map(|kind| FeedbackEntry {
                        kind,
                        subject: subject.to_string(),
                        project: project.to_string(),
                        text: text.to_string(),
                    });
                (state, entry)
            }
            LineEvent::Other => (state, None),
        }
    }

    /// Parse a whole index file.
    pub fn parse(&self, content: &str, project: &str) -> Vec<FeedbackEntry> {
        let mut state = Section::default();
        let mut entries = Vec::new();
        for line in content.lines() {
            let (next, entry) = self.step(state, line.trim(), project);
            state = next;
            entries.extend(entry);
        }
        entries
    }

    /// Text must be filled in. An improvement may leave its skill blank, a new
    /// pattern may not; neither may keep a template placeholder.
    fn accepts(&self, kind: FeedbackKind, subject: &str, text: &str) -> bool {
        let subject_ok = match kind {
            FeedbackKind::Improvement => !self.is_placeholder(subject),
            FeedbackKind::NewPattern => !subject.is_empty() && !self.is_placeholder(subject),
        };
        subject_ok && !text.is_empty() && !self.is_placeholder(text)
    }

    fn is_placeholder(&self, value: &str) -> bool {
        self.config.placeholders.iter().any(|p| p == value)
    }
}

/// Feedback from every project's index files, in project then file order.
pub fn collect_feedback(
    projects: &[Project],
    index_glob: &str,
    config: &FeedbackConfig,
) -> Vec<FeedbackEntry> {
    let parser = FeedbackParser::new(config);
    let mut entries = Vec::new();
    for project in projects {
        for index_file in glob_files(&project.path, index_glob) {
            let Some(content) = read_lossy(&index_file) else {
                continue;
            };
            let found = parser.parse(&content, &project.name);
            if !found.is_empty() {
                debug!(
                    project = %project.name,
                    file = ?index_file,
                    count = found.len(),
                    "feedback collected"
                );
            }
            entries.extend(found);
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Vec<FeedbackEntry> {
        let config = FeedbackConfig::default();
        FeedbackParser::new(&config).parse(content, "alpha")
    }

    #[test]
    fn bullet_under_improvement_heading() {
        let entries = parse("### Skill Feedback\n- foo: bar\n");
        assert_eq!(
            entries,
            vec![FeedbackEntry {
                kind: FeedbackKind::Improvement,
                subject: "foo".into(),
                project: "alpha".into(),
                text: "bar".into(),
            }]
        );
    }

    #[test]
    fn bullet_outside_any_section_is_ignored() {
        assert!(parse("# Index\n- foo: bar\n").is_empty());
    }

    #[test]
    fn boundary_closes_section() {
        assert!(parse("### Skill Feedback\n---\n- foo: bar\n").is_empty());
        assert!(parse("### Skill Feedback\n## Next steps\n- foo: bar\n").is_empty());
    }

    #[test]
    fn subheading_does_not_close_section() {
        let entries =
            parse("**Improvements suggested**\n### pr-review\n- pr-review: add a diff step\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "add a diff step");
    }

    #[test]
    fn heading_line_with_boundary_marker_still_opens() {
        let entries = parse("## Skill Feedback\n- debugging-routine: needs a bisect step\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].subject, "debugging-routine");
    }

    #[test]
    fn switching_between_sections() {
        let content = "\
### Skill Feedback
- pr-review: too long
### New patterns emerging
- Changelog drafting: used in beta too
### Improvements suggested
- audit-whisperer: more examples
";
        let entries = parse(content);
        let kinds: Vec<FeedbackKind> = entries.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                FeedbackKind::Improvement,
                FeedbackKind::NewPattern,
                FeedbackKind::Improvement
            ]
        );
        assert_eq!(entries[1].subject, "Changelog drafting");
        assert_eq!(entries[1].text, "used in beta too");
    }

    #[test]
    fn placeholders_and_empty_text_are_dropped() {
        let content = "\
### Skill Feedback
- pr-review: [What could be better? Edge cases found?]
- pr-review:
- no colon here
### New patterns emerging
- [Pattern description]: [Could this become a skill? Used in other projects?]
- Real pattern: [Could this become a skill? Used in other projects?]
- [Pattern description]: real notes
";
        assert!(parse(content).is_empty());
    }

    #[test]
    fn blank_subject_kept_for_improvements_only() {
        let entries = parse("### Skill Feedback\n- : real feedback\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, FeedbackKind::Improvement);
        assert_eq!(entries[0].subject, "");
        assert_eq!(entries[0].text, "real feedback");

        assert!(parse("### New patterns emerging\n- : real notes\n").is_empty());
    }

    #[test]
    fn splits_on_first_colon_only() {
        let entries = parse("### Skill Feedback\n- pr-review: see https://example.com: now\n");
        assert_eq!(entries[0].text, "see https://example.com: now");
    }

    #[test]
    fn step_is_testable_in_isolation() {
        let config = FeedbackConfig::default();
        let parser = FeedbackParser::new(&config);
        let (state, entry) = parser.step(Section::Outside, "New patterns emerging", "p");
        assert_eq!(state, Section::NewPatterns);
        assert!(entry.is_none());
        let (state, entry) = parser.step(state, "- idea: notes", "p");
        assert_eq!(state, Section::NewPatterns);
        assert_eq!(entry.unwrap().kind, FeedbackKind::NewPattern);
        let (state, _) = parser.step(state, "---", "p");
        assert_eq!(state, Section::Outside);
    }

    #[test]
    fn collects_from_index_files() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("alpha");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("00_Index_Alpha.md"),
            "### Skill Feedback\n- pr-review: shorter\n",
        )
        .unwrap();
        std::fs::write(
            dir.join("Index_other.md"),
            "### Skill Feedback\n- pr-review: ignored\n",
        )
        .unwrap();

        let entries = collect_feedback(
            &[Project::new(dir)],
            "00_Index_*.md",
            &FeedbackConfig::default(),
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].project, "alpha");
        assert_eq!(entries[0].text, "shorter");
    }
}
