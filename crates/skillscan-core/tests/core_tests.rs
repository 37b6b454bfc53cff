#[cfg(test)]
mod tests {
    use skillscan_core::*;
    use std::path::PathBuf;

    fn reference(project: &str, line: usize) -> SkillReference {
        SkillReference {
            project: project.into(),
            file: "CLAUDE.md".into(),
            line,
            context: "see playbooks/pr-review".into(),
        }
    }

    // ── Project tests ──────────────────────────────────────────

    #[test]
    fn test_project_name_is_basename() {
        let p = Project::new(PathBuf::from("/home/me/projects/alpha"));
        assert_eq!(p.name, "alpha");
        assert_eq!(p.path, PathBuf::from("/home/me/projects/alpha"));
    }

    // ── SkillUsage tests ───────────────────────────────────────

    #[test]
    fn test_usage_project_listed_once() {
        let mut usage = SkillUsage::new("pr-review");
        usage.add_project("alpha", vec![reference("alpha", 1), reference("alpha", 7)]);
        usage.add_project("alpha", vec![reference("alpha", 9)]);
        assert_eq!(usage.projects, vec!["alpha"]);
        assert_eq!(usage.references.len(), 3);
        assert_eq!(usage.project_count(), 1);
    }

    #[test]
    fn test_usage_ignores_empty_reference_lists() {
        let mut usage = SkillUsage::new("pr-review");
        usage.add_project("alpha", vec![]);
        assert!(usage.projects.is_empty());
        assert_eq!(usage.project_count(), 0);
    }

    #[test]
    fn test_usage_serializes_project_count() {
        let mut usage = SkillUsage::new("pr-review");
        usage.add_project("alpha", vec![reference("alpha", 3)]);
        usage.add_project("beta", vec![reference("beta", 4)]);

        let json = serde_json::to_value(&usage).unwrap();
        assert_eq!(json["project_count"], 2);
        assert_eq!(json["projects"], serde_json::json!(["alpha", "beta"]));
        assert_eq!(json["references"][1]["line"], 4);
        assert!(json.get("skill_name").is_none());
    }

    // ── Confidence / feedback tests ────────────────────────────

    #[test]
    fn test_confidence_display_and_serde() {
        assert_eq!(Confidence::Proven.to_string(), "Proven");
        assert_eq!(Confidence::Emerging.to_string(), "Emerging");
        assert_eq!(serde_json::to_string(&Confidence::Emerging).unwrap(), "\"Emerging\"");
        assert_eq!(Confidence::Proven.badge(), "🟢");
    }

    #[test]
    fn test_feedback_kind_snake_case() {
        assert_eq!(
            serde_json::to_string(&FeedbackKind::NewPattern).unwrap(),
            "\"new_pattern\""
        );
    }

    // ── Error tests ────────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let err = SkillscanError::ProjectsRootNotFound(PathBuf::from("/nope"));
        assert!(err.to_string().contains("/nope"));

        let err = SkillscanError::ValidationFailed { failed: 2, total: 5 };
        assert_eq!(err.to_string(), "2/5 skills failed validation");

        let err = SkillscanError::InvalidPattern {
            pattern: "(".into(),
            reason: "unclosed group".into(),
        };
        assert!(err.to_string().contains("unclosed group"));
    }

    #[test]
    fn test_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: SkillscanError = io.into();
        assert!(err.to_string().contains("gone"));
    }
}
