//! Text report for a [`ValidationSummary`].

use console::style;
use skillscan_core::AGENT_SKILLS_SPEC_URL;
use std::io::{self, Write};

use crate::validator::ValidationSummary;

pub fn render_summary<W: Write>(summary: &ValidationSummary, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style("Agent Skills Validation Report").bold())?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "Specification: {AGENT_SKILLS_SPEC_URL}")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out)?;

    if summary.is_success() {
        writeln!(
            out,
            "{}",
            style(format!("✅ All {} skills pass validation!", summary.total())).green()
        )?;
        writeln!(out)?;
    } else {
        writeln!(
            out,
            "{}",
            style(format!(
                "❌ {}/{} skills have issues",
                summary.failed,
                summary.total()
            ))
            .red()
        )?;
        writeln!(out)?;
        for failure in &summary.failures {
            writeln!(out, "{}", style(format!("• {}/", failure.skill)).red())?;
            for error in &failure.errors {
                writeln!(out, "  {}", style(format!("⚠ {error}")).yellow())?;
            }
            writeln!(out)?;
        }
    }

    writeln!(out, "{}", style("Summary:").bold())?;
    writeln!(out, "  {}", style(format!("Passed: {}", summary.passed)).green())?;
    writeln!(out, "  {}", style(format!("Failed: {}", summary.failed)).red())?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::SkillFailure;

    fn render(summary: &ValidationSummary) -> String {
        console::set_colors_enabled(false);
        let mut buf = Vec::new();
        render_summary(summary, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn all_pass() {
        let text = render(&ValidationSummary {
            passed: 3,
            ..Default::default()
        });
        assert!(text.contains("Agent Skills Validation Report"));
        assert!(text.contains("✅ All 3 skills pass validation!"));
        assert!(text.contains("Passed: 3"));
        assert!(text.contains("Failed: 0"));
    }

    #[test]
    fn failures_listed() {
        let text = render(&ValidationSummary {
            passed: 1,
            failed: 1,
            failures: vec![SkillFailure {
                skill: "pr-review".into(),
                errors: vec!["Missing SKILL.md file".into()],
            }],
        });
        assert!(text.contains("❌ 1/2 skills have issues"));
        assert!(text.contains("• pr-review/"));
        assert!(text.contains("  ⚠ Missing SKILL.md file"));
    }
}
