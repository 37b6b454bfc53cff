//! Human-readable rendering of a [`Report`].

use console::style;
use skillscan_config::PolicyConfig;
use skillscan_core::{AGENT_SKILLS_SPEC_URL, Confidence};
use std::io::{self, Write};

use crate::report::Report;

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Write the categorized text report.
pub fn render_text<W: Write>(
    report: &Report,
    policy: &PolicyConfig,
    out: &mut W,
) -> io::Result<()> {
    let promote_at = policy.promotion_project_count;

    writeln!(out)?;
    writeln!(out, "{}", style("Skill Detection Report").bold())?;
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out, "Specification: {AGENT_SKILLS_SPEC_URL}")?;
    writeln!(out, "{}", "=".repeat(60))?;

    // ── Usage ───
    writeln!(out)?;
    writeln!(out, "{}", style("📊 Skill Usage Across Projects").bold().cyan())?;
    writeln!(out)?;
    for usage in report.usage_by_count() {
        let count = usage.project_count();
        let status = if count == 0 {
            style("Not used".to_string()).red()
        } else if count < promote_at {
            style(format!("🔵 {}", plural(count, "project"))).yellow()
        } else if count == promote_at {
            style(format!("🟡 {}", plural(count, "project"))).yellow()
        } else {
            style(format!("🟢 {}", plural(count, "project"))).green()
        };
        writeln!(out, "  {:30} {}", usage.skill_name, status)?;
        if !usage.projects.is_empty() {
            let shown: Vec<&str> = usage.projects.iter().take(5).map(String::as_str).collect();
            writeln!(out, "    └─ {}", shown.join(", "))?;
        }
    }

    // ── Promotion ───
    writeln!(out)?;
    writeln!(out, "{}", style("🚀 Promotion Candidates (🟡 → 🟢)").bold().cyan())?;
    writeln!(out)?;
    let promotable = report.promotable(promote_at);
    if promotable.is_empty() {
        writeln!(
            out,
            "  {}",
            style(format!(
                "No skills ready for promotion (none used in exactly {})",
                plural(promote_at, "project")
            ))
            .green()
        )?;
    } else {
        let missing = policy.proven_min_projects.saturating_sub(promote_at).max(1);
        for usage in &promotable {
            writeln!(out, "  {}", style(format!("• {}", usage.skill_name)).yellow())?;
            writeln!(out, "    Used in: {}", usage.projects.join(", "))?;
            let noun = if missing == 1 { "project" } else { "projects" };
            writeln!(out, "    Action: Apply to {missing} more {noun} to promote to 🟢")?;
        }
    }

    // ── Candidates ───
    writeln!(out)?;
    writeln!(out, "{}", style("💡 New Skill Candidates (Repeated Patterns)").bold().cyan())?;
    writeln!(out)?;
    if report.candidates.is_empty() {
        writeln!(out, "  {}", style("No new patterns detected").green())?;
    } else {
        for candidate in report.candidates.iter().take(policy.top_candidates) {
            let headline = format!(
                "{} {}: {}",
                candidate.confidence.badge(),
                candidate.confidence,
                candidate.pattern
            );
            let headline = match candidate.confidence {
                Confidence::Proven => style(headline).green(),
                Confidence::Emerging => style(headline).yellow(),
            };
            writeln!(out, "  {headline}")?;
            let shown: Vec<&str> = candidate.projects.iter().take(5).map(String::as_str).collect();
            writeln!(out, "    Found in: {}", shown.join(", "))?;
            if let Some(first) = candidate.evidence.first() {
                let example: String = first.context.chars().take(60).collect();
                writeln!(out, "    Example: \"{example}...\"")?;
            }
            writeln!(out)?;
        }
    }

    // ── Feedback ───
    writeln!(out)?;
    writeln!(out, "{}", style("📝 Skill Feedback from Projects").bold().cyan())?;
    writeln!(out)?;
    let fb = &report.feedback;
    if fb.improvements.is_empty() {
        writeln!(out, "  {}", style("No improvement suggestions found in 00_Index files").green())?;
        writeln!(out, "  (Add feedback to 00_Index_*.md → 'Skill Feedback' section)")?;
    } else {
        writeln!(out, "  {}", style("Improvement Suggestions:").bold())?;
        for item in &fb.improvements {
            let bullet = style(format!("• {}", item.skill)).yellow();
            writeln!(out, "    {} (from {})", bullet, item.project)?;
            writeln!(out, "      \"{}\"", item.feedback)?;
        }
    }
    writeln!(out)?;
    if fb.new_patterns.is_empty() {
        writeln!(out, "  {}", style("No new pattern proposals found").green())?;
        writeln!(out, "  (Add ideas to 00_Index_*.md → 'New patterns emerging' section)")?;
    } else {
        writeln!(out, "  {}", style("New Patterns Proposed:").bold())?;
        for item in &fb.new_patterns {
            let bullet = style(format!("• {}", item.pattern)).yellow();
            writeln!(out, "    {} (from {})", bullet, item.project)?;
            writeln!(out, "      \"{}\"", item.notes)?;
        }
    }

    // ── Summary ───
    writeln!(out)?;
    writeln!(out, "{}", style("Summary").bold())?;
    writeln!(out, "  Skills tracked: {}", report.skill_usage.len())?;
    writeln!(out, "  Skills in use: {}", report.skills_in_use())?;
    writeln!(out, "  Promotion candidates: {}", promotable.len())?;
    writeln!(out, "  New pattern candidates: {}", report.candidates.len())?;
    writeln!(out, "  Improvement suggestions: {}", fb.improvements.len())?;
    writeln!(out, "  New pattern proposals: {}", fb.new_patterns.len())?;
    writeln!(out)?;
    Ok(())
}
