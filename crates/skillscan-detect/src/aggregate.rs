//! Cross-project grouping of instruction matches into skill candidates.

use skillscan_config::PolicyConfig;
use skillscan_core::{Confidence, Evidence, SkillCandidate};
use std::collections::HashMap;

use crate::instructions::ProjectMatches;

/// Group matches by label and keep labels seen in enough distinct projects.
///
/// - projects are deduplicated in first-seen order
/// - evidence is the first `max_evidence` occurrences, repeats included
/// - output is sorted by distinct project count, descending; ties keep
///   discovery order
pub fn find_repeated_patterns(
    by_project: &[ProjectMatches],
    policy: &PolicyConfig,
) -> Vec<SkillCandidate> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<Evidence>)> = Vec::new();

    for entry in by_project {
        for m in &entry.matches {
            let slot = *index.entry(m.label.as_str()).or_insert_with(|| {
                groups.push((m.label.as_str(), Vec::new()));
                groups.len() - 1
            });
            groups[slot].1.push(Evidence {
                project: entry.project.clone(),
                file: m.file.clone(),
                context: m.context.clone(),
            });
        }
    }

    let mut candidates: Vec<SkillCandidate> = groups
        .into_iter()
        .filter_map(|(label, occurrences)| {
            let mut projects: Vec<String> = Vec::new();
            for o in &occurrences {
                if !projects.contains(&o.project) {
                    projects.push(o.project.clone());
                }
            }
            if projects.len() < policy.candidate_min_projects {
                return None;
            }
            let confidence = if projects.len() >= policy.proven_min_projects {
                Confidence::Proven
            } else {
                Confidence::Emerging
            };
            Some(SkillCandidate {
                pattern: label.to_string(),
                description: format!("Pattern found in {} projects", projects.len()),
                projects,
                confidence,
                evidence: occurrences.into_iter().take(policy.max_evidence).collect(),
            })
        })
        .collect();

    // sort_by is stable
    candidates.sort_by(|a, b| b.projects.len().cmp(&a.projects.len()));
    candidates
}
