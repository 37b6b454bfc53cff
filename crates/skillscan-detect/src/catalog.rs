//! Compiled forms of the pattern and skill catalogs from the config.

use regex::{Regex, RegexBuilder};
use skillscan_config::{CatalogConfig, PatternDef, SKILL_PLACEHOLDER};
use skillscan_core::{Result, SkillscanError};

fn compile(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| SkillscanError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })
}

/// A labelled, compiled instruction pattern.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub regex: Regex,
    pub label: String,
}

impl CompiledPattern {
    /// The regex source as written in the catalog.
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }
}

/// The instruction pattern table, matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct PatternCatalog {
    patterns: Vec<CompiledPattern>,
}

impl PatternCatalog {
    pub fn compile(defs: &[PatternDef]) -> Result<Self> {
        let patterns = defs
            .iter()
            .map(|def| {
                Ok(CompiledPattern {
                    regex: compile(&def.pattern)?,
                    label: def.label.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledPattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Reference-shape regexes for one known skill.
#[derive(Debug, Clone)]
pub struct SkillPatterns {
    pub skill: String,
    templates: Vec<Regex>,
}

impl SkillPatterns {
    /// Build the reference regexes for `skill`. The identifier is escaped, so it
    /// only ever matches literally.
    pub fn new(skill: &str, templates: &[String]) -> Result<Self> {
        let escaped = regex::escape(skill);
        let templates = templates
            .iter()
            .map(|t| compile(&t.replace(SKILL_PLACEHOLDER, &escaped)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            skill: skill.to_string(),
            templates,
        })
    }

    /// True when any template matches. Stops at the first hit.
    pub fn matches(&self, line: &str) -> bool {
        self.templates.iter().any(|re| re.is_match(line))
    }
}

/// Reference patterns for every known skill, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct ReferenceCatalog {
    skills: Vec<SkillPatterns>,
}

impl ReferenceCatalog {
    pub fn compile(catalog: &CatalogConfig) -> Result<Self> {
        let skills = catalog
            .known_skills
            .iter()
            .map(|s| SkillPatterns::new(s, &catalog.reference_templates))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { skills })
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillPatterns> {
        self.skills.iter()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}
