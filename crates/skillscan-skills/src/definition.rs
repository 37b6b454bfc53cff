use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A skill definition parsed from a SKILL.md file.
///
/// Parsing is lenient: missing fields come back empty and are reported by
/// [`crate::rules`], so one file can yield several errors at once.
#[derive(Debug, Clone)]
pub struct SkillDefinition {
    /// `name` from the frontmatter (empty when absent).
    pub name: String,
    /// `description` from the frontmatter (empty when absent).
    pub description: String,
    /// Every `key: value` pair in the frontmatter.
    pub fields: HashMap<String, String>,
    /// The Markdown body after the closing delimiter.
    pub body: String,
    /// Path to the SKILL.md file.
    pub file_path: PathBuf,
    /// Directory the SKILL.md lives in.
    pub base_dir: PathBuf,
}

impl SkillDefinition {
    /// Parse a SKILL.md file. Returns the frontmatter errors on failure.
    pub fn from_file(path: &Path) -> Result<Self, Vec<String>> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| vec![format!("Cannot read {}: {}", path.display(), e)])?;
        let base_dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();
        Self::parse(&content, path.to_path_buf(), base_dir)
    }

    /// Parse SKILL.md content with known path info.
    pub fn parse(
        content: &str,
        file_path: PathBuf,
        base_dir: PathBuf,
    ) -> Result<Self, Vec<String>> {
        let (frontmatter, body) = split_frontmatter(content).map_err(|e| vec![e])?;
        let fields = parse_frontmatter(&frontmatter);

        Ok(Self {
            name: fields.get("name").cloned().unwrap_or_default(),
            description: fields.get("description").cloned().unwrap_or_default(),
            fields,
            body,
            file_path,
            base_dir,
        })
    }

    /// Name of the directory holding the SKILL.md.
    pub fn directory_name(&self) -> String {
        self.base_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Split a SKILL.md file into frontmatter and Markdown body.
fn split_frontmatter(content: &str) -> Result<(String, String), String> {
    if !content.starts_with("---") {
        return Err("Missing YAML frontmatter (must start with '---')".into());
    }

    // Find the closing ---
    let after_first = &content[3..];
    let end_pos = after_first
        .find("\n---")
        .ok_or_else(|| "Invalid YAML frontmatter (missing closing '---')".to_string())?;

    let frontmatter = after_first[..end_pos].trim().to_string();
    if frontmatter.is_empty() {
        return Err("Empty YAML frontmatter".into());
    }
    let body = after_first[end_pos + 4..].trim().to_string();

    Ok((frontmatter, body))
}

/// Parse `key: value` lines. Blank and `#` lines are skipped; a repeated key
/// keeps its last value.
fn parse_frontmatter(yaml: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    for line in yaml.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once(':') {
            fields.insert(key.trim().to_string(), unquote(value));
        }
    }
    fields
}

/// Remove surrounding quotes from a YAML value.
fn unquote(s: &str) -> String {
    let s = s.trim();
    if s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"')) || (s.starts_with('\'') && s.ends_with('\'')))
    {
        s[1..s.len() - 1].to_string()
    } else {
        s.to_string()
    }
}
