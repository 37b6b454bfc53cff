use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for the skillscan tools.
///
/// Only fatal conditions live here. Unreadable files, missing optional
/// directories and undecodable content are not errors: scanners treat them as
/// "nothing found" and move on.
#[derive(Error, Debug)]
pub enum SkillscanError {
    // ── Precondition errors ────────────────────────────────────
    #[error("projects root not found: {}", .0.display())]
    ProjectsRootNotFound(PathBuf),

    #[error("skills directory not found: {}", .0.display())]
    SkillsDirNotFound(PathBuf),

    // ── Validation outcome ─────────────────────────────────────
    #[error("{failed}/{total} skills failed validation")]
    ValidationFailed { failed: usize, total: usize },

    // ── Catalog errors ─────────────────────────────────────────
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    // ── Config errors ──────────────────────────────────────────
    #[error("config error: {0}")]
    Config(String),

    // ── Generic wrappers ───────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SkillscanError>;
