//! # skillscan-skills
//!
//! Validates skill definitions. A skill is a directory holding a `SKILL.md`
//! file: YAML-style frontmatter followed by free-text instructions.
//!
//! ## SKILL.md Format
//!
//! ```markdown
//! ---
//! name: pr-review
//! description: Review a pull request against the team checklist
//! ---
//!
//! # PR Review
//!
//! ## Instructions
//! 1. Read the diff
//! 2. Walk the checklist
//! ```
//!
//! ## Rules
//!
//! - `name`: required, at most 64 characters, lowercase letters, digits and
//!   hyphens only, no leading/trailing or doubled hyphen, equal to the
//!   directory name
//! - `description`: required, at most 1024 characters
//!
//! Directories starting with `_` are templates and `.` are hidden; both are
//! skipped. Each skill is validated independently and every failure is
//! collected before the batch result is reported.

pub mod definition;
pub mod render;
pub mod rules;
pub mod validator;

pub use definition::SkillDefinition;
pub use render::render_summary;
pub use validator::{SkillFailure, SkillValidator, ValidationSummary};
