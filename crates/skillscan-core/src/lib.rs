//! # skillscan-core
//!
//! Core types and primitives shared by the skillscan tools. This crate defines
//! the vocabulary (projects, matches, usage records, candidates, feedback)
//! that the detector, the validator and the CLI exchange.

pub mod error;
pub mod text;
pub mod types;

pub use error::{Result, SkillscanError};
pub use types::*;

/// Public Agent Skills format reference, printed in report headers.
pub const AGENT_SKILLS_SPEC_URL: &str = "https://agentskills.io/specification";
