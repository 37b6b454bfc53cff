//! # skillscan-cli
//!
//! Command-line interface for skillscan.
//!
//! ## Commands
//!
//! - `skillscan detect`: Scan a projects root for skill usage and candidates
//! - `skillscan validate`: Validate SKILL.md definitions
//! - `skillscan config`: Show the effective configuration
//! - `skillscan completions`: Generate shell completions
//! - `skillscan version`: Show version and build info

pub mod commands;

pub use commands::Cli;
