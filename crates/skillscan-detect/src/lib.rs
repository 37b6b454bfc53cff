//! # skillscan-detect
//!
//! Mines a directory of projects for two things:
//!
//! - **Skill usage**: which projects reference each known skill, and where.
//! - **Skill candidates**: instruction-like phrases that recur across
//!   projects and could be promoted into a skill of their own.
//!
//! It also collects hand-written skill feedback from each project's
//! `00_Index_*.md` files.
//!
//! ## Pipeline
//!
//! ```text
//! locator ──► usage ─────────────────────────┐
//!        └──► instructions ──► aggregate ────┼──► Report ──► JSON / text
//!        └──► feedback ──────────────────────┘
//! ```
//!
//! Every stage is read-only and single-pass. Unreadable files count as
//! "nothing found"; only a missing projects root is an error.

pub mod aggregate;
pub mod catalog;
pub mod detector;
pub mod feedback;
pub mod instructions;
pub mod locator;
pub mod matcher;
pub mod render;
pub mod report;
pub mod usage;

pub use catalog::{PatternCatalog, ReferenceCatalog};
pub use detector::Detector;
pub use report::Report;
