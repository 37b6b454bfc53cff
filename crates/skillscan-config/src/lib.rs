//! # skillscan-config
//!
//! Configuration for the skillscan tools. Reads `skillscan.toml` (explicit
//! path, else the working directory) and falls back to built-in defaults.
//!
//! Every catalog the scanners use lives here as data: instruction patterns,
//! known skills, reference templates, file lists, feedback headings and the
//! policy thresholds. Extending a catalog never requires touching the
//! matching code.

pub mod loader;
pub mod schema;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use schema::ScanConfig;
pub use schema::{
    CatalogConfig, ConfigWarning, DetectorConfig, FeedbackConfig, LoggingConfig, PatternDef,
    PolicyConfig, ValidatorConfig, WarningSeverity, SKILL_PLACEHOLDER,
};
