use std::io::Write;
use std::path::PathBuf;

use skillscan_config::ScanConfig;
use skillscan_core::{Result, SkillscanError};
use skillscan_detect::Detector;
use skillscan_detect::render::render_text;

/// `skillscan detect`: scan the projects root and print the report.
pub(super) fn cmd_detect(
    config: &ScanConfig,
    projects_root: Option<PathBuf>,
    output_json: bool,
) -> Result<()> {
    let root = projects_root.unwrap_or_else(|| config.detector.projects_root.clone());
    if !root.exists() {
        return Err(SkillscanError::ProjectsRootNotFound(root));
    }
    let detector = Detector::from_config(config)?;

    if !output_json {
        println!("Scanning projects in: {}", root.display());
    }

    let report = detector.run(&root)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if output_json {
        writeln!(out, "{}", report.to_json()?)?;
    } else {
        render_text(&report, detector.policy(), &mut out)?;
    }
    Ok(())
}
