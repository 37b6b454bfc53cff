use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use skillscan_config::ScanConfig;
use skillscan_core::{Result, SkillscanError};
use skillscan_skills::{SkillValidator, render_summary};

/// `skillscan validate`: validate every skill and print the report.
///
/// Fails with `ValidationFailed` after printing when any skill has errors.
pub(super) fn cmd_validate(
    config: &ScanConfig,
    skills_dir: Option<PathBuf>,
    fix: bool,
) -> Result<()> {
    if fix {
        warn!("--fix is not implemented yet; reporting only");
    }

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    let mut validator_config = config.validator.clone();
    validator_config.skills_dir =
        resolve_skills_dir(&config.validator.skills_dir, skills_dir, exe_dir.as_deref());
    debug!(skills_dir = ?validator_config.skills_dir, "resolved skills directory");

    if !validator_config.skills_dir.is_dir() {
        return Err(SkillscanError::SkillsDirNotFound(validator_config.skills_dir));
    }
    let validator = SkillValidator::new(validator_config);

    println!("Validating skills in: {}", validator.skills_dir().display());
    let summary = validator.validate_all()?;

    render_summary(&summary, &mut std::io::stdout().lock())?;
    summary.into_result().map(|_| ())
}

/// `--skills-dir` is taken as given. A relative configured directory sits
/// beside the executable rather than under the working directory.
fn resolve_skills_dir(
    configured: &Path,
    explicit: Option<PathBuf>,
    exe_dir: Option<&Path>,
) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }
    match exe_dir {
        Some(base) if configured.is_relative() => base.join(configured),
        _ => configured.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let dir = resolve_skills_dir(
            Path::new("claude-skills"),
            Some(PathBuf::from("my-skills")),
            Some(Path::new("/opt/skillscan/bin")),
        );
        assert_eq!(dir, PathBuf::from("my-skills"));
    }

    #[test]
    fn relative_default_sits_beside_executable() {
        let dir = resolve_skills_dir(
            Path::new("claude-skills"),
            None,
            Some(Path::new("/opt/skillscan/bin")),
        );
        assert_eq!(dir, PathBuf::from("/opt/skillscan/bin/claude-skills"));
    }

    #[test]
    fn absolute_configured_dir_is_kept() {
        let dir = resolve_skills_dir(
            Path::new("/srv/skills"),
            None,
            Some(Path::new("/opt/skillscan/bin")),
        );
        assert_eq!(dir, PathBuf::from("/srv/skills"));
    }

    #[test]
    fn unknown_executable_falls_back_to_configured() {
        let dir = resolve_skills_dir(Path::new("claude-skills"), None, None);
        assert_eq!(dir, PathBuf::from("claude-skills"));
    }

    #[test]
    fn missing_dir_fails_before_report() {
        let err = cmd_validate(
            &ScanConfig::default(),
            Some(PathBuf::from("/nonexistent/skillscan/skills")),
            false,
        )
        .unwrap_err();
        assert!(matches!(err, SkillscanError::SkillsDirNotFound(_)));
    }
}
