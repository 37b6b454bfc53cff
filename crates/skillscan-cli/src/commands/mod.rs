use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::io::Write;
use std::path::{Path, PathBuf};

use skillscan_config::{CONFIG_FILE_NAME, ConfigLoader, ScanConfig};
use skillscan_core::{AGENT_SKILLS_SPEC_URL, Result, SkillscanError};

mod detect;
mod validate;

/// 🔎 skillscan: skill usage, candidate detection and SKILL.md validation
#[derive(Parser)]
#[command(name = "skillscan", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to skillscan.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level override (e.g. debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan projects for skill usage, promotion and new skill candidates
    Detect {
        /// Directory whose children are scanned as projects
        #[arg(short, long)]
        projects_root: Option<PathBuf>,
        /// Print the structured report as JSON
        #[arg(long)]
        output_json: bool,
    },
    /// Validate every SKILL.md in the skills directory
    Validate {
        /// Directory holding one sub-directory per skill
        #[arg(short, long)]
        skills_dir: Option<PathBuf>,
        /// Auto-fix issues (not implemented yet)
        #[arg(long)]
        fix: bool,
    },
    /// Show current configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions for bash, zsh, or fish
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Show version and build info
    Version,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        // Load config first so we can use it for log level and format
        let config_loader = ConfigLoader::load(self.config.as_deref())?;
        let config = config_loader.get();

        self.init_tracing(&config);

        match self.command {
            Commands::Detect {
                projects_root,
                output_json,
            } => detect::cmd_detect(&config, projects_root, output_json),
            Commands::Validate { skills_dir, fix } => {
                validate::cmd_validate(&config, skills_dir, fix)
            }
            Commands::Config { json } => Self::cmd_config(&config, json),
            Commands::Completions { shell } => Self::cmd_completions(shell),
            Commands::Version => Self::cmd_version(config_loader.path()),
        }
    }

    /// Resolve log level: --verbose > --quiet > --log-level > config.
    fn log_level<'a>(&'a self, config: &'a ScanConfig) -> &'a str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            self.log_level.as_deref().unwrap_or(&config.logging.level)
        }
    }

    fn init_tracing(&self, config: &ScanConfig) {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(self.log_level(config)));

        // Logs go to stderr so report output on stdout stays clean
        let result = if config.logging.format == "json" {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .json()
                .with_target(true)
                .try_init()
        } else {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init()
        };
        if let Err(e) = result {
            eprintln!("tracing already initialised: {e}");
        }
    }

    fn cmd_config(config: &ScanConfig, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(config)?);
        } else {
            println!(
                "{}",
                toml::to_string_pretty(config)
                    .map_err(|e| SkillscanError::Config(e.to_string()))?
            );
        }
        Ok(())
    }

    fn cmd_version(config_path: Option<&Path>) -> Result<()> {
        write_version(&mut std::io::stdout().lock(), config_path)?;
        Ok(())
    }

    fn cmd_completions(shell: Shell) -> Result<()> {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "skillscan", &mut std::io::stdout());
        Ok(())
    }
}

/// Version banner with the skill format checked and the config in effect.
fn write_version<W: Write>(out: &mut W, config_path: Option<&Path>) -> std::io::Result<()> {
    writeln!(out, "🔎 skillscan v{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "   Skill format: {AGENT_SKILLS_SPEC_URL}")?;
    match config_path {
        Some(path) => writeln!(out, "   Config: {}", path.display())?,
        None => writeln!(out, "   Config: built-in defaults (no {CONFIG_FILE_NAME})")?,
    }
    writeln!(
        out,
        "   Target: {} / {}",
        std::env::consts::ARCH,
        std::env::consts::OS
    )?;
    Ok(())
}
