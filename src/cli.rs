//! CLI interface for the resume screener

use crate::config::ScreeningConfig;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-screener")]
#[command(about = "Rule-based resume screening and ranking tool")]
#[command(long_about = "Extract candidate profiles from resumes, rank a batch by composite score, or screen a single resume against required skills and a CGPA cutoff")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze and rank a batch of resumes
    Batch {
        /// Resume files (PDF, TXT, MD)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output detailed candidate information
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Screen one resume against required skills
    Screen {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Required skills, comma separated
        #[arg(short = 'k', long, value_delimiter = ',')]
        skills: Vec<String>,

        /// Minimum CGPA on a 10 point scale
        #[arg(long)]
        cgpa_cutoff: Option<f64>,

        /// Reject candidates below the CGPA cutoff
        #[arg(long, overrides_with = "no_consider_cgpa")]
        consider_cgpa: bool,

        /// Ignore the CGPA cutoff even if the config file enables it
        #[arg(long, overrides_with = "consider_cgpa")]
        no_consider_cgpa: bool,

        /// Output detailed roadmap steps
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Tri-state value of a `--flag` / `--no-flag` pair. `None` when neither was given.
pub fn flag_override(enable: bool, disable: bool) -> Option<bool> {
    match (enable, disable) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Screening criteria from the config file with command-line values on top.
pub fn screening_overrides(
    configured: &ScreeningConfig,
    skills: Vec<String>,
    cgpa_cutoff: Option<f64>,
    consider_cgpa: Option<bool>,
) -> ScreeningConfig {
    ScreeningConfig::new(
        if skills.is_empty() {
            configured.required_skills.clone()
        } else {
            skills
        },
        cgpa_cutoff.or(configured.cgpa_cutoff),
        consider_cgpa.unwrap_or(configured.consider_cgpa),
    )
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::input::file_detector::SUPPORTED_EXTENSIONS;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("md").unwrap(), OutputFormat::Markdown);
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("cv.PDF"), SUPPORTED_EXTENSIONS).is_ok());
        assert!(validate_file_extension(Path::new("cv.markdown"), SUPPORTED_EXTENSIONS).is_ok());
        assert!(validate_file_extension(Path::new("cv.docx"), SUPPORTED_EXTENSIONS).is_err());
        assert!(validate_file_extension(Path::new("cv"), SUPPORTED_EXTENSIONS).is_err());
    }

    fn screen_args(extra: &[&str]) -> (Vec<String>, Option<f64>, Option<bool>) {
        let mut args = vec!["resume-screener", "screen", "--resume", "cv.pdf"];
        args.extend_from_slice(extra);
        match Cli::try_parse_from(args).unwrap().command {
            Commands::Screen {
                skills,
                cgpa_cutoff,
                consider_cgpa,
                no_consider_cgpa,
                ..
            } => (skills, cgpa_cutoff, flag_override(consider_cgpa, no_consider_cgpa)),
            _ => panic!("expected screen command"),
        }
    }

    #[test]
    fn test_cli_can_disable_configured_cgpa_gate() {
        let configured = ScreeningConfig::new(vec!["python".into()], Some(7.0), true);

        let (skills, cutoff, consider) = screen_args(&["--no-consider-cgpa"]);
        let merged = screening_overrides(&configured, skills, cutoff, consider);
        assert!(!merged.consider_cgpa);
        assert_eq!(merged.cgpa_cutoff, Some(7.0));
        assert_eq!(merged.required_skills, vec!["python"]);

        let (skills, cutoff, consider) = screen_args(&[]);
        assert!(screening_overrides(&configured, skills, cutoff, consider).consider_cgpa);
    }

    #[test]
    fn test_last_cgpa_flag_wins() {
        let (_, _, consider) = screen_args(&["--no-consider-cgpa", "--consider-cgpa"]);
        assert_eq!(consider, Some(true));
        let (_, _, consider) = screen_args(&["--consider-cgpa", "--no-consider-cgpa"]);
        assert_eq!(consider, Some(false));
    }

    #[test]
    fn test_cli_values_replace_configured_criteria() {
        let configured = ScreeningConfig::new(vec!["python".into()], Some(7.0), false);
        let (skills, cutoff, consider) = screen_args(&["--skills", "rust,sql", "--cgpa-cutoff", "8", "--consider-cgpa"]);
        let merged = screening_overrides(&configured, skills, cutoff, consider);
        assert_eq!(merged.required_skills, vec!["rust", "sql"]);
        assert_eq!(merged.cgpa_cutoff, Some(8.0));
        assert!(merged.consider_cgpa);
    }

    #[test]
    fn test_screen_skills_are_comma_separated() {
        let cli = Cli::try_parse_from([
            "resume-screener",
            "screen",
            "--resume",
            "cv.pdf",
            "--skills",
            "python,sql",
            "--cgpa-cutoff",
            "7.5",
            "--consider-cgpa",
        ])
        .unwrap();

        match cli.command {
            Commands::Screen { skills, cgpa_cutoff, consider_cgpa, .. } => {
                assert_eq!(skills, vec!["python", "sql"]);
                assert_eq!(cgpa_cutoff, Some(7.5));
                assert!(consider_cgpa);
            }
            _ => panic!("expected screen command"),
        }
    }
}
