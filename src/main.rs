//! Resume screener: rule-based candidate ranking and skill screening

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_screener::cli::{self, Cli, Commands, ConfigAction};
use resume_screener::config::{Config, OutputFormat};
use resume_screener::error::{Result, ScreenerError};
use resume_screener::input::file_detector::SUPPORTED_EXTENSIONS;
use resume_screener::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use resume_screener::pipeline::{source_id, ScreeningPipeline};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Batch {
            files,
            detailed,
            output,
            save,
        } => {
            // Unsupported files are reported as skipped by the pipeline.
            info!("Starting batch analysis of {} files", files.len());
            let format = resolve_format(output.as_deref(), &config)?;

            let pb = ProgressBar::new(files.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")
                    .map_err(|e| ScreenerError::OutputFormatting(e.to_string()))?
                    .progress_chars("=> "),
            );

            let mut pipeline = ScreeningPipeline::new(&config)?;
            let report = pipeline
                .analyze_batch(&files, |path| {
                    pb.set_message(source_id(path));
                    pb.inc(1);
                })
                .await?;
            pb.finish_and_clear();

            if report.failed_analyses > 0 {
                println!("⚠️  {} resumes could not be analyzed", report.failed_analyses);
            }

            let generator = generator_for(&config, detailed);
            let rendered = generator.batch_report(&report, format)?;
            emit(&rendered, save.as_deref(), format, "batch_resume_analysis")?;
        }

        Commands::Screen {
            resume,
            skills,
            cgpa_cutoff,
            consider_cgpa,
            no_consider_cgpa,
            detailed,
            output,
            save,
        } => {
            cli::validate_file_extension(&resume, SUPPORTED_EXTENSIONS)
                .map_err(|e| ScreenerError::InvalidInput(format!("Resume file: {}", e)))?;
            let format = resolve_format(output.as_deref(), &config)?;

            let screening = cli::screening_overrides(
                &config.screening,
                skills,
                cgpa_cutoff,
                cli::flag_override(consider_cgpa, no_consider_cgpa),
            );

            info!("Screening {}", resume.display());
            let mut pipeline = ScreeningPipeline::new(&config)?;
            let report = pipeline.screen_resume(&resume, &screening).await?;

            let generator = generator_for(&config, detailed);
            let rendered = generator.screening_report(&report, format)?;
            emit(&rendered, save.as_deref(), format, "screening")?;
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration ({})\n", path.display());
                    let content = toml::to_string_pretty(&config)
                        .map_err(|e| ScreenerError::Configuration(e.to_string()))?;
                    println!("{}", content);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(&path)?;
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}

fn resolve_format(flag: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match flag {
        Some(value) => cli::parse_output_format(value).map_err(ScreenerError::InvalidInput),
        None => Ok(config.output.format),
    }
}

fn generator_for(config: &Config, detailed: bool) -> ReportGenerator {
    ReportGenerator::with_options(config.output.color_output, detailed || config.output.detailed, true)
}

/// Print the rendered report, or write it when `--save` is given. A directory
/// gets a timestamped file name.
fn emit(rendered: &str, save: Option<&Path>, format: OutputFormat, stem: &str) -> Result<()> {
    match save {
        Some(target) => {
            let file_path = if target.is_dir() {
                target.join(suggest_filename(format, stem))
            } else {
                target.to_path_buf()
            };
            save_report_to_file(rendered, &file_path)?;
            println!("💾 Report saved to {}", file_path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
