//! Configuration management for the resume screener

use crate::error::{Result, ScreenerError};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub screening: ScreeningConfig,
    pub extraction: ExtractionConfig,
    pub output: OutputConfig,
}

/// Caller-supplied criteria for the gated shortlisting mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningConfig {
    pub required_skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cgpa_cutoff: Option<f64>,
    pub consider_cgpa: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Documents whose extracted text is shorter than this are rejected.
    pub min_text_chars: usize,
    pub enable_caching: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub include_roadmap: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screening: ScreeningConfig::default(),
            extraction: ExtractionConfig {
                min_text_chars: 50,
                enable_caching: true,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                include_roadmap: true,
                color_output: true,
            },
        }
    }
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            required_skills: Vec::new(),
            cgpa_cutoff: None,
            consider_cgpa: false,
        }
    }
}

impl ScreeningConfig {
    pub fn new(required_skills: Vec<String>, cgpa_cutoff: Option<f64>, consider_cgpa: bool) -> Self {
        Self {
            required_skills,
            cgpa_cutoff,
            consider_cgpa,
        }
    }

    /// Reject incomplete criteria before any document is scored.
    pub fn validate(&self) -> Result<()> {
        if self.normalized_skills().is_empty() {
            return Err(ScreenerError::Configuration(
                "at least one required skill must be given for screening".to_string(),
            ));
        }

        match self.cgpa_cutoff {
            None if self.consider_cgpa => Err(ScreenerError::Configuration(
                "cgpa gating is enabled but no cgpa cutoff was supplied".to_string(),
            )),
            Some(cutoff) if !(0.0..=10.0).contains(&cutoff) => Err(ScreenerError::Configuration(
                format!("cgpa cutoff {} is outside the 0-10 scale", cutoff),
            )),
            _ => Ok(()),
        }
    }

    /// Trimmed, non-empty skills with case-insensitive duplicates removed.
    /// First spelling wins and input order is preserved.
    pub fn normalized_skills(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.required_skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .filter(|s| seen.insert(s.to_lowercase()))
            .map(str::to_string)
            .collect()
    }
}

impl Config {
    /// Load from an explicit path, or from the default location.
    /// A missing default file is created with default values.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let config_path = Self::config_path();
                if config_path.exists() {
                    Self::load_from(&config_path)
                } else {
                    let config = Self::default();
                    config.save_to(&config_path)?;
                    Ok(config)
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ScreenerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-screener")
            .join("config.toml")
    }
}
