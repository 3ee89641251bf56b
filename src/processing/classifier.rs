//! Categorical judgments derived from extracted fields and raw text signals

use crate::processing::keywords::{
    self, DEFAULT_SPECIALIZATION, MID_LEVEL_KEYWORDS, SENIORITY_KEYWORDS, SPECIALIZATIONS,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Fresher,
    Junior,
    #[serde(rename = "Mid-level")]
    MidLevel,
    Senior,
    Lead,
    /// Only carried by profiles whose analysis failed.
    Unknown,
}

impl ExperienceLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Fresher => "Fresher",
            ExperienceLevel::Junior => "Junior",
            ExperienceLevel::MidLevel => "Mid-level",
            ExperienceLevel::Senior => "Senior",
            ExperienceLevel::Lead => "Lead",
            ExperienceLevel::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Role label from the first keyword group present in the text.
pub fn classify_specialization(normalized: &str) -> &'static str {
    keywords::first_match(normalized, SPECIALIZATIONS).unwrap_or(DEFAULT_SPECIALIZATION)
}

/// Seniority keywords outrank years; "lead" maps to Senior as well.
pub fn classify_experience_level(normalized: &str, experience_years: u32) -> ExperienceLevel {
    if keywords::contains_any(normalized, SENIORITY_KEYWORDS) {
        ExperienceLevel::Senior
    } else if keywords::contains_any(normalized, MID_LEVEL_KEYWORDS) || experience_years >= 5 {
        ExperienceLevel::MidLevel
    } else if experience_years >= 3 {
        ExperienceLevel::Junior
    } else {
        ExperienceLevel::Fresher
    }
}
