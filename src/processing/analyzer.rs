//! Profile assembly: runs the field extractors, classifier and composite scorer
//! over one document and produces an immutable candidate profile.

use crate::error::{Result, ScreenerError};
use crate::processing::classifier::{classify_experience_level, classify_specialization, ExperienceLevel};
use crate::processing::field_extractor::{normalize, ExtractedFields, FieldExtractor};
use crate::processing::scoring::{CompositeScorer, GatedScorer, ScoreDecision};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

const SUMMARY_TECHNOLOGIES: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub candidate_name: String,
    pub email: String,
    pub phone: String,
    pub experience_years: u32,
    pub experience_level: ExperienceLevel,
    pub specialization: String,
    pub key_strength: String,
    pub technologies: Vec<String>,
    pub notable_achievements: Vec<String>,
    pub projects_count: u32,
    pub education: String,
    pub cgpa: Option<f64>,
    pub candidate_summary: String,
    pub overall_score: u8,
    #[serde(alias = "filename")]
    pub source_id: String,
}

impl CandidateProfile {
    /// Well-formed stand-in for a document whose analysis failed.
    pub fn error_profile(source_id: &str) -> Self {
        Self {
            candidate_name: "Analysis Error".to_string(),
            email: "N/A".to_string(),
            phone: "N/A".to_string(),
            experience_years: 0,
            experience_level: ExperienceLevel::Unknown,
            specialization: "Unknown".to_string(),
            key_strength: "Error in analysis".to_string(),
            technologies: Vec::new(),
            notable_achievements: Vec::new(),
            projects_count: 0,
            education: "N/A".to_string(),
            cgpa: None,
            candidate_summary: "Could not process resume".to_string(),
            overall_score: 0,
            source_id: source_id.to_string(),
        }
    }
}

/// Result of profile construction. Both variants carry a complete profile.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileOutcome {
    Analyzed(CandidateProfile),
    Failed { profile: CandidateProfile, reason: String },
}

impl ProfileOutcome {
    pub fn into_profile(self) -> CandidateProfile {
        match self {
            ProfileOutcome::Analyzed(profile) => profile,
            ProfileOutcome::Failed { profile, .. } => profile,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ProfileOutcome::Failed { .. })
    }
}

/// Profile plus the gated decision for one candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreeningOutcome {
    pub profile: ProfileOutcome,
    pub decision: ScoreDecision,
}

pub struct ProfileBuilder {
    extractor: FieldExtractor,
    scorer: CompositeScorer,
}

impl ProfileBuilder {
    pub fn new() -> Result<Self> {
        Ok(Self {
            extractor: FieldExtractor::new()?,
            scorer: CompositeScorer,
        })
    }

    /// Build a profile, degrading to the error profile instead of failing.
    pub fn build(&self, text: &str, source_id: &str) -> ProfileOutcome {
        match self.try_build(text, source_id) {
            Ok(profile) => ProfileOutcome::Analyzed(profile),
            Err(e) => {
                warn!("Analysis of {} failed: {}", source_id, e);
                ProfileOutcome::Failed {
                    profile: CandidateProfile::error_profile(source_id),
                    reason: e.to_string(),
                }
            }
        }
    }

    pub fn try_build(&self, text: &str, source_id: &str) -> Result<CandidateProfile> {
        let (normalized, fields) = self.extract(text, source_id)?;
        Ok(self.assemble(&normalized, fields, source_id))
    }

    /// Gated mode: the profile alongside the shortlist decision.
    pub fn screen(&self, text: &str, source_id: &str, gate: &GatedScorer) -> ScreeningOutcome {
        match self.extract(text, source_id) {
            Ok((normalized, fields)) => {
                let decision = gate.evaluate(&normalized, &fields);
                let profile = self.assemble(&normalized, fields, source_id);
                ScreeningOutcome {
                    profile: ProfileOutcome::Analyzed(profile),
                    decision,
                }
            }
            Err(e) => {
                warn!("Screening of {} failed: {}", source_id, e);
                ScreeningOutcome {
                    decision: ScoreDecision {
                        shortlisted: false,
                        matching_skills: Vec::new(),
                        missing_skills: Vec::new(),
                        score: 0,
                        feedback: format!("rejected: resume could not be analyzed ({})", e),
                    },
                    profile: ProfileOutcome::Failed {
                        profile: CandidateProfile::error_profile(source_id),
                        reason: e.to_string(),
                    },
                }
            }
        }
    }

    fn extract(&self, text: &str, source_id: &str) -> Result<(String, ExtractedFields)> {
        if text.trim().is_empty() {
            return Err(ScreenerError::AnalysisFailed(format!("{} contains no text", source_id)));
        }

        let normalized = normalize(text);
        let fields = self.extractor.extract_all(text, &normalized);
        debug!(
            "Extracted {} technologies, {} achievements from {}",
            fields.technologies.len(),
            fields.notable_achievements.len(),
            source_id
        );
        Ok((normalized, fields))
    }

    fn assemble(&self, normalized: &str, fields: ExtractedFields, source_id: &str) -> CandidateProfile {
        let specialization = classify_specialization(normalized);
        let experience_level = classify_experience_level(normalized, fields.experience_years);
        let overall_score = self.scorer.score(&fields);

        let candidate_summary = summarize(
            &fields.candidate_name,
            experience_level,
            specialization,
            fields.experience_years,
            &fields.technologies,
        );

        let key_strength = fields
            .notable_achievements
            .first()
            .cloned()
            .unwrap_or_else(|| specialization.to_string());

        CandidateProfile {
            candidate_name: fields.candidate_name,
            email: fields.email,
            phone: fields.phone,
            experience_years: fields.experience_years,
            experience_level,
            specialization: specialization.to_string(),
            key_strength,
            technologies: fields.technologies,
            notable_achievements: fields.notable_achievements,
            projects_count: fields.projects_count,
            education: fields.education,
            cgpa: fields.cgpa,
            candidate_summary,
            overall_score,
            source_id: source_id.to_string(),
        }
    }
}

fn summarize(
    name: &str,
    level: ExperienceLevel,
    specialization: &str,
    years: u32,
    technologies: &[String],
) -> String {
    let skills = if technologies.is_empty() {
        "multiple technologies".to_string()
    } else {
        technologies
            .iter()
            .take(SUMMARY_TECHNOLOGIES)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "{} is a {} {} with {} years of experience. Skilled in {}.",
        name,
        level.label().to_lowercase(),
        specialization.to_lowercase(),
        years,
        skills
    )
}
