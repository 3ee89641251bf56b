//! Candidate scoring.
//!
//! Two independent strategies share only the extracted fields:
//! [`CompositeScorer`] ranks candidates against each other, while
//! [`GatedScorer`] applies a recruiter's hard CGPA floor and required skills to
//! reach a shortlist decision.

use crate::config::ScreeningConfig;
use crate::error::Result;
use crate::processing::field_extractor::{normalize, ExtractedFields};
use crate::processing::keywords::{self, DSA_INDICATORS, MAX_ACHIEVEMENTS, PROJECT_INDICATORS};
use log::debug;
use serde::{Deserialize, Serialize};

pub const SHORTLIST_THRESHOLD: u32 = 60;

const BASE_SCORE: i64 = 50;
const POINTS_PER_TECHNOLOGY: i64 = 3;
const POINTS_PER_EXPERIENCE_YEAR: i64 = 5;
const MAX_EXPERIENCE_POINTS: i64 = 20;
const POINTS_PER_ACHIEVEMENT: i64 = 5;
const POINTS_PER_PROJECT: i64 = 2;
const HIGH_CGPA_BONUS: i64 = 10;
const HIGH_CGPA_THRESHOLD: f64 = 7.0;

const POINTS_PER_SKILL: u32 = 10;
const PROJECT_BONUS: u32 = 20;
const DSA_BONUS: u32 = 10;

/// Shortlist decision from the gated mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDecision {
    pub shortlisted: bool,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub score: u32,
    pub feedback: String,
}

/// Unconstrained 0-100 score used to rank a batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompositeScorer;

impl CompositeScorer {
    pub fn score(&self, fields: &ExtractedFields) -> u8 {
        let technologies = fields.technologies.len() as i64 * POINTS_PER_TECHNOLOGY;
        let experience =
            (i64::from(fields.experience_years) * POINTS_PER_EXPERIENCE_YEAR).min(MAX_EXPERIENCE_POINTS);
        let achievements = fields.notable_achievements.len().min(MAX_ACHIEVEMENTS) as i64 * POINTS_PER_ACHIEVEMENT;
        let projects = i64::from(fields.projects_count) * POINTS_PER_PROJECT;
        let cgpa_bonus = match fields.cgpa {
            Some(cgpa) if cgpa > HIGH_CGPA_THRESHOLD => HIGH_CGPA_BONUS,
            _ => 0,
        };

        let total = BASE_SCORE + technologies + experience + achievements + projects + cgpa_bonus;
        total.clamp(0, 100) as u8
    }
}

/// Two-stage recruiter filter: an optional CGPA floor, then skill relevance.
#[derive(Debug, Clone)]
pub struct GatedScorer {
    required_skills: Vec<String>,
    cgpa_cutoff: Option<f64>,
}

impl GatedScorer {
    /// Fails with a configuration error instead of scoring against
    /// incomplete criteria.
    pub fn new(config: &ScreeningConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            required_skills: config.normalized_skills(),
            cgpa_cutoff: if config.consider_cgpa { config.cgpa_cutoff } else { None },
        })
    }

    pub fn cgpa_cutoff(&self) -> Option<f64> {
        self.cgpa_cutoff
    }

    pub fn evaluate(&self, normalized: &str, fields: &ExtractedFields) -> ScoreDecision {
        if let Some(cutoff) = self.cgpa_cutoff {
            match fields.cgpa {
                None => return Self::reject("rejected: cgpa not mentioned".to_string()),
                Some(cgpa) if cgpa < cutoff => {
                    return Self::reject(format!(
                        "rejected: cgpa {:?} is below the cutoff of {:?}",
                        cgpa, cutoff
                    ))
                }
                Some(_) => {}
            }
        }

        let (matching_skills, missing_skills): (Vec<String>, Vec<String>) = self
            .required_skills
            .iter()
            .cloned()
            .partition(|skill| normalized.contains(&normalize(skill)));

        let mut score = matching_skills.len() as u32 * POINTS_PER_SKILL;
        if keywords::contains_any(normalized, PROJECT_INDICATORS) {
            score += PROJECT_BONUS;
        }
        if keywords::contains_any(normalized, DSA_INDICATORS) {
            score += DSA_BONUS;
        }

        let shortlisted = score >= SHORTLIST_THRESHOLD;
        debug!(
            "Gated score {} ({} of {} skills matched)",
            score,
            matching_skills.len(),
            self.required_skills.len()
        );

        let feedback = if shortlisted {
            format!(
                "shortlisted: matched {} of {} required skills with a score of {}",
                matching_skills.len(),
                self.required_skills.len(),
                score
            )
        } else if missing_skills.is_empty() {
            format!(
                "not shortlisted: score {} is below the threshold of {}",
                score, SHORTLIST_THRESHOLD
            )
        } else {
            format!(
                "not shortlisted: score {} is below the threshold of {}; missing skills: {}",
                score,
                SHORTLIST_THRESHOLD,
                missing_skills.join(", ")
            )
        };

        ScoreDecision {
            shortlisted,
            matching_skills,
            missing_skills,
            score,
            feedback,
        }
    }

    fn reject(feedback: String) -> ScoreDecision {
        ScoreDecision {
            shortlisted: false,
            matching_skills: Vec::new(),
            missing_skills: Vec::new(),
            score: 0,
            feedback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> ExtractedFields {
        ExtractedFields {
            candidate_name: "Kavya Nair".to_string(),
            email: "kavya@example.com".to_string(),
            phone: "555 010 2030".to_string(),
            experience_years: 0,
            technologies: Vec::new(),
            notable_achievements: Vec::new(),
            projects_count: 0,
            education: "B.Tech".to_string(),
            cgpa: None,
        }
    }

    fn screening(skills: &[&str], cutoff: Option<f64>, consider_cgpa: bool) -> ScreeningConfig {
        ScreeningConfig::new(skills.iter().map(|s| s.to_string()).collect(), cutoff, consider_cgpa)
    }

    #[test]
    fn test_composite_base_score() {
        assert_eq!(CompositeScorer.score(&fields()), 50);
    }

    #[test]
    fn test_composite_components() {
        let mut f = fields();
        f.technologies = vec!["Python".into(), "SQL".into()];
        f.experience_years = 2;
        f.notable_achievements = vec!["Built a thing that matters".into()];
        f.projects_count = 3;
        f.cgpa = Some(8.1);
        // 50 + 6 + 10 + 5 + 6 + 10
        assert_eq!(CompositeScorer.score(&f), 87);
    }

    #[test]
    fn test_composite_experience_capped_and_total_clamped() {
        let mut f = fields();
        f.experience_years = 12;
        assert_eq!(CompositeScorer.score(&f), 70);

        f.projects_count = 40;
        assert_eq!(CompositeScorer.score(&f), 100);
    }

    #[test]
    fn test_cgpa_bonus_needs_strictly_above_seven() {
        let mut f = fields();
        f.cgpa = Some(7.0);
        assert_eq!(CompositeScorer.score(&f), 50);
    }

    #[test]
    fn test_invalid_config_never_builds_a_scorer() {
        assert!(GatedScorer::new(&screening(&["python"], None, true)).is_err());
        assert!(GatedScorer::new(&screening(&[], Some(6.0), true)).is_err());
    }

    #[test]
    fn test_gate_rejects_missing_cgpa() {
        let scorer = GatedScorer::new(&screening(&["python"], Some(7.0), true)).unwrap();
        let decision = scorer.evaluate("python project leetcode", &fields());
        assert!(!decision.shortlisted);
        assert_eq!(decision.score, 0);
        assert_eq!(decision.feedback, "rejected: cgpa not mentioned");
    }

    #[test]
    fn test_gate_rejects_low_cgpa_before_skill_matching() {
        let scorer = GatedScorer::new(&screening(&["python", "sql"], Some(7.0), true)).unwrap();
        let mut f = fields();
        f.cgpa = Some(6.5);
        let decision = scorer.evaluate("cgpa: 6.5 python sql project dsa", &f);
        assert!(!decision.shortlisted);
        assert_eq!(decision.score, 0);
        assert!(decision.feedback.contains("6.5"));
        assert!(decision.feedback.contains("7.0"));
        assert!(decision.matching_skills.is_empty());
        assert!(decision.missing_skills.is_empty());
    }

    #[test]
    fn test_gate_disabled_ignores_cgpa() {
        let scorer = GatedScorer::new(&screening(&["python"], Some(9.0), false)).unwrap();
        assert_eq!(scorer.cgpa_cutoff(), None);
        let decision = scorer.evaluate("python", &fields());
        assert_eq!(decision.score, 10);
    }

    #[test]
    fn test_skill_partition_and_shortlist() {
        let scorer = GatedScorer::new(&screening(&["Python", "Docker", "SQL", "Kafka"], Some(7.0), true)).unwrap();
        let mut f = fields();
        f.cgpa = Some(8.0);
        let text = "cgpa 8.0. python, docker and sql. capstone project. solved 300 leetcode problems";
        let decision = scorer.evaluate(text, &f);

        assert_eq!(decision.matching_skills, vec!["Python", "Docker", "SQL"]);
        assert_eq!(decision.missing_skills, vec!["Kafka"]);
        assert_eq!(decision.score, 60);
        assert!(decision.shortlisted);
        assert!(decision.feedback.starts_with("shortlisted"));
    }

    #[test]
    fn test_below_threshold_lists_missing_skills() {
        let scorer = GatedScorer::new(&screening(&["rust", "go"], None, false)).unwrap();
        let decision = scorer.evaluate("rust services", &fields());
        assert_eq!(decision.score, 10);
        assert!(!decision.shortlisted);
        assert!(decision.feedback.contains("missing skills: go"));
    }
}
