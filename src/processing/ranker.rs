//! Batch ranking of candidate profiles

use crate::processing::analyzer::CandidateProfile;
use crate::processing::classifier::ExperienceLevel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchStatistics {
    pub total_candidates: usize,
    pub average_score: f64,
    pub senior_candidates: usize,
    pub average_experience_years: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedBatch {
    pub candidates: Vec<CandidateProfile>,
    pub statistics: BatchStatistics,
}

/// Sort by descending overall score. The sort is stable, so equal scores keep
/// their submission order.
pub fn rank(mut profiles: Vec<CandidateProfile>) -> RankedBatch {
    profiles.sort_by(|a, b| b.overall_score.cmp(&a.overall_score));
    let statistics = statistics(&profiles);
    RankedBatch {
        candidates: profiles,
        statistics,
    }
}

pub fn statistics(profiles: &[CandidateProfile]) -> BatchStatistics {
    let total = profiles.len();
    if total == 0 {
        return BatchStatistics {
            total_candidates: 0,
            average_score: 0.0,
            senior_candidates: 0,
            average_experience_years: 0.0,
        };
    }

    let score_sum: f64 = profiles.iter().map(|p| f64::from(p.overall_score)).sum();
    let years_sum: f64 = profiles.iter().map(|p| f64::from(p.experience_years)).sum();
    let senior_candidates = profiles
        .iter()
        .filter(|p| p.experience_level == ExperienceLevel::Senior)
        .count();

    BatchStatistics {
        total_candidates: total,
        average_score: score_sum / total as f64,
        senior_candidates,
        average_experience_years: years_sum / total as f64,
    }
}
