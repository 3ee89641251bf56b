//! Report structures produced by batch ranking and gated screening

use crate::processing::analyzer::CandidateProfile;
use crate::processing::ranker::{BatchStatistics, RankedBatch};
use crate::processing::roadmap::RoadmapItem;
use crate::processing::scoring::ScoreDecision;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Exported result of a batch analysis. This is the JSON document handed to
/// downstream consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchExport {
    pub analysis_date: DateTime<Utc>,
    pub total_candidates: usize,
    /// Ranked, best first.
    pub candidates: Vec<CandidateProfile>,
}

/// A document that never reached analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedDocument {
    pub source_id: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub export: BatchExport,
    pub statistics: BatchStatistics,
    pub skipped: Vec<SkippedDocument>,
    /// Candidates that were replaced by the error profile.
    pub failed_analyses: usize,
}

impl BatchReport {
    pub fn new(ranked: RankedBatch, skipped: Vec<SkippedDocument>, failed_analyses: usize) -> Self {
        Self {
            export: BatchExport {
                analysis_date: Utc::now(),
                total_candidates: ranked.candidates.len(),
                candidates: ranked.candidates,
            },
            statistics: ranked.statistics,
            skipped,
            failed_analyses,
        }
    }

    pub fn candidates(&self) -> &[CandidateProfile] {
        &self.export.candidates
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub source_id: String,
    pub generated_at: DateTime<Utc>,
    pub decision: ScoreDecision,
    pub profile: CandidateProfile,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roadmap: Vec<RoadmapItem>,
}

/// Band used when presenting a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Strong,
    Moderate,
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreBand::Strong,
            60..=79 => ScoreBand::Moderate,
            _ => ScoreBand::Weak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Strong => "STRONG",
            ScoreBand::Moderate => "MODERATE",
            ScoreBand::Weak => "WEAK",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::ProfileBuilder;
    use crate::processing::ranker::rank;

    #[test]
    fn test_export_json_round_trip() {
        let builder = ProfileBuilder::new().unwrap();
        let profiles = vec![
            builder.build("Anika Roy\nanika@example.com\nCGPA: 8.8\nReact, Docker", "anika.pdf").into_profile(),
            builder.build("Kabir Das\nJava backend, 3-5 years", "kabir.pdf").into_profile(),
        ];
        let report = BatchReport::new(rank(profiles), Vec::new(), 0);

        let json = serde_json::to_string_pretty(&report.export).unwrap();
        let parsed: BatchExport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report.export);
        assert_eq!(parsed.total_candidates, 2);
    }

    #[test]
    fn test_export_field_names() {
        let report = BatchReport::new(rank(Vec::new()), Vec::new(), 0);
        let value = serde_json::to_value(&report.export).unwrap();
        assert!(value.get("analysis_date").is_some());
        assert_eq!(value["total_candidates"], 0);
        assert!(value["candidates"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::Weak);
    }
}
