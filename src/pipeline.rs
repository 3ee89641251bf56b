//! Document-level orchestration: extraction, profile building and ranking
//! over files on disk.

use crate::config::{Config, ScreeningConfig};
use crate::error::Result;
use crate::input::InputManager;
use crate::output::report::{BatchReport, ScreeningReport, SkippedDocument};
use crate::processing::analyzer::ProfileBuilder;
use crate::processing::ranker::rank;
use crate::processing::roadmap::build_roadmap;
use crate::processing::scoring::GatedScorer;
use chrono::Utc;
use log::{info, warn};
use std::path::{Path, PathBuf};

pub struct ScreeningPipeline {
    input: InputManager,
    builder: ProfileBuilder,
    include_roadmap: bool,
}

impl ScreeningPipeline {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            input: InputManager::new()
                .with_cache(config.extraction.enable_caching)
                .with_min_text_chars(config.extraction.min_text_chars),
            builder: ProfileBuilder::new()?,
            include_roadmap: config.output.include_roadmap,
        })
    }

    /// Analyze every document in order and rank the results.
    ///
    /// Documents that fail extraction are reported as skipped. `on_document`
    /// is called once per path after it has been handled.
    pub async fn analyze_batch<F>(&mut self, paths: &[PathBuf], mut on_document: F) -> Result<BatchReport>
    where
        F: FnMut(&Path),
    {
        let mut profiles = Vec::with_capacity(paths.len());
        let mut skipped = Vec::new();
        let mut failed_analyses = 0;

        for path in paths {
            let id = source_id(path);
            match self.input.extract_text(path).await {
                Ok(text) => {
                    let outcome = self.builder.build(&text, &id);
                    if outcome.is_failed() {
                        failed_analyses += 1;
                    }
                    profiles.push(outcome.into_profile());
                }
                Err(e) if e.is_recoverable() => {
                    warn!("Skipping {}: {}", path.display(), e);
                    skipped.push(SkippedDocument {
                        source_id: id,
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
            on_document(path);
        }

        info!(
            "Analyzed {} documents ({} skipped, {} failed analyses)",
            profiles.len(),
            skipped.len(),
            failed_analyses
        );

        Ok(BatchReport::new(rank(profiles), skipped, failed_analyses))
    }

    /// Gated screening of a single resume.
    ///
    /// The configuration is validated before the file is read.
    pub async fn screen_resume(&mut self, path: &Path, screening: &ScreeningConfig) -> Result<ScreeningReport> {
        let gate = GatedScorer::new(screening)?;
        let id = source_id(path);
        let text = self.input.extract_text(path).await?;

        let outcome = self.builder.screen(&text, &id, &gate);
        info!(
            "Screened {}: score {}, shortlisted: {}",
            id, outcome.decision.score, outcome.decision.shortlisted
        );

        let roadmap = if self.include_roadmap {
            build_roadmap(&outcome.decision.missing_skills)
        } else {
            Vec::new()
        };

        Ok(ScreeningReport {
            source_id: id,
            generated_at: Utc::now(),
            decision: outcome.decision,
            profile: outcome.profile.into_profile(),
            roadmap,
        })
    }
}

/// Identifier used for a document in reports: its file name.
pub fn source_id(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_source_id_uses_file_name() {
        assert_eq!(source_id(Path::new("/tmp/resumes/anya.pdf")), "anya.pdf");
        assert_eq!(source_id(Path::new("bare.txt")), "bare.txt");
    }

    #[tokio::test]
    async fn test_batch_skips_short_documents() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("meera.txt");
        let short = dir.path().join("short.txt");
        fs::write(
            &good,
            "Meera Iyer\nmeera.iyer@example.com\nBackend developer working with Java and Spring, 3-5 years",
        )
        .unwrap();
        fs::write(&short, "too short").unwrap();

        let mut pipeline = ScreeningPipeline::new(&Config::default()).unwrap();
        let mut seen = 0;
        let report = pipeline
            .analyze_batch(&[good, short], |_| seen += 1)
            .await
            .unwrap();

        assert_eq!(seen, 2);
        assert_eq!(report.export.total_candidates, 1);
        assert_eq!(report.candidates()[0].source_id, "meera.txt");
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].source_id, "short.txt");
    }

    #[tokio::test]
    async fn test_screen_rejects_invalid_config_before_reading() {
        let mut pipeline = ScreeningPipeline::new(&Config::default()).unwrap();
        let config = ScreeningConfig::new(vec!["rust".into()], None, true);
        let err = pipeline
            .screen_resume(Path::new("/definitely/missing.pdf"), &config)
            .await
            .unwrap_err();
        assert!(matches!(err, crate::error::ScreenerError::Configuration(_)));
    }
}
