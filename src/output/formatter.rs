//! Output formatters for batch rankings and screening decisions

use crate::config::OutputFormat;
use crate::error::{Result, ScreenerError};
use crate::output::report::{BatchReport, ScoreBand, ScreeningReport};
use crate::processing::analyzer::CandidateProfile;
use crate::processing::roadmap::Priority;
use colored::{Color, Colorize};
use std::fmt::Write as _;
use std::path::Path;

/// Trait for formatting reports
pub trait OutputFormatter {
    fn format_batch(&self, report: &BatchReport) -> Result<String>;
    fn format_screening(&self, report: &ScreeningReport) -> Result<String>;
}

/// Console formatter with colors and a ranked candidate list
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for export and integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing with interviewers
pub struct MarkdownFormatter;

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

// `write!` into a String cannot fail; map the unit error for `?`.
fn fmt_err(e: std::fmt::Error) -> ScreenerError {
    ScreenerError::OutputFormatting(e.to_string())
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let (prefix, color) = match level {
            1 => ("█", Color::Blue),
            2 => ("▓", Color::Green),
            _ => ("▒", Color::Yellow),
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let band = ScoreBand::from_score(score);
        let color = match band {
            ScoreBand::Strong => Color::Green,
            ScoreBand::Moderate => Color::Yellow,
            ScoreBand::Weak => Color::Red,
        };

        if self.use_colors {
            format!("[{}]", band.label().color(color).bold())
        } else {
            format!("[{}]", band.label())
        }
    }

    fn format_candidate(&self, out: &mut String, rank: usize, candidate: &CandidateProfile) -> Result<()> {
        writeln!(
            out,
            "#{} {} | Score: {}/100 {} | {}",
            rank,
            candidate.candidate_name,
            candidate.overall_score,
            self.format_score_badge(candidate.overall_score),
            candidate.experience_level
        )
        .map_err(fmt_err)?;
        writeln!(
            out,
            "   {} | {} years | {}",
            candidate.specialization, candidate.experience_years, candidate.education
        )
        .map_err(fmt_err)?;
        writeln!(out, "   {}", self.colorize(&candidate.candidate_summary, Color::Cyan)).map_err(fmt_err)?;

        if self.detailed {
            if let Some(cgpa) = candidate.cgpa {
                writeln!(out, "   CGPA: {}", cgpa).map_err(fmt_err)?;
            }
            writeln!(out, "   Key strength: {}", candidate.key_strength).map_err(fmt_err)?;
            writeln!(out, "   Projects: {}", candidate.projects_count).map_err(fmt_err)?;
            if !candidate.technologies.is_empty() {
                writeln!(out, "   Technologies: {}", candidate.technologies.join(", ")).map_err(fmt_err)?;
            }
            for achievement in &candidate.notable_achievements {
                writeln!(out, "   ✅ {}", achievement).map_err(fmt_err)?;
            }
            writeln!(
                out,
                "   Contact: {} | {} | from {}",
                candidate.email, candidate.phone, candidate.source_id
            )
            .map_err(fmt_err)?;
        }
        Ok(())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_batch(&self, report: &BatchReport) -> Result<String> {
        let mut out = String::new();
        let stats = &report.statistics;

        out.push_str(&self.format_header("📊 BATCH RESUME ANALYSIS", 1));
        writeln!(
            out,
            "Generated: {}",
            report.export.analysis_date.format("%Y-%m-%d %H:%M:%S UTC")
        )
        .map_err(fmt_err)?;

        out.push_str(&self.format_header("Summary", 2));
        writeln!(out, "📈 Avg Score: {:.0}", stats.average_score).map_err(fmt_err)?;
        writeln!(out, "👥 Total Candidates: {}", stats.total_candidates).map_err(fmt_err)?;
        writeln!(out, "🎯 Senior Candidates: {}", stats.senior_candidates).map_err(fmt_err)?;
        writeln!(out, "📅 Avg Experience (yrs): {:.1}", stats.average_experience_years).map_err(fmt_err)?;

        out.push_str(&self.format_header("🏆 Candidates Ranked by Overall Score", 2));
        for (index, candidate) in report.candidates().iter().enumerate() {
            self.format_candidate(&mut out, index + 1, candidate)?;
            out.push('\n');
        }

        if !report.skipped.is_empty() {
            out.push_str(&self.format_header("⚠️  Skipped Documents", 3));
            for skipped in &report.skipped {
                writeln!(out, "  • {}: {}", skipped.source_id, self.colorize(&skipped.reason, Color::Red))
                    .map_err(fmt_err)?;
            }
        }

        Ok(out)
    }

    fn format_screening(&self, report: &ScreeningReport) -> Result<String> {
        let mut out = String::new();
        let decision = &report.decision;

        out.push_str(&self.format_header("🎯 CANDIDATE SCREENING", 1));
        writeln!(out, "Candidate: {} ({})", report.profile.candidate_name, report.source_id).map_err(fmt_err)?;

        let verdict = if decision.shortlisted {
            self.colorize("SHORTLISTED", Color::Green)
        } else {
            self.colorize("NOT SHORTLISTED", Color::Red)
        };
        writeln!(out, "Decision: {} | Score: {}", verdict, decision.score).map_err(fmt_err)?;
        writeln!(out, "Feedback: {}", decision.feedback).map_err(fmt_err)?;

        if !decision.matching_skills.is_empty() {
            writeln!(out, "✅ Matching skills: {}", decision.matching_skills.join(", ")).map_err(fmt_err)?;
        }
        if !decision.missing_skills.is_empty() {
            writeln!(out, "❌ Missing skills: {}", decision.missing_skills.join(", ")).map_err(fmt_err)?;
        }

        out.push_str(&self.format_header("📋 Summary", 2));
        writeln!(out, "{}", report.profile.candidate_summary).map_err(fmt_err)?;

        if !report.roadmap.is_empty() {
            out.push_str(&self.format_header("🛠️  Remediation Roadmap", 2));
            for item in &report.roadmap {
                let priority = match item.priority {
                    Priority::High => self.colorize("HIGH", Color::Red),
                    Priority::Medium => self.colorize("MEDIUM", Color::Yellow),
                    Priority::Low => self.colorize("LOW", Color::Green),
                };
                writeln!(out, "• {} [{}] ~{} weeks", item.skill, priority, item.estimated_weeks).map_err(fmt_err)?;
                if self.detailed {
                    for step in &item.steps {
                        writeln!(out, "    - {}", step).map_err(fmt_err)?;
                    }
                }
            }
        }

        Ok(out)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    /// Emits the export document only.
    fn format_batch(&self, report: &BatchReport) -> Result<String> {
        self.to_json(&report.export)
    }

    fn format_screening(&self, report: &ScreeningReport) -> Result<String> {
        self.to_json(report)
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_batch(&self, report: &BatchReport) -> Result<String> {
        let mut out = String::new();
        let stats = &report.statistics;

        writeln!(out, "# Batch Resume Analysis\n").map_err(fmt_err)?;
        writeln!(out, "_Generated {}_\n", report.export.analysis_date.to_rfc3339()).map_err(fmt_err)?;
        writeln!(out, "| Avg Score | Candidates | Senior | Avg Experience |").map_err(fmt_err)?;
        writeln!(out, "|---|---|---|---|").map_err(fmt_err)?;
        writeln!(
            out,
            "| {:.0} | {} | {} | {:.1} yrs |\n",
            stats.average_score, stats.total_candidates, stats.senior_candidates, stats.average_experience_years
        )
        .map_err(fmt_err)?;

        writeln!(out, "## Ranking\n").map_err(fmt_err)?;
        writeln!(out, "| # | Candidate | Score | Level | Specialization | File |").map_err(fmt_err)?;
        writeln!(out, "|---|---|---|---|---|---|").map_err(fmt_err)?;
        for (index, c) in report.candidates().iter().enumerate() {
            writeln!(
                out,
                "| {} | {} | {} | {} | {} | {} |",
                index + 1,
                c.candidate_name,
                c.overall_score,
                c.experience_level,
                c.specialization,
                c.source_id
            )
            .map_err(fmt_err)?;
        }

        for (index, c) in report.candidates().iter().enumerate() {
            writeln!(out, "\n### {}. {}\n", index + 1, c.candidate_name).map_err(fmt_err)?;
            writeln!(out, "{}\n", c.candidate_summary).map_err(fmt_err)?;
            for achievement in &c.notable_achievements {
                writeln!(out, "- {}", achievement).map_err(fmt_err)?;
            }
        }

        if !report.skipped.is_empty() {
            writeln!(out, "\n## Skipped\n").map_err(fmt_err)?;
            for skipped in &report.skipped {
                writeln!(out, "- `{}`: {}", skipped.source_id, skipped.reason).map_err(fmt_err)?;
            }
        }

        Ok(out)
    }

    fn format_screening(&self, report: &ScreeningReport) -> Result<String> {
        let mut out = String::new();
        let decision = &report.decision;
        let verdict = if decision.shortlisted { "Shortlisted" } else { "Not shortlisted" };

        writeln!(out, "# Screening: {}\n", report.profile.candidate_name).map_err(fmt_err)?;
        writeln!(out, "**Decision:** {} (score {})\n", verdict, decision.score).map_err(fmt_err)?;
        writeln!(out, "> {}\n", decision.feedback).map_err(fmt_err)?;
        writeln!(out, "- Matching skills: {}", join_or_none(&decision.matching_skills)).map_err(fmt_err)?;
        writeln!(out, "- Missing skills: {}\n", join_or_none(&decision.missing_skills)).map_err(fmt_err)?;
        writeln!(out, "{}", report.profile.candidate_summary).map_err(fmt_err)?;

        if !report.roadmap.is_empty() {
            writeln!(out, "\n## Roadmap\n").map_err(fmt_err)?;
            for item in &report.roadmap {
                writeln!(out, "### {} ({:?}, ~{} weeks)\n", item.skill, item.priority, item.estimated_weeks)
                    .map_err(fmt_err)?;
                for (i, step) in item.steps.iter().enumerate() {
                    writeln!(out, "{}. {}", i + 1, step).map_err(fmt_err)?;
                }
                out.push('\n');
            }
        }

        Ok(out)
    }
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter,
        }
    }

    fn formatter(&self, format: OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        }
    }

    pub fn batch_report(&self, report: &BatchReport, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_batch(report)
    }

    pub fn screening_report(&self, report: &ScreeningReport, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_screening(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, stem: &str) -> String {
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    };
    format!("{}_{}.{}", stem, timestamp, extension)
}
