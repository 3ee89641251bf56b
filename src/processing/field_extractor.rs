//! Field extraction: independent pattern matchers that pull discrete candidate
//! fields out of resume text.
//!
//! Each extractor is a pure function of its input. Extractors that work on
//! keywords expect normalized text (see [`normalize`]); contact details,
//! achievements and year tokens are read from the original text.

use crate::error::{Result, ScreenerError};
use crate::processing::keywords::{
    self, ACHIEVEMENT_MIN_LINE_CHARS, ACHIEVEMENT_VERBS, DEFAULT_EDUCATION, EDUCATION_LEVELS, EXPERIENCE_BUCKETS,
    MAX_ACHIEVEMENTS, TECHNOLOGY_ALIASES,
};
use aho_corasick::AhoCorasick;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const NOT_FOUND: &str = "Not Found";
pub const NOT_PROVIDED: &str = "Not provided";

/// Everything the field extractors pull out of one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub candidate_name: String,
    pub email: String,
    pub phone: String,
    pub experience_years: u32,
    pub technologies: Vec<String>,
    pub notable_achievements: Vec<String>,
    pub projects_count: u32,
    pub education: String,
    pub cgpa: Option<f64>,
}

pub struct FieldExtractor {
    email_regex: Regex,
    phone_regex: Regex,
    year_regex: Regex,
    cgpa_patterns: Vec<Regex>,
    technology_matcher: AhoCorasick,
    /// Pattern index in `technology_matcher` -> index in `TECHNOLOGY_ALIASES`.
    alias_owner: Vec<usize>,
}

impl FieldExtractor {
    pub fn new() -> Result<Self> {
        let email_regex = compile(r"[\w.-]+@[\w.-]+\.\w+")?;
        let phone_regex = compile(r"\+?\(?[0-9]{3}\)?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}")?;
        let year_regex = compile(r"20\d{2}")?;

        // Tried in this order; the first in-range value wins.
        let cgpa_patterns = vec![
            compile(r"cgpa[:\s]*(\d+(?:\.\d+)?)")?,
            compile(r"c\.g\.p\.a\.?[:\s]*(\d+(?:\.\d+)?)")?,
            // N/10 standing alone, not a piece of a dd/mm/yyyy date
            compile(r"(?:^|[^\d./])(\d+(?:\.\d+)?)\s*/\s*10(?:[^\d/]|$)")?,
        ];

        let mut patterns = Vec::new();
        let mut alias_owner = Vec::new();
        for (owner, (_, aliases)) in TECHNOLOGY_ALIASES.iter().enumerate() {
            for alias in *aliases {
                patterns.push(*alias);
                alias_owner.push(owner);
            }
        }

        let technology_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&patterns)
            .map_err(|e| ScreenerError::AnalysisFailed(format!("Failed to build technology matcher: {}", e)))?;

        Ok(Self {
            email_regex,
            phone_regex,
            year_regex,
            cgpa_patterns,
            technology_matcher,
            alias_owner,
        })
    }

    /// Run every extractor over one document.
    pub fn extract_all(&self, text: &str, normalized: &str) -> ExtractedFields {
        ExtractedFields {
            candidate_name: self.extract_name(text),
            email: self.extract_email(text),
            phone: self.extract_phone(text),
            experience_years: self.extract_experience_years(text, normalized),
            technologies: self.extract_technologies(normalized),
            notable_achievements: self.extract_achievements(text),
            projects_count: self.count_projects(normalized),
            education: self.extract_education(normalized),
            cgpa: self.extract_cgpa(normalized),
        }
    }

    pub fn extract_name(&self, text: &str) -> String {
        text.lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or(NOT_FOUND)
            .to_string()
    }

    pub fn extract_email(&self, text: &str) -> String {
        self.email_regex
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| NOT_PROVIDED.to_string())
    }

    pub fn extract_phone(&self, text: &str) -> String {
        self.phone_regex
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| NOT_PROVIDED.to_string())
    }

    /// Explicit phrase buckets first, then the span between the first and the
    /// last `20xx` token, then zero.
    pub fn extract_experience_years(&self, text: &str, normalized: &str) -> u32 {
        if let Some(years) = keywords::first_match(normalized, EXPERIENCE_BUCKETS) {
            return years;
        }

        let years: Vec<u32> = self
            .year_regex
            .find_iter(text)
            .filter_map(|m| m.as_str().parse().ok())
            .collect();

        match (years.first(), years.last()) {
            (Some(first), Some(last)) if years.len() >= 2 => last.saturating_sub(*first),
            _ => 0,
        }
    }

    /// Canonical technology names in table order, each at most once.
    pub fn extract_technologies(&self, normalized: &str) -> Vec<String> {
        let found: BTreeSet<usize> = self
            .technology_matcher
            .find_overlapping_iter(normalized)
            .map(|mat| self.alias_owner[mat.pattern().as_usize()])
            .collect();

        found
            .into_iter()
            .map(|owner| TECHNOLOGY_ALIASES[owner].0.to_string())
            .collect()
    }

    pub fn count_projects(&self, normalized: &str) -> u32 {
        normalized.matches("project").count() as u32
    }

    pub fn extract_achievements(&self, text: &str) -> Vec<String> {
        text.lines()
            .filter(|line| line.chars().count() > ACHIEVEMENT_MIN_LINE_CHARS)
            .filter(|line| keywords::contains_any(&line.to_lowercase(), ACHIEVEMENT_VERBS))
            .map(|line| line.trim().to_string())
            .take(MAX_ACHIEVEMENTS)
            .collect()
    }

    pub fn extract_education(&self, normalized: &str) -> String {
        keywords::first_match(normalized, EDUCATION_LEVELS)
            .unwrap_or(DEFAULT_EDUCATION)
            .to_string()
    }

    /// First value on the 0-10 scale matched by the ordered CGPA patterns.
    /// Out-of-range numbers are incidental matches and are skipped.
    pub fn extract_cgpa(&self, normalized: &str) -> Option<f64> {
        for pattern in &self.cgpa_patterns {
            for caps in pattern.captures_iter(normalized) {
                let Some(raw) = caps.get(1) else { continue };
                match raw.as_str().parse::<f64>() {
                    Ok(value) if (0.0..=10.0).contains(&value) => return Some(value),
                    Ok(value) => debug!("Ignoring out-of-range cgpa candidate {}", value),
                    Err(e) => debug!("Ignoring unparsable cgpa candidate '{}': {}", raw.as_str(), e),
                }
            }
        }
        None
    }
}

/// Case-fold and flatten typographic punctuation so keyword rules see one
/// spelling ("5–10 Years" becomes "5-10 years").
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2013}' | '\u{2014}' => '-',
            _ => c,
        })
        .collect::<String>()
        .to_lowercase()
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| ScreenerError::AnalysisFailed(format!("Invalid pattern '{}': {}", pattern, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> FieldExtractor {
        FieldExtractor::new().unwrap()
    }

    #[test]
    fn test_contact_details() {
        let fx = extractor();
        let text = "Priya Sharma\npriya.sharma@mail.example.com | +(555) 123-4567\n";
        assert_eq!(fx.extract_name(text), "Priya Sharma");
        assert_eq!(fx.extract_email(text), "priya.sharma@mail.example.com");
        assert_eq!(fx.extract_phone(text), "+(555) 123-4567");
    }

    #[test]
    fn test_missing_contact_details() {
        let fx = extractor();
        assert_eq!(fx.extract_email("no contact here"), NOT_PROVIDED);
        assert_eq!(fx.extract_phone("no contact here"), NOT_PROVIDED);
        assert_eq!(fx.extract_name("\n   \n"), NOT_FOUND);
    }

    #[test]
    fn test_name_skips_leading_blank_lines() {
        assert_eq!(extractor().extract_name("\n\n  Arjun Mehta  \nEngineer"), "Arjun Mehta");
    }

    #[test]
    fn test_cgpa_patterns() {
        let fx = extractor();
        assert_eq!(fx.extract_cgpa("cgpa: 8.7"), Some(8.7));
        assert_eq!(fx.extract_cgpa("c.g.p.a 9.1 (first class)"), Some(9.1));
        assert_eq!(fx.extract_cgpa("graduated with 7.9/10"), Some(7.9));
        assert_eq!(fx.extract_cgpa("no grades listed"), None);
    }

    #[test]
    fn test_cgpa_out_of_range_is_discarded() {
        let fx = extractor();
        assert_eq!(fx.extract_cgpa("cgpa: 85"), None);
        // out-of-range first match falls through to the next valid candidate
        assert_eq!(fx.extract_cgpa("cgpa 72 percentile, cgpa 8.2"), Some(8.2));
        assert_eq!(fx.extract_cgpa("scored 95/100 in boards"), None);
        assert_eq!(fx.extract_cgpa("10/10 rating"), Some(10.0));
    }

    #[test]
    fn test_cgpa_pattern_order() {
        // the explicit cgpa label beats an earlier x/10 rating
        assert_eq!(extractor().extract_cgpa("communication 9/10. cgpa: 7.4"), Some(7.4));
    }

    #[test]
    fn test_experience_buckets() {
        let fx = extractor();
        let cases = [
            ("10+ years building systems", 12),
            ("over 5+ years in fintech", 7),
            ("3-5 years of backend work", 4),
            ("about 2 years at a startup", 2),
            ("fresher looking for roles", 0),
        ];
        for (text, expected) in cases {
            assert_eq!(fx.extract_experience_years(text, text), expected, "{}", text);
        }
    }

    #[test]
    fn test_experience_from_year_tokens() {
        let fx = extractor();
        let text = "Acme Corp 2016 - 2019\nGlobex 2019 - 2023";
        assert_eq!(fx.extract_experience_years(text, &normalize(text)), 7);
    }

    #[test]
    fn test_experience_never_negative() {
        let fx = extractor();
        let text = "Graduated 2022, school leaving 2018";
        assert_eq!(fx.extract_experience_years(text, &normalize(text)), 0);
        assert_eq!(fx.extract_experience_years("joined 2021", "joined 2021"), 0);
    }

    #[test]
    fn test_technologies_deduplicated_in_table_order() {
        let fx = extractor();
        let text = normalize("Kubernetes, React, react, python and PyTorch, TensorFlow");
        let techs = fx.extract_technologies(&text);
        assert_eq!(techs, vec!["Python", "React", "Machine Learning", "Kubernetes"]);
    }

    #[test]
    fn test_projects_and_education() {
        let fx = extractor();
        let text = normalize("Projects\nProject Alpha\nSide project\nBachelor of Science");
        assert_eq!(fx.count_projects(&text), 3);
        assert_eq!(fx.extract_education(&text), "B.Tech");
        assert_eq!(fx.extract_education("m.tech in vlsi"), "M.Tech");
        assert_eq!(fx.extract_education("high school"), DEFAULT_EDUCATION);
    }

    #[test]
    fn test_achievements_limited_and_ordered() {
        let fx = extractor();
        let text = "Led team\n\
                    Developed a billing platform for 2M users\n\
                    Designed the event pipeline end to end\n\
                    Built internal tooling for releases\n\
                    Created onboarding docs for new hires";
        let achievements = fx.extract_achievements(text);
        assert_eq!(
            achievements,
            vec![
                "Developed a billing platform for 2M users",
                "Designed the event pipeline end to end",
                "Built internal tooling for releases",
            ]
        );
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let fx = extractor();
        let text = "Meera Iyer\nmeera@example.org\nReact, Docker, SQL\nCGPA: 8.4\n2018 2022";
        let first = fx.extract_all(text, &normalize(text));
        let second = fx.extract_all(text, &normalize(text));
        assert_eq!(first, second);
    }

    #[test]
    fn test_normalize_dashes() {
        assert_eq!(normalize("5\u{2013}10 Years"), "5-10 years");
    }

    #[test]
    fn test_dates_are_not_read_as_cgpa() {
        let fx = extractor();
        assert_eq!(fx.extract_cgpa(&normalize("Intern, Acme (05/10/2022 - 08/10/2022)")), None);
        assert_eq!(fx.extract_cgpa("joined 12/05/10"), None);
        assert_eq!(fx.extract_cgpa("started 05/10/2022, graduated with 8.6/10"), Some(8.6));
    }
}
