// src/skills/mod.rs
//! Job-description skill matching: tokenize, match, aggregate.

pub mod aggregator;
pub mod job_description;
pub mod matcher;
pub mod normalizer;

pub use aggregator::{aggregate, DedupRule};
pub use job_description::{read_tokens, tokenize};
pub use matcher::{MatchMode, SkillMatcher};
pub use normalizer::{normalize, normalize_phrase};

use serde::{Deserialize, Serialize};

/// Matching options read from the `matching` block of the profile config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingOptions {
    pub mode: MatchMode,
    pub dedup: DedupRule,
}

/// Result of matching one profile against one job description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillReport {
    /// Candidate skills found in the job description, before aggregation.
    pub matched: Vec<String>,
    /// Static skills followed by matched skills, deduplicated.
    pub common: Vec<String>,
}

impl SkillReport {
    pub fn build<S: AsRef<str>>(
        cv_skills: &[S],
        static_skills: &[S],
        jd_tokens: &[String],
        options: MatchingOptions,
    ) -> Self {
        let matched = SkillMatcher::new(options.mode).find_common_skills(cv_skills, jd_tokens);
        let common = aggregate(static_skills, &matched, options.dedup);
        Self { matched, common }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_static_skills_first() {
        let jd = tokenize("Looking for a Go developer familiar with docker and kubernetes");
        let report = SkillReport::build(
            &["Go", "Docker"],
            &["Teamwork"],
            &jd,
            MatchingOptions::default(),
        );

        assert_eq!(report.matched, vec!["go", "docker"]);
        assert_eq!(report.common, vec!["Teamwork", "go", "docker"]);
    }

    #[test]
    fn test_report_without_static_skills() {
        let jd = tokenize("rust, tokio, serde");
        let report = SkillReport::build(&["Serde", "Axum"], &[], &jd, MatchingOptions::default());

        assert_eq!(report.matched, vec!["serde"]);
        assert_eq!(report.common, vec!["serde"]);
    }

    #[test]
    fn test_report_has_no_blank_entries_after_trailing_comma() {
        let jd = tokenize("We need Rust, Go and 5 years");
        let report = SkillReport::build(
            &["Rust", "365"],
            &[],
            &jd,
            MatchingOptions::default(),
        );

        assert_eq!(report.matched, vec!["rust"]);
        assert!(report.common.iter().all(|skill| !skill.is_empty()));
    }

    #[test]
    fn test_report_static_skill_already_matched() {
        let jd = tokenize("We use Rust");
        let options = MatchingOptions {
            dedup: DedupRule::Normalized,
            ..MatchingOptions::default()
        };
        let report = SkillReport::build(&["Rust"], &["Rust"], &jd, options);

        assert_eq!(report.matched, vec!["rust"]);
        assert_eq!(report.common, vec!["Rust"]);
    }
}
