// src/skills/aggregator.rs
use super::normalizer::normalize_phrase;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// When two skills count as the same entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DedupRule {
    /// Identical strings only.
    #[default]
    Exact,
    /// Identical after lower-casing and punctuation stripping.
    Normalized,
}

impl DedupRule {
    fn key(self, skill: &str) -> String {
        match self {
            DedupRule::Exact => skill.to_string(),
            DedupRule::Normalized => normalize_phrase(skill),
        }
    }
}

/// `primary` followed by `extra`, keeping the first occurrence of each skill.
pub fn aggregate<A, B>(primary: &[A], extra: &[B], rule: DedupRule) -> Vec<String>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let mut seen = HashSet::new();
    primary
        .iter()
        .map(|skill| skill.as_ref())
        .chain(extra.iter().map(|skill| skill.as_ref()))
        .filter(|skill| seen.insert(rule.key(skill)))
        .map(str::to_string)
        .collect()
}
