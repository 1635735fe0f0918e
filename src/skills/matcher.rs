// src/skills/matcher.rs
use super::normalizer::{normalize, normalize_phrase};
use serde::{Deserialize, Serialize};

/// How candidate skills are compared with job-description tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Punctuation-stripped comparison plus the adjacent-pair fallback.
    #[default]
    Normalized,
    /// Lower-cased skill against the raw token, single tokens only.
    Strict,
}

pub struct SkillMatcher {
    mode: MatchMode,
}

impl SkillMatcher {
    pub fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    /// Candidate skills found in `jd_tokens`, in `cv_skills` order.
    ///
    /// Each skill is recorded at most once per occurrence in `cv_skills`;
    /// duplicates in the input stay duplicated in the output.
    pub fn find_common_skills<S: AsRef<str>>(
        &self,
        cv_skills: &[S],
        jd_tokens: &[String],
    ) -> Vec<String> {
        cv_skills
            .iter()
            .filter_map(|skill| match self.mode {
                MatchMode::Normalized => match_normalized(skill.as_ref(), jd_tokens),
                MatchMode::Strict => match_strict(skill.as_ref(), jd_tokens),
            })
            .collect()
    }
}

fn match_normalized(cv_skill: &str, jd_tokens: &[String]) -> Option<String> {
    let skill = normalize_phrase(cv_skill);
    // Nothing left to compare; would otherwise hit empty comma tokens.
    if skill.is_empty() {
        return None;
    }
    let last = jd_tokens.len().saturating_sub(1);

    for (i, token) in jd_tokens.iter().enumerate() {
        let current = normalize(token);
        if skill == current {
            return Some(skill);
        }

        // First and last tokens never take part in a pair.
        if i > 0 && i < last {
            let previous = normalize(&jd_tokens[i - 1]);
            let next = normalize(&jd_tokens[i + 1]);
            if skill == format!("{} {}", previous, current)
                || skill == format!("{} {}", current, next)
            {
                return Some(skill);
            }
        }
    }

    None
}

fn match_strict(cv_skill: &str, jd_tokens: &[String]) -> Option<String> {
    let skill = cv_skill.to_lowercase();
    jd_tokens
        .iter()
        .any(|token| *token == skill)
        .then_some(skill)
}
