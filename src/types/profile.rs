// src/types/profile.rs
//! Candidate profile as read from the YAML config.

use crate::skills::MatchingOptions;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Static candidate data. Text blocks are inserted into the document as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub residence: String,
    pub header: String,
    pub education: String,
    pub certificates: String,
    pub experience: String,
    pub linkedin: String,
    pub picture: Option<String>,
    #[serde(alias = "citizen")]
    pub citizenship: Option<String>,
    pub github: Option<String>,
    pub title: Option<String>,
}

impl Profile {
    /// Names of the fields a template may reference.
    pub const FIELDS: [&'static str; 13] = [
        "name",
        "email",
        "phone",
        "residence",
        "header",
        "education",
        "certificates",
        "experience",
        "linkedin",
        "picture",
        "citizenship",
        "github",
        "title",
    ];

    /// Value of a template field; `None` for unset optional fields and
    /// unknown names.
    pub fn field(&self, key: &str) -> Option<&str> {
        match key {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "phone" => Some(&self.phone),
            "residence" => Some(&self.residence),
            "header" => Some(&self.header),
            "education" => Some(&self.education),
            "certificates" => Some(&self.certificates),
            "experience" => Some(&self.experience),
            "linkedin" => Some(&self.linkedin),
            "picture" => self.picture.as_deref(),
            "citizenship" => self.citizenship.as_deref(),
            "github" => self.github.as_deref(),
            "title" => self.title.as_deref(),
            _ => None,
        }
    }

    /// Template variables; optional fields map to `None` when absent.
    pub fn variables(&self) -> HashMap<String, Option<String>> {
        Self::FIELDS
            .iter()
            .map(|key| (key.to_string(), self.field(key).map(str::to_string)))
            .collect()
    }
}

/// Skill lists and matching options from the profile config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SkillSettings {
    skills: Vec<String>,
    static_skills: Vec<String>,
    matching: MatchingOptions,
}

/// Full contents of the profile config file.
#[derive(Debug, Clone)]
pub struct CvParams {
    pub profile: Profile,
    pub skills: Vec<String>,
    pub static_skills: Vec<String>,
    pub matching: MatchingOptions,
}

impl CvParams {
    /// Parse the profile and the skill settings as two views of one document.
    ///
    /// The profile is read without `#[serde(flatten)]` so plain scalars such as
    /// `phone: +358401234567` reach the string fields as written.
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let profile: Profile = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        let settings: SkillSettings = serde_yaml::from_str(content).map_err(|e| e.to_string())?;

        let params = CvParams {
            profile,
            skills: settings.skills,
            static_skills: settings.static_skills,
            matching: settings.matching,
        };
        params.validate()?;
        Ok(params)
    }

    fn validate(&self) -> Result<(), String> {
        for (list, skills) in [("skills", &self.skills), ("static_skills", &self.static_skills)] {
            if let Some(index) = skills.iter().position(|s| s.trim().is_empty()) {
                return Err(format!("{}[{}] is empty", list, index));
            }
        }
        Ok(())
    }
}
