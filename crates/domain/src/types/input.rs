//! Request inputs and their validation rules
//!
//! Inputs arrive with every field optional. Validation collects all
//! violations at once so the caller can fix a form in one round trip.
//! Timeline inputs validate into drafts; the timeline editor turns a draft
//! into an entry by assigning its identifier.

use chrono::{DateTime, NaiveDate};
use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};

use super::ids::EntryId;
use super::timeline::{EducationEntry, ExperienceEntry};
use crate::constants::SKILLS_DELIMITER;
use crate::errors::{DevfolioError, FieldViolation, Result};

/// Scalar, skills and social inputs for creating or updating a profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileInput {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub github_username: Option<String>,
    /// Comma-delimited list, e.g. `"rust, go"`
    pub skills: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

impl ProfileInput {
    /// `status` and at least one skill are required.
    pub fn validate(&self) -> Result<()> {
        let mut violations = Vec::new();
        if is_blank(self.status.as_deref()) {
            violations.push(FieldViolation::new("status", "Status is required"));
        }
        let has_skill = self.skills.as_deref().is_some_and(|skills| {
            skills.split(SKILLS_DELIMITER).any(|skill| !skill.trim().is_empty())
        });
        if !has_skill {
            violations.push(FieldViolation::new("skills", "Skills is required"));
        }
        finish(violations, ())
    }
}

/// Experience entry as submitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceInput {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    #[serde(deserialize_with = "lenient_flag")]
    pub current: Option<bool>,
    pub description: Option<String>,
}

/// Validated experience entry awaiting an identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceDraft {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

impl ExperienceInput {
    /// `title`, `company` and a parseable `from` date are required.
    pub fn validate(self) -> Result<ExperienceDraft> {
        let mut violations = Vec::new();
        let title = required(self.title, "title", "Title is required", &mut violations);
        let company = required(self.company, "company", "Company is required", &mut violations);
        let from = required_date(self.from, "from", "From is required", &mut violations);
        let to = optional_date(self.to, "to", &mut violations);

        match (title, company, from) {
            (Some(title), Some(company), Some(from)) if violations.is_empty() => {
                Ok(ExperienceDraft {
                    title,
                    company,
                    location: present(self.location),
                    from,
                    to,
                    current: self.current.unwrap_or(false),
                    description: present(self.description),
                })
            }
            _ => Err(DevfolioError::InvalidInput(violations)),
        }
    }
}

impl ExperienceDraft {
    pub fn into_entry(self, id: EntryId) -> ExperienceEntry {
        ExperienceEntry {
            id,
            title: self.title,
            company: self.company,
            location: self.location,
            from: self.from,
            to: self.to,
            current: self.current,
            description: self.description,
        }
    }
}

/// Reads a flag sent either as a JSON boolean or as `"true"`/`"false"`,
/// the way HTML forms post checkboxes. An empty string is absent.
fn lenient_flag<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Option::<Flag>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Flag::Bool(value)) => Ok(Some(value)),
        Some(Flag::Text(text)) => match text.trim() {
            "" => Ok(None),
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            other => Err(D::Error::invalid_value(Unexpected::Str(other), &"a boolean")),
        },
    }
}

/// Education entry as submitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationInput {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    #[serde(deserialize_with = "lenient_flag")]
    pub current: Option<bool>,
    pub description: Option<String>,
}

/// Validated education entry awaiting an identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationDraft {
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

impl EducationInput {
    /// `school`, `degree`, `fieldOfStudy` and a parseable `from` date are
    /// required.
    pub fn validate(self) -> Result<EducationDraft> {
        let mut violations = Vec::new();
        let school = required(self.school, "school", "School is required", &mut violations);
        let degree = required(self.degree, "degree", "Degree is required", &mut violations);
        let field_of_study = required(
            self.field_of_study,
            "fieldOfStudy",
            "Field of study is required",
            &mut violations,
        );
        let from = required_date(self.from, "from", "From is required", &mut violations);
        let to = optional_date(self.to, "to", &mut violations);

        match (school, degree, field_of_study, from) {
            (Some(school), Some(degree), Some(field_of_study), Some(from))
                if violations.is_empty() =>
            {
                Ok(EducationDraft {
                    school,
                    degree,
                    field_of_study,
                    from,
                    to,
                    current: self.current.unwrap_or(false),
                    description: present(self.description),
                })
            }
            _ => Err(DevfolioError::InvalidInput(violations)),
        }
    }
}

impl EducationDraft {
    pub fn into_entry(self, id: EntryId) -> EducationEntry {
        EducationEntry {
            id,
            school: self.school,
            degree: self.degree,
            field_of_study: self.field_of_study,
            from: self.from,
            to: self.to,
            current: self.current,
            description: self.description,
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn required(
    value: Option<String>,
    param: &str,
    msg: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    let value = present(value);
    if value.is_none() {
        violations.push(FieldViolation::new(param, msg));
    }
    value
}

fn required_date(
    value: Option<String>,
    param: &str,
    msg: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<NaiveDate> {
    let raw = required(value, param, msg, violations)?;
    let parsed = parse_date(&raw);
    if parsed.is_none() {
        violations.push(FieldViolation::new(param, format!("{param} must be a valid date")));
    }
    parsed
}

fn optional_date(
    value: Option<String>,
    param: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<NaiveDate> {
    let raw = present(value)?;
    let parsed = parse_date(&raw);
    if parsed.is_none() {
        violations.push(FieldViolation::new(param, format!("{param} must be a valid date")));
    }
    parsed
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|ts| ts.date_naive()))
}

fn finish<T>(violations: Vec<FieldViolation>, value: T) -> Result<T> {
    if violations.is_empty() {
        Ok(value)
    } else {
        Err(DevfolioError::InvalidInput(violations))
    }
}
