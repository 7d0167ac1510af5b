//! Resume snapshot — the read-only input shared by both document renderers.
//!
//! Section data arrives as loosely-typed JSON from the editor. Deserialization never
//! fails on a malformed optional field: wrong-typed scalars become empty strings,
//! non-array sections become empty sections, and non-string list items are dropped.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ────────────────────────────────────────────────────────────────────────────
// Snapshot types
// ────────────────────────────────────────────────────────────────────────────

/// One resume, frozen for the duration of a single render call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeSnapshot {
    #[serde(deserialize_with = "lenient_string")]
    pub full_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(deserialize_with = "lenient_string")]
    pub linkedin: String,
    #[serde(deserialize_with = "lenient_string")]
    pub github: String,
    #[serde(deserialize_with = "lenient_string")]
    pub summary: String,
    #[serde(deserialize_with = "lenient_entries")]
    pub education: Vec<EducationEntry>,
    #[serde(deserialize_with = "lenient_entries")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(deserialize_with = "lenient_entries")]
    pub projects: Vec<ProjectEntry>,
    /// Raw skill values as submitted. Only string entries are ever rendered.
    #[serde(deserialize_with = "lenient_list")]
    pub skills: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    #[serde(deserialize_with = "lenient_string")]
    pub degree: String,
    #[serde(deserialize_with = "lenient_string")]
    pub institution: String,
    #[serde(deserialize_with = "lenient_string")]
    pub dates: String,
    #[serde(deserialize_with = "lenient_string")]
    pub details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    #[serde(deserialize_with = "lenient_string")]
    pub role: String,
    #[serde(deserialize_with = "lenient_string")]
    pub company: String,
    #[serde(deserialize_with = "lenient_string")]
    pub dates: String,
    #[serde(deserialize_with = "lenient_strings")]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    /// `None` when the key is absent. The page document titles such entries "Project";
    /// an explicitly empty name stays empty.
    #[serde(
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub tech: String,
    #[serde(deserialize_with = "lenient_strings")]
    pub bullets: Vec<String>,
}

/// Per-section entry counts, logged alongside every export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionCounts {
    pub education: usize,
    pub experience: usize,
    pub projects: usize,
    pub skills: usize,
}

impl ResumeSnapshot {
    /// String skills in submission order; anything else (numbers, objects, null) is skipped.
    pub fn skill_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.skills.iter().filter_map(Value::as_str)
    }

    pub fn section_counts(&self) -> SectionCounts {
        SectionCounts {
            education: self.education.len(),
            experience: self.experience.len(),
            projects: self.projects.len(),
            skills: self.skills.len(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Lenient deserializers
// ────────────────────────────────────────────────────────────────────────────

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => Vec::new(),
    })
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_list(deserializer)?
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}

/// Non-object items are skipped; object items never fail because every entry field
/// is itself lenient.
fn lenient_entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(lenient_list(deserializer)?
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}
