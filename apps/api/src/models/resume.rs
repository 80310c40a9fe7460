//! The resume aggregate as the browser app stores it.
//!
//! Wire format is the app's JSON snapshot: camelCase keys, every field
//! optional. Absent arrays deserialize to empty, absent strings to blank,
//! so a half-filled draft always round-trips into a well-formed `Resume`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::AppError;

pub const MIN_SKILL_LEVEL: u8 = 1;
pub const MAX_SKILL_LEVEL: u8 = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkExperience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    /// Achievement bullets, one string per line.
    pub description: Vec<String>,
}

impl WorkExperience {
    /// All bullets concatenated with a single space.
    pub fn joined_description(&self) -> String {
        self.description.join(" ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    #[default]
    Technical,
    Soft,
    Language,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    /// Proficiency, 1–5. Checked by [`Resume::validate`], not by the scorer.
    pub level: u8,
    pub category: SkillCategory,
}

impl Default for Skill {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            level: 3,
            category: SkillCategory::Technical,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageLevel {
    Basic,
    #[default]
    Intermediate,
    Advanced,
    Fluent,
    Native,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Language {
    pub id: String,
    pub name: String,
    pub level: LanguageLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Interest {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomSection {
    pub id: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    #[default]
    Modern,
    Classic,
    Creative,
    Minimal,
    Professional,
    Executive,
    Technical,
    Elegant,
    Bold,
    Simple,
    Contemporary,
}

impl TemplateId {
    pub const ALL: [TemplateId; 11] = [
        TemplateId::Modern,
        TemplateId::Classic,
        TemplateId::Creative,
        TemplateId::Minimal,
        TemplateId::Professional,
        TemplateId::Executive,
        TemplateId::Technical,
        TemplateId::Elegant,
        TemplateId::Bold,
        TemplateId::Simple,
        TemplateId::Contemporary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Classic => "classic",
            TemplateId::Creative => "creative",
            TemplateId::Minimal => "minimal",
            TemplateId::Professional => "professional",
            TemplateId::Executive => "executive",
            TemplateId::Technical => "technical",
            TemplateId::Elegant => "elegant",
            TemplateId::Bold => "bold",
            TemplateId::Simple => "simple",
            TemplateId::Contemporary => "contemporary",
        }
    }

    pub fn parse(id: &str) -> Option<TemplateId> {
        TemplateId::ALL.into_iter().find(|t| t.as_str() == id)
    }

    /// Lenient parse for stored snapshots: unknown or blank ids become `modern`.
    pub fn parse_or_default(id: &str) -> TemplateId {
        TemplateId::parse(id).unwrap_or_default()
    }
}

/// Snapshots saved by older app versions can name templates this build
/// doesn't ship. Those still load and render with the default layout.
fn deserialize_template<'de, D>(deserializer: D) -> Result<TemplateId, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .map(TemplateId::parse_or_default)
        .unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resume {
    pub personal_info: PersonalInfo,
    pub work_experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub languages: Vec<Language>,
    pub interests: Vec<Interest>,
    pub custom_sections: Vec<CustomSection>,
    #[serde(deserialize_with = "deserialize_template")]
    pub template: TemplateId,
}

impl Resume {
    /// Boundary check applied before a resume reaches the scorer.
    /// The scorer itself trusts its input and never fails.
    pub fn validate(&self) -> Result<(), AppError> {
        for (index, skill) in self.skills.iter().enumerate() {
            if !(MIN_SKILL_LEVEL..=MAX_SKILL_LEVEL).contains(&skill.level) {
                return Err(AppError::Validation(format!(
                    "skills[{index}].level must be between {MIN_SKILL_LEVEL} and {MAX_SKILL_LEVEL}, got {}",
                    skill.level
                )));
            }
        }
        Ok(())
    }
}

/// True when an optional text field carries a non-empty value.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
