//! Portfolio content records.
//!
//! Records arrive pre-fetched and already validated from the site's content
//! API, with camelCase keys. They are only read here, never checked.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Number of content characters used when a post has no excerpt.
const SUMMARY_CHARS: usize = 150;

/// Everything the section panels display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub posts: Vec<BlogPost>,
    pub experiences: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: Vec<SkillEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub cover_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// Teaser text: the excerpt, or the start of the content.
    pub fn summary(&self) -> String {
        let body = match self.excerpt.as_deref() {
            Some(excerpt) if !excerpt.is_empty() => excerpt.to_string(),
            _ => self.content.chars().take(SUMMARY_CHARS).collect(),
        };
        format!("{body}...")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: String,
    pub position: String,
    pub company: String,
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: String,
}

/// An experience description split into a lead paragraph and bullet points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    pub text: String,
    pub bullets: Vec<String>,
}

impl ExperienceEntry {
    /// Year range, e.g. `2021 - Present`.
    pub fn period(&self) -> String {
        match self.end_date {
            Some(end) => format!("{} - {}", self.start_date.year(), end.year()),
            None => format!("{} - Present", self.start_date.year()),
        }
    }

    /// Parse the description field.
    ///
    /// Newer entries store a JSON object with `text` and `bullets`; older
    /// ones store plain text, which is returned as-is with no bullets.
    pub fn parsed_description(&self) -> Description {
        if self.description.is_empty() {
            return Description::default();
        }

        let value = serde_json::from_str::<serde_json::Value>(&self.description).ok();
        let Some((text, bullets)) = value
            .as_ref()
            .and_then(|v| Some((v.get("text")?, v.get("bullets")?)))
        else {
            return Description {
                text: self.description.clone(),
                bullets: Vec::new(),
            };
        };

        // Each part falls back on its own.
        let text = match text {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        };
        let bullets = bullets
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|b| b.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();
        Description { text, bullets }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    /// Comma separated technology names.
    #[serde(default)]
    pub tech_stack: String,
    #[serde(default)]
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectEntry {
    /// Technology names from the comma separated stack.
    pub fn tech(&self) -> Vec<&str> {
        self.tech_stack
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillEntry {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub icon: Option<String>,
    /// Percent, 0-100.
    pub proficiency: f32,
}

/// Group skills by category, keeping the order in which categories first
/// appear and the input order within each category.
pub fn group_skills(skills: &[SkillEntry]) -> Vec<(&str, Vec<&SkillEntry>)> {
    let mut groups: Vec<(&str, Vec<&SkillEntry>)> = Vec::new();
    for skill in skills {
        match groups.iter_mut().find(|(c, _)| *c == skill.category) {
            Some((_, members)) => members.push(skill),
            None => groups.push((skill.category.as_str(), vec![skill])),
        }
    }
    groups
}
