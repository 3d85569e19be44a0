use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const PROFILE_FILE: &str = "profile.json";

static GLOBAL_PROFILE: LazyLock<Result<Profile, ProfileError>> = LazyLock::new(|| {
    let content = Content::get(PROFILE_FILE)
        .ok_or_else(|| ProfileError::NotFound(PROFILE_FILE.to_string()))?;
    let text = std::str::from_utf8(&content.data)
        .map_err(|e| ProfileError::Parse(format!("{PROFILE_FILE} is not UTF-8: {e}")))?;
    Profile::parse(text)
});

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("profile content not found: {0}")]
    NotFound(String),
    #[error("couldn't parse profile content: {0}")]
    Parse(String),
    #[error("invalid profile content: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub hero: HeroContent,
    pub about: AboutContent,
    pub skills: SkillsContent,
    pub hobbies: HobbiesContent,
    pub goals: GoalsContent,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    pub name: String,
    pub title: String,
    pub education: String,
    pub avatar: String,
    pub badge: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub label: String,
    pub palette: TagPalette,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagPalette {
    Blue,
    Indigo,
    Purple,
}

impl TagPalette {
    pub fn classes(self) -> &'static str {
        match self {
            TagPalette::Blue => {
                "bg-blue-100 dark:bg-blue-900/30 text-blue-700 dark:text-blue-300"
            }
            TagPalette::Indigo => {
                "bg-indigo-100 dark:bg-indigo-900/30 text-indigo-700 dark:text-indigo-300"
            }
            TagPalette::Purple => {
                "bg-purple-100 dark:bg-purple-900/30 text-purple-700 dark:text-purple-300"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutContent {
    pub heading: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsContent {
    pub heading: String,
    pub items: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
    /// Tailwind gradient stops for the skill bar, e.g. `from-blue-400 to-cyan-400`.
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HobbiesContent {
    pub heading: String,
    pub items: Vec<Hobby>,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hobby {
    pub name: String,
    pub icon: String,
    pub description: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalsContent {
    pub heading: String,
    pub icon: String,
    pub items: Vec<String>,
}

impl Profile {
    /// The embedded profile, parsed once per process.
    pub fn load() -> Result<&'static Profile, ProfileError> {
        GLOBAL_PROFILE.as_ref().map_err(Clone::clone)
    }

    pub fn parse(text: &str) -> Result<Profile, ProfileError> {
        let profile: Profile =
            serde_json::from_str(text).map_err(|e| ProfileError::Parse(e.to_string()))?;
        profile.validate()?;
        Ok(profile)
    }

    fn validate(&self) -> Result<(), ProfileError> {
        if self.hero.name.trim().is_empty() {
            return Err(ProfileError::Invalid("hero name is empty".to_string()));
        }
        if let Some(i) = self.skills.items.iter().position(|s| s.name.trim().is_empty()) {
            return Err(ProfileError::Invalid(format!("skill {i} has no name")));
        }
        if let Some(i) = self.hobbies.items.iter().position(|h| h.name.trim().is_empty()) {
            return Err(ProfileError::Invalid(format!("hobby {i} has no name")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_json(name: &str, skill: &str) -> String {
        format!(
            r#"{{
                "hero": {{
                    "name": "{name}",
                    "title": "Student",
                    "education": "Somewhere",
                    "avatar": "A",
                    "badge": "B"
                }},
                "about": {{ "heading": "About", "paragraphs": ["one"] }},
                "skills": {{
                    "heading": "Skills",
                    "items": [{{ "name": "{skill}", "icon": "x", "color": "from-a to-b" }}]
                }},
                "hobbies": {{ "heading": "Hobbies", "items": [], "note": "" }},
                "goals": {{ "heading": "Goals", "icon": "g", "items": [] }},
                "footer": "bye"
            }}"#
        )
    }

    #[test]
    fn test_embedded_profile_loads() {
        let profile = Profile::load().expect("embedded profile should load");
        assert_eq!(profile.hero.name, "Nguyễn Đinh Tuấn Khoa");
        assert_eq!(profile.hero.tags.len(), 3);
        assert_eq!(profile.about.paragraphs.len(), 2);
        let skills = profile
            .skills
            .items
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(skills, vec!["React", "Node.js", "Express", "MySQL"]);
        assert_eq!(profile.hobbies.items.len(), 2);
        assert_eq!(profile.goals.items.len(), 3);
        assert!(profile.footer.contains("Tuấn Khoa"));
    }

    #[test]
    fn test_load_is_cached() {
        let first = Profile::load().expect("embedded profile should load");
        let second = Profile::load().expect("embedded profile should load");
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_parse_minimal() {
        let profile = Profile::parse(&minimal_json("Khoa", "Rust")).expect("should parse");
        assert!(profile.hero.tags.is_empty());
        assert_eq!(profile.skills.items[0].color, "from-a to-b");
    }

    #[test]
    fn test_parse_malformed() {
        let err = Profile::parse("{ \"hero\": ").unwrap_err();
        assert!(matches!(err, ProfileError::Parse(_)));
    }

    #[test]
    fn test_parse_rejects_empty_name() {
        let err = Profile::parse(&minimal_json("  ", "Rust")).unwrap_err();
        assert_eq!(err, ProfileError::Invalid("hero name is empty".to_string()));
    }

    #[test]
    fn test_parse_rejects_unnamed_skill() {
        let err = Profile::parse(&minimal_json("Khoa", "")).unwrap_err();
        assert_eq!(err, ProfileError::Invalid("skill 0 has no name".to_string()));
    }

    #[test]
    fn test_tag_palette() {
        let tag: Tag = serde_json::from_str(r#"{ "label": "x", "palette": "indigo" }"#)
            .expect("should parse tag");
        assert_eq!(tag.palette, TagPalette::Indigo);
        assert!(tag.palette.classes().contains("bg-indigo-100"));
        assert!(serde_json::from_str::<TagPalette>(r#""green""#).is_err());
    }
}
