use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::effects::{
    particles::DEFAULT_PARTICLE_COUNT, scene::DEFAULT_SHAPE_COUNT,
    typewriter::DEFAULT_TYPING_DELAY_MS,
};

const PORTFOLIO_FILE: &str = "portfolio.json";

pub static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> =
    LazyLock::new(|| load(PORTFOLIO_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse content: {0}")]
    ParseError(String),
    #[error("Skill level out of range for {name}: {level}")]
    SkillLevel { name: String, level: u8 },
}

pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    PORTFOLIO.as_ref().map_err(Clone::clone)
}

pub fn load(name: &str) -> Result<Portfolio, ContentError> {
    let file = Assets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    parse(&file.data)
}

pub fn parse(raw: &[u8]) -> Result<Portfolio, ContentError> {
    let portfolio: Portfolio =
        serde_json::from_slice(raw).map_err(|e| ContentError::ParseError(e.to_string()))?;
    portfolio.validate()?;
    Ok(portfolio)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub about: About,
    pub skills: Vec<Skill>,
    pub experience: Vec<Entry>,
    pub education: Vec<Entry>,
    pub certification: Certification,
    pub services: Vec<Service>,
    pub projects: Vec<Project>,
    pub contact: Contact,
    #[serde(default)]
    pub effects: EffectsConfig,
}

impl Portfolio {
    fn validate(&self) -> Result<(), ContentError> {
        if let Some(skill) = self.skills.iter().find(|s| s.level > 100) {
            return Err(ContentError::SkillLevel {
                name: skill.name.clone(),
                level: skill.level,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    /// Also the text revealed by the hero typewriter.
    pub title: String,
    pub availability: String,
    pub summary: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub whatsapp: String,
    pub github: String,
    pub linkedin: String,
    pub cv: Download,
    pub photo: String,
}

impl Profile {
    pub fn whatsapp_link(&self, message: Option<&str>) -> String {
        match message {
            Some(text) => format!(
                "https://wa.me/{}?text={}",
                self.whatsapp,
                urlencoding::encode(text)
            ),
            None => format!("https://wa.me/{}", self.whatsapp),
        }
    }

    pub fn mailto(&self, subject: &str, body: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.email,
            urlencoding::encode(subject),
            urlencoding::encode(body)
        )
    }

    pub fn tel_link(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }

    pub fn github_url(&self) -> String {
        format!("https://github.com/{}", self.github)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Download {
    pub href: String,
    pub filename: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub heading: String,
    pub tagline: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// A row in the experience or education timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub title: String,
    pub organization: String,
    pub dates: String,
    pub location: String,
    #[serde(default)]
    pub links: Vec<Link>,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub institute: String,
    pub note: String,
    pub points: Vec<String>,
    #[serde(default)]
    pub links: Vec<Link>,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub enquiry: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Live,
    InProgress,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Live => "LIVE",
            Self::InProgress => "IN PROGRESS",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Self::Live => "status-live",
            Self::InProgress => "status-in-progress",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub category: String,
    pub title: String,
    pub subtitle: String,
    pub status: ProjectStatus,
    pub description: String,
    pub tech: Vec<String>,
    pub repo: String,
}

impl Project {
    pub fn enquiry(&self) -> String {
        format!(
            "Hi! I'm interested in the {} project. Can we discuss similar work?",
            self.title
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub description: String,
    pub whatsapp_message: String,
    pub email_subject: String,
    pub email_body: String,
    pub cta_title: String,
    pub cta_description: String,
    pub quote_message: String,
    pub call_subject: String,
    pub call_body: String,
}

/// Tunables for the decorative effects. Every field has a default so the
/// `effects` section of the content file is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub particle_count: usize,
    pub typing_delay_ms: u64,
    pub fade_in_delay_ms: u64,
    pub scene_shapes: usize,
    /// The 3D background only starts on viewports wider than this.
    pub scene_min_width: f64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            typing_delay_ms: DEFAULT_TYPING_DELAY_MS,
            fade_in_delay_ms: 100,
            scene_shapes: DEFAULT_SHAPE_COUNT,
            scene_min_width: 768.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_portfolio_loads() {
        let p = portfolio().expect("embedded content should parse");
        assert_eq!(p.profile.title, "Mobile & Software Developer");
        assert_eq!(p.profile.initials, "AH");
        assert!(!p.projects.is_empty());
        assert!(p.skills.iter().all(|s| s.level <= 100));
        assert_eq!(p.effects, EffectsConfig::default());
    }

    #[test]
    fn missing_file_is_not_found() {
        assert_eq!(
            load("nope.json").unwrap_err(),
            ContentError::NotFound("nope.json".to_string())
        );
    }

    #[test]
    fn rejects_out_of_range_skill() {
        let raw = Assets::get(PORTFOLIO_FILE).unwrap();
        let mut value: serde_json::Value = serde_json::from_slice(&raw.data).unwrap();
        value["skills"][0]["level"] = serde_json::json!(140);
        let err = parse(value.to_string().as_bytes()).unwrap_err();
        assert!(matches!(err, ContentError::SkillLevel { level: 140, .. }));
    }

    #[test]
    fn effects_section_overrides_defaults() {
        let raw = Assets::get(PORTFOLIO_FILE).unwrap();
        let mut value: serde_json::Value = serde_json::from_slice(&raw.data).unwrap();
        value["effects"] = serde_json::json!({ "particle_count": 40 });
        let p = parse(value.to_string().as_bytes()).unwrap();
        assert_eq!(p.effects.particle_count, 40);
        assert_eq!(p.effects.typing_delay_ms, 100);
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(matches!(parse(b"{"), Err(ContentError::ParseError(_))));
    }

    #[test]
    fn contact_links() {
        let p = &portfolio().unwrap().profile;
        assert_eq!(
            p.whatsapp_link(Some("Hi there! A quote & a call?")),
            "https://wa.me/923213486272?text=Hi%20there%21%20A%20quote%20%26%20a%20call%3F"
        );
        assert_eq!(p.whatsapp_link(None), "https://wa.me/923213486272");
        assert_eq!(p.tel_link(), "tel:+923213486272");
        assert_eq!(p.github_url(), "https://github.com/ahsan589");
        assert_eq!(
            p.mailto("Project Inquiry", "Hi"),
            "mailto:ahsam72642@gmail.com?subject=Project%20Inquiry&body=Hi"
        );
    }

    #[test]
    fn hero_typewriter_reveals_the_title() {
        use crate::effects::typewriter::Typewriter;

        let title = &portfolio().unwrap().profile.title;
        let mut typed = Typewriter::new(title.clone());
        while typed.tick() {}
        assert_eq!(typed.text(), title);
        assert_eq!(typed.revealed(), title.chars().count());
    }

    #[test]
    fn status_labels() {
        assert_eq!(ProjectStatus::InProgress.label(), "IN PROGRESS");
        assert_eq!(ProjectStatus::Live.class(), "status-live");
    }
}
