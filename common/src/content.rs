use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::tracker::TrackerConfig;

// the page content shipped with the app
//
// there is no filesystem in the browser, so the toml document is compiled in
pub const EMBEDDED_CONTENT: &str = include_str!("../content/portfolio.toml");

// icon names understood by the glyph collaborator in the webapp
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconName {
    Github,
    Linkedin,
    Mail,
    Download,
    ExternalLink,
    ChevronRight,
    Code,
    Database,
    Zap,
    Award,
    MapPin,
    Phone,
}

impl IconName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Linkedin => "linkedin",
            Self::Mail => "mail",
            Self::Download => "download",
            Self::ExternalLink => "external-link",
            Self::ChevronRight => "chevron-right",
            Self::Code => "code",
            Self::Database => "database",
            Self::Zap => "zap",
            Self::Award => "award",
            Self::MapPin => "map-pin",
            Self::Phone => "phone",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Highlight {
    pub title: String,
    pub body: String,
    pub icon: IconName,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Profile {
    pub name: String,

    // monogram shown in the logo badge
    pub initials: String,
    pub headline: String,
    pub tagline: String,
    pub location: String,

    // the bold opening line of the about card, followed by the bio paragraphs
    pub lead: String,
    pub bio: Vec<String>,
    pub highlight: Highlight,

    pub availability: String,
    pub footer_tagline: String,
    pub copyright: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Stat {
    pub number: String,
    pub label: String,

    // css animation-delay, staggers the cards
    #[serde(default)]
    pub delay: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Project {
    pub title: String,
    pub affiliation: String,
    pub category: String,
    pub description: String,
    pub impact: Vec<String>,
    pub tech: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SkillCategory {
    pub category: String,
    pub icon: IconName,
    pub items: Vec<String>,
    #[serde(default = "default_proficiency")]
    pub proficiency: String,
}

fn default_proficiency() -> String {
    String::from("Production Experience")
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ContactInfo {
    pub email: String,

    // tel: target and the human readable form
    pub phone: String,
    pub phone_display: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,

    // relative path of the downloadable resume
    pub resume: String,
}

impl ContactInfo {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

/// Everything the page displays.  Loaded once at start-up and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Content {
    #[serde(default)]
    pub tracker: TrackerConfig,

    pub profile: Profile,
    pub stats: Vec<Stat>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub contact: ContactInfo,
}

impl Content {
    #[instrument(level = Level::DEBUG, skip(doc))]
    pub fn from_toml(doc: &str) -> Result<Self> {
        debug!("parsing content document");

        let content: Content = toml::from_str(doc).context("failed to parse content document")?;
        content.validate()?;

        debug!(
            projects = content.projects.len(),
            skills = content.skills.len(),
            "successfully parsed content document"
        );
        Ok(content)
    }

    pub fn embedded() -> Result<Self> {
        Content::from_toml(EMBEDDED_CONTENT)
    }

    // required fields are the ones the page would render as visibly broken when empty
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.profile.name.trim().is_empty(), "profile name is empty");
        ensure!(!self.contact.email.trim().is_empty(), "contact email is empty");

        for (idx, project) in self.projects.iter().enumerate() {
            ensure!(!project.title.trim().is_empty(), "project {idx} has no title");
        }

        for (idx, skill) in self.skills.iter().enumerate() {
            ensure!(!skill.category.trim().is_empty(), "skill group {idx} has no category");
        }

        ensure!(
            self.tracker.threshold >= 0.0 && self.tracker.probe_line >= 0.0,
            "tracker lines must not be negative"
        );

        Ok(())
    }
}
