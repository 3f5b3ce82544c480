use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

// page sections
//
// the declaration order doubles as the scan order used by the scroll tracker,
// so it must match the top-to-bottom layout of the page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Contact,
    ];

    /// The element id the section is mounted under.
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    /// Text shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section id: {}", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|section| section.dom_id() == s)
            .ok_or_else(|| UnknownSection(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_order_matches_page_layout() {
        let ids: Vec<&str> = SectionId::ALL.iter().map(|s| s.dom_id()).collect();
        assert_eq!(ids, ["home", "about", "projects", "skills", "contact"]);
    }

    #[test]
    fn parses_dom_ids_only() {
        assert_eq!("skills".parse::<SectionId>(), Ok(SectionId::Skills));
        assert!("Skills".parse::<SectionId>().is_err());
        assert_eq!(
            "nonexistent".parse::<SectionId>(),
            Err(UnknownSection("nonexistent".to_owned()))
        );
    }

    #[test]
    fn defaults_to_home() {
        assert_eq!(SectionId::default(), SectionId::Home);
    }
}
