// view-model helpers
//
// everything the renderer derives from state lives here so it can be checked without a
// browser; the class names are opaque handles into the stylesheet
use serde::Serialize;

use crate::{section::SectionId, theme::ThemePreference, tracker::ViewportState};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub section: SectionId,
    pub label: &'static str,
    pub active: bool,
}

pub fn nav_items(state: &ViewportState) -> Vec<NavItem> {
    SectionId::ALL
        .into_iter()
        .map(|section| NavItem {
            section,
            label: section.label(),
            active: section == state.active_section,
        })
        .collect()
}

pub fn navbar_class(scrolled: bool) -> &'static str {
    if scrolled { "site-nav scrolled" } else { "site-nav" }
}

pub fn nav_link_class(active: bool) -> &'static str {
    if active { "site-nav-link active" } else { "site-nav-link" }
}

pub fn theme_class(theme: ThemePreference) -> &'static str {
    if theme.is_dark { "portfolio dark" } else { "portfolio" }
}

pub fn project_card_class(featured: bool) -> &'static str {
    if featured { "project-card featured" } else { "project-card" }
}

pub fn project_badge_class(featured: bool) -> &'static str {
    if featured { "project-badge featured" } else { "project-badge" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_nav_item_is_active() {
        for active in SectionId::ALL {
            let state = ViewportState {
                has_scrolled_past_threshold: false,
                active_section: active,
            };
            let items = nav_items(&state);

            assert_eq!(items.len(), SectionId::ALL.len());
            let lit: Vec<SectionId> = items.iter().filter(|i| i.active).map(|i| i.section).collect();
            assert_eq!(lit, vec![active]);
        }
    }

    #[test]
    fn nav_items_keep_page_order() {
        let labels: Vec<&str> = nav_items(&ViewportState::default())
            .iter()
            .map(|i| i.label)
            .collect();
        assert_eq!(labels, ["Home", "About", "Projects", "Skills", "Contact"]);
    }

    #[test]
    fn nav_items_serialize_for_debugging() {
        let items = nav_items(&ViewportState::default());
        let json = serde_json::to_value(&items[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "section": "home", "label": "Home", "active": true })
        );
    }

    #[test]
    fn classes_follow_flags() {
        assert_eq!(navbar_class(true), "site-nav scrolled");
        assert_eq!(navbar_class(false), "site-nav");
        assert_eq!(theme_class(ThemePreference { is_dark: false }), "portfolio");
        assert_eq!(theme_class(ThemePreference::default()), "portfolio dark");
        assert!(project_card_class(true).ends_with("featured"));
        assert!(!project_badge_class(false).contains("featured"));
    }
}
