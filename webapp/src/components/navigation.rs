use std::rc::Rc;

use dioxus::prelude::*;

use common::{Content, SectionId, ThemePreference, ViewportState, view};

use crate::browser::Navigator;

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    section: SectionId,
    active: bool,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let navigator = use_context::<Navigator>();
    let section = props.section;

    rsx! {
        button {
            class: view::nav_link_class(props.active),
            onclick: move |_| navigator.navigate(section),
            "{section.label()}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ThemeToggleProps {
    theme: ThemePreference,
    on_toggle: EventHandler<()>,
}

#[component]
fn ThemeToggle(props: ThemeToggleProps) -> Element {
    let glyph = props.theme.toggle_glyph();

    rsx! {
        button {
            class: "theme-toggle",
            title: "Toggle theme",
            onclick: move |_| props.on_toggle.call(()),
            "{glyph}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    viewport: ViewportState,
    theme: ThemePreference,
    on_toggle_theme: EventHandler<()>,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let content = use_context::<Rc<Content>>();
    let profile = &content.profile;

    let items = view::nav_items(&props.viewport);

    rsx! {
        nav { class: view::navbar_class(props.viewport.has_scrolled_past_threshold),
            div { class: "container nav-container",
                div { class: "brand",
                    div { class: "monogram", "{profile.initials}" }
                    span { class: "brand-name gradient-text", "{profile.name}" }
                }

                div { class: "nav-links",
                    for item in items {
                        NavBarButton {
                            key: "{item.section}",
                            section: item.section,
                            active: item.active,
                        }
                    }
                    ThemeToggle {
                        theme: props.theme,
                        on_toggle: props.on_toggle_theme,
                    }
                }
            }
        }
    }
}
