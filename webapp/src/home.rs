use std::rc::Rc;

use dioxus::prelude::*;

use common::{Content, SectionId, content::IconName};

use crate::{browser::Navigator, components::icon::Icon};

#[component]
pub fn Hero() -> Element {
    let content = use_context::<Rc<Content>>();
    let navigator = use_context::<Navigator>();

    let profile = &content.profile;
    let contact = &content.contact;

    let to_projects = navigator.clone();
    let to_contact = navigator;

    rsx! {
        section { id: SectionId::Home.dom_id(), class: "hero",
            // decorative blurred blobs behind the heading
            div { class: "hero-backdrop",
                div { class: "blob blob-left" }
                div { class: "blob blob-right" }
            }

            div { class: "container hero-content fade-in-up",
                div { class: "hero-heading",
                    h1 { class: "hero-title", "{profile.name}" }
                    h2 { class: "hero-subtitle gradient-text", "{profile.headline}" }
                    p { class: "hero-tagline", "{profile.tagline}" }
                }

                div { class: "hero-actions",
                    button {
                        class: "btn btn-primary btn-lg",
                        onclick: move |_| to_projects.navigate(SectionId::Projects),
                        "View My Work"
                        Icon { name: IconName::ChevronRight, class: "nudge" }
                    }
                    button {
                        class: "btn btn-secondary btn-lg",
                        onclick: move |_| to_contact.navigate(SectionId::Contact),
                        "Let's Talk"
                    }
                    a {
                        class: "btn btn-secondary btn-lg",
                        href: "{contact.resume}",
                        download: "",
                        Icon { name: IconName::Download }
                        "Resume"
                    }
                }

                div { class: "hero-socials",
                    a {
                        class: "social-link",
                        href: "{contact.github}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        Icon { name: IconName::Github }
                    }
                    a {
                        class: "social-link brand-blue",
                        href: "{contact.linkedin}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        Icon { name: IconName::Linkedin }
                    }
                    a { class: "social-link", href: contact.mailto(),
                        Icon { name: IconName::Mail }
                    }
                }
            }

            div { class: "scroll-indicator",
                div { class: "scroll-indicator-dot" }
            }
        }
    }
}

#[component]
pub fn Stats() -> Element {
    let content = use_context::<Rc<Content>>();

    rsx! {
        section { class: "stats-section surface-alt",
            div { class: "container",
                div { class: "stats-grid",
                    for (idx, stat) in content.stats.iter().enumerate() {
                        div {
                            key: "{idx}",
                            class: "stat-card fade-in-up",
                            style: "animation-delay: {stat.delay};",
                            div { class: "stat-value gradient-text", "{stat.number}" }
                            div { class: "stat-label", "{stat.label}" }
                        }
                    }
                }
            }
        }
    }
}
