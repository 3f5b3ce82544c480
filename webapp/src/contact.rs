use std::rc::Rc;

use dioxus::prelude::*;

use common::{Content, SectionId, content::IconName};

use crate::components::{SectionHeader, icon::Icon};

#[derive(Clone, PartialEq, Props)]
struct ContactRowProps {
    icon: IconName,
    label: String,
    value: String,
    #[props(default)]
    href: Option<String>,
}

// a row with a link target becomes an anchor, otherwise it is static text (location)
#[component]
fn ContactRow(props: ContactRowProps) -> Element {
    let body = rsx! {
        Icon { name: props.icon, class: "accent" }
        div {
            div { class: "contact-label", "{props.label}" }
            div { class: "contact-value", "{props.value}" }
        }
    };

    match props.href {
        Some(href) => rsx! {
            a { class: "contact-row interactive", href: "{href}", {body} }
        },
        None => rsx! {
            div { class: "contact-row", {body} }
        },
    }
}

#[derive(Clone, PartialEq, Props)]
struct ProfileLinkProps {
    icon: IconName,
    label: String,
    href: String,
}

#[component]
fn ProfileLink(props: ProfileLinkProps) -> Element {
    rsx! {
        a {
            class: "profile-link",
            href: "{props.href}",
            target: "_blank",
            rel: "noopener noreferrer",
            div { class: "profile-link-name",
                Icon { name: props.icon, class: "accent" }
                span { "{props.label}" }
            }
            Icon { name: IconName::ExternalLink, class: "muted nudge" }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let content = use_context::<Rc<Content>>();
    let contact = &content.contact;

    rsx! {
        section { id: SectionId::Contact.dom_id(), class: "page-section surface-alt",
            div { class: "container narrow",
                SectionHeader {
                    title: "Let's Build Something",
                    subtitle: "Open to full-time opportunities, freelance projects, and technical collaborations".to_owned(),
                }

                div { class: "gradient-frame",
                    div { class: "contact-panel",
                        div { class: "contact-column",
                            h3 { "Get In Touch" }
                            ContactRow {
                                icon: IconName::Mail,
                                label: "Email",
                                value: "{contact.email}",
                                href: contact.mailto(),
                            }
                            ContactRow {
                                icon: IconName::Phone,
                                label: "Phone",
                                value: "{contact.phone_display}",
                                href: contact.tel(),
                            }
                            ContactRow {
                                icon: IconName::MapPin,
                                label: "Location",
                                value: "{contact.location}",
                            }
                        }

                        div { class: "contact-column",
                            h3 { "Connect With Me" }
                            ProfileLink {
                                icon: IconName::Linkedin,
                                label: "LinkedIn",
                                href: "{contact.linkedin}",
                            }
                            ProfileLink {
                                icon: IconName::Github,
                                label: "GitHub",
                                href: "{contact.github}",
                            }
                            a {
                                class: "profile-link primary",
                                href: "{contact.resume}",
                                download: "",
                                div { class: "profile-link-name",
                                    Icon { name: IconName::Download }
                                    span { "Download Resume" }
                                }
                                Icon { name: IconName::ChevronRight, class: "nudge" }
                            }
                            p { class: "availability", "{content.profile.availability}" }
                        }
                    }
                }
            }
        }
    }
}
