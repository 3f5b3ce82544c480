use std::rc::Rc;

use dioxus::prelude::*;

use common::{Content, SectionId, content::{IconName, Project}, view};

use crate::components::{SectionHeader, icon::Icon};

#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    project: Project,
}

// featured projects get a gradient frame around an inner panel; the rest are plain cards
#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;
    let inner = if project.featured { "project-inner framed" } else { "project-inner" };

    rsx! {
        div { class: view::project_card_class(project.featured),
            div { class: inner,
                div { class: "project-header",
                    div { class: "project-badges",
                        span { class: view::project_badge_class(project.featured), "{project.category}" }
                        if project.featured {
                            span { class: "project-badge star", "⭐ Featured" }
                        }
                    }
                    h3 { class: "project-title", "{project.title}" }
                    p { class: "project-affiliation", "{project.affiliation}" }
                }

                p { class: "project-description", "{project.description}" }

                div { class: "project-impact",
                    for (idx, item) in project.impact.iter().enumerate() {
                        div { key: "{idx}", class: "impact-row",
                            Icon { name: IconName::ChevronRight, class: "accent" }
                            span { "{item}" }
                        }
                    }
                }

                div { class: "tag-list",
                    for (idx, tech) in project.tech.iter().enumerate() {
                        span { key: "{idx}", class: "tag", "{tech}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    let content = use_context::<Rc<Content>>();

    rsx! {
        section { id: SectionId::Projects.dom_id(), class: "page-section surface-alt",
            div { class: "container",
                SectionHeader {
                    title: "Featured Work",
                    subtitle: "Production systems built independently. Real impact. Real users.".to_owned(),
                }

                div { class: "stack",
                    for (idx, project) in content.projects.iter().enumerate() {
                        ProjectCard { key: "{idx}", project: project.clone() }
                    }
                }
            }
        }
    }
}
