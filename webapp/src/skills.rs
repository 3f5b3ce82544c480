use std::rc::Rc;

use dioxus::prelude::*;

use common::{Content, SectionId};

use crate::components::{SectionHeader, icon::Icon};

#[component]
pub fn Skills() -> Element {
    let content = use_context::<Rc<Content>>();

    rsx! {
        section { id: SectionId::Skills.dom_id(), class: "page-section",
            div { class: "container",
                SectionHeader {
                    title: "Technical Skills",
                    subtitle: "Production-tested technologies I use to build scalable systems".to_owned(),
                }

                div { class: "skills-grid",
                    for (idx, skill) in content.skills.iter().enumerate() {
                        div { key: "{idx}", class: "card skill-card",
                            div { class: "skill-header",
                                div { class: "skill-icon",
                                    Icon { name: skill.icon }
                                }
                                div {
                                    h3 { class: "skill-category", "{skill.category}" }
                                    span { class: "skill-proficiency", "{skill.proficiency}" }
                                }
                            }
                            div { class: "tag-list",
                                for (i, item) in skill.items.iter().enumerate() {
                                    span { key: "{i}", class: "tag tag-hover", "{item}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
