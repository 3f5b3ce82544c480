use std::rc::Rc;

use dioxus::prelude::*;

use common::{Content, SectionId};

use crate::components::{SectionHeader, icon::Icon};

#[component]
pub fn About() -> Element {
    let content = use_context::<Rc<Content>>();
    let profile = &content.profile;
    let highlight = &profile.highlight;

    rsx! {
        section { id: SectionId::About.dom_id(), class: "page-section",
            div { class: "container narrow",
                SectionHeader { title: "About Me" }

                div { class: "stack",
                    div { class: "card about-card",
                        p { class: "about-lead", "{profile.lead}" }
                        div { class: "about-body",
                            for (idx, paragraph) in profile.bio.iter().enumerate() {
                                p { key: "{idx}", "{paragraph}" }
                            }
                        }
                    }

                    div { class: "highlight-card",
                        div { class: "highlight-icon",
                            Icon { name: highlight.icon, class: "icon-xl" }
                        }
                        div { class: "highlight-body",
                            h3 { "{highlight.title}" }
                            p { "{highlight.body}" }
                        }
                    }
                }
            }
        }
    }
}
