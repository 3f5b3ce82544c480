use std::rc::Rc;

use dioxus::prelude::*;

use common::Content;

#[component]
pub fn Footer() -> Element {
    let content = use_context::<Rc<Content>>();
    let profile = &content.profile;

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                div { class: "footer-brand",
                    div { class: "monogram small", "{profile.initials}" }
                    span { "{profile.name}" }
                }
                p { class: "footer-tagline", "{profile.footer_tagline}" }
                p { class: "footer-copyright", "{profile.copyright}" }
            }
        }
    }
}
