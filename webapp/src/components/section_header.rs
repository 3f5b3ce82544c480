use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct SectionHeaderProps {
    title: String,
    #[props(default)]
    subtitle: Option<String>,
}

#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    rsx! {
        div { class: "section-header",
            h2 { class: "section-title", "{props.title}" }
            div { class: "section-rule" }
            if let Some(subtitle) = props.subtitle {
                p { class: "section-subtitle", "{subtitle}" }
            }
        }
    }
}
