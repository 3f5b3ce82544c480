#![allow(non_snake_case)]
use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use gloo_console::error as console_error;
use tracing::{Level, debug, info};

use common::{Content, ScrollTracker, ThemePreference, ViewportState, view};

mod browser;
use browser::{BrowserWindow, PageScrollListener, navigator};

mod components;
use components::navigation::NavBar;

mod style;

mod about;
mod contact;
mod footer;
mod home;
mod projects;
mod skills;

use about::About;
use contact::Contact;
use footer::Footer;
use home::{Hero, Stats};
use projects::Projects;
use skills::Skills;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    info!("starting portfolio");
    launch(App);
}

// the content is compiled in, so a bad document is a build mistake rather than a runtime
// condition: say so loudly in the console and stop
fn load_content() -> Content {
    match Content::embedded() {
        Ok(content) => content,
        Err(err) => {
            console_error!(format!("Failed to load page content: {err:#}"));
            panic!("failed to load page content: {err:#}");
        }
    }
}

#[component]
pub fn App() -> Element {
    let content = use_context_provider(|| Rc::new(load_content()));
    use_context_provider(navigator);

    let mut viewport = use_signal(ViewportState::default);
    let mut theme = use_signal(ThemePreference::default);

    // one tracker per page; its only observer mirrors the published state into the signal
    // that drives rendering
    let listener = use_hook(|| {
        let tracker = Rc::new(RefCell::new(ScrollTracker::new(content.tracker)));
        tracker
            .borrow_mut()
            .subscribe(move |state| viewport.set(*state));

        Rc::new(RefCell::new(PageScrollListener::attach(BrowserWindow, tracker)))
    });

    let mounted = listener.clone();
    use_effect(move || {
        let listener = mounted.borrow();
        debug!(attached = listener.is_attached(), "page mounted");
        listener.measure();
    });

    let released = listener.clone();
    use_drop(move || released.borrow_mut().release());

    let class = view::theme_class(theme());

    rsx! {
        style { "{style::PORTFOLIO_STYLES}" }
        div { class: "{class}",
            div { class: "page",
                NavBar {
                    viewport: viewport(),
                    theme: theme(),
                    on_toggle_theme: move |_| theme.write().toggle(),
                }
                Hero {}
                Stats {}
                About {}
                Projects {}
                Skills {}
                Contact {}
                Footer {}
            }
        }
    }
}
