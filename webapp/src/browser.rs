use common::{
    NavigationHost, ScrollListener, ScrollSource, SectionBounds, SectionId, SectionLayout,
    SectionNavigator,
};
use gloo_events::EventListener;
use tracing::trace;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, Window};

// one measurement of the live page
//
// window and document are looked up once per tick; if either is missing every section
// counts as unmeasurable and the tracker keeps its previous answer
pub struct BrowserLayout {
    window: Option<Window>,
    document: Option<Document>,
}

impl BrowserLayout {
    pub fn current() -> Self {
        let window = web_sys::window();
        let document = window.as_ref().and_then(|w| w.document());

        BrowserLayout { window, document }
    }
}

impl SectionLayout for BrowserLayout {
    fn scroll_offset(&self) -> f64 {
        match self.window.as_ref().map(|w| w.scroll_y()) {
            Some(Ok(offset)) => offset,
            Some(Err(err)) => {
                trace!("failed to read scroll offset: {err:?}");
                0.0
            }
            None => 0.0,
        }
    }

    fn bounds(&self, section: SectionId) -> Option<SectionBounds> {
        let element = self.document.as_ref()?.get_element_by_id(section.dom_id())?;
        let rect = element.get_bounding_client_rect();

        Some(SectionBounds {
            top: rect.top(),
            bottom: rect.bottom(),
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserHost;

impl NavigationHost for BrowserHost {
    type Target = Element;

    fn find(&self, id: &str) -> Option<Element> {
        web_sys::window()?.document()?.get_element_by_id(id)
    }

    fn smooth_scroll(&self, target: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);

        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub type Navigator = SectionNavigator<BrowserHost>;

pub fn navigator() -> Navigator {
    SectionNavigator::new(BrowserHost)
}

// the window's scroll events
//
// gloo's EventListener removes itself from the window when dropped, which is exactly the
// registration contract ScrollListener relies on
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserWindow;

impl ScrollSource for BrowserWindow {
    type Layout = BrowserLayout;
    type Registration = EventListener;

    fn layout(&self) -> BrowserLayout {
        BrowserLayout::current()
    }

    fn register(&self, mut on_scroll: Box<dyn FnMut()>) -> Option<EventListener> {
        let window = web_sys::window()?;

        Some(EventListener::new(&window, "scroll", move |_| on_scroll()))
    }
}

pub type PageScrollListener = ScrollListener<BrowserWindow>;
