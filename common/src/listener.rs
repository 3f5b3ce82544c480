use std::{cell::RefCell, rc::Rc};

use tracing::debug;

use crate::tracker::{ScrollTracker, SectionLayout};

/// Something that emits scroll notifications and can be measured at each one.
///
/// Dropping the `Registration` must deregister the callback.
pub trait ScrollSource: Clone + 'static {
    type Layout: SectionLayout;
    type Registration;

    fn layout(&self) -> Self::Layout;

    // None when the source cannot deliver events at all (e.g. no window)
    fn register(&self, on_scroll: Box<dyn FnMut()>) -> Option<Self::Registration>;
}

// scroll subscription for the lifetime of the page view
//
// attach() registers the callback and release() removes it; release also runs on drop,
// so the registration can never outlive the guard's owner
pub struct ScrollListener<S: ScrollSource> {
    source: S,
    tracker: Rc<RefCell<ScrollTracker>>,
    registration: Option<S::Registration>,
}

impl<S: ScrollSource> ScrollListener<S> {
    pub fn attach(source: S, tracker: Rc<RefCell<ScrollTracker>>) -> Self {
        let on_scroll = {
            let source = source.clone();
            let tracker = tracker.clone();
            Box::new(move || {
                tracker.borrow_mut().on_scroll(&source.layout());
            })
        };

        let registration = source.register(on_scroll);
        match registration {
            Some(_) => debug!("attached scroll listener"),
            None => debug!("no scroll source available, scroll tracking disabled"),
        }

        ScrollListener {
            source,
            tracker,
            registration,
        }
    }

    // measure without waiting for the first scroll event, e.g. right after mounting
    pub fn measure(&self) {
        self.tracker.borrow_mut().on_scroll(&self.source.layout());
    }

    pub fn is_attached(&self) -> bool {
        self.registration.is_some()
    }

    pub fn release(&mut self) {
        if let Some(registration) = self.registration.take() {
            drop(registration);
            debug!("released scroll listener");
        }
    }
}

impl<S: ScrollSource> Drop for ScrollListener<S> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::tracker::SectionBounds;
    use crate::section::SectionId;

    type Handler = Rc<RefCell<Option<Box<dyn FnMut()>>>>;

    // a window with a single scroll handler slot and no mounted sections
    #[derive(Clone, Default)]
    struct FakeWindow {
        handler: Handler,
        offset: Rc<Cell<f64>>,
        available: bool,
    }

    struct FakeLayout(f64);

    impl SectionLayout for FakeLayout {
        fn scroll_offset(&self) -> f64 {
            self.0
        }

        fn bounds(&self, _section: SectionId) -> Option<SectionBounds> {
            None
        }
    }

    struct FakeRegistration(Handler);

    impl Drop for FakeRegistration {
        fn drop(&mut self) {
            self.0.borrow_mut().take();
        }
    }

    impl ScrollSource for FakeWindow {
        type Layout = FakeLayout;
        type Registration = FakeRegistration;

        fn layout(&self) -> FakeLayout {
            FakeLayout(self.offset.get())
        }

        fn register(&self, on_scroll: Box<dyn FnMut()>) -> Option<FakeRegistration> {
            if !self.available {
                return None;
            }

            *self.handler.borrow_mut() = Some(on_scroll);
            Some(FakeRegistration(self.handler.clone()))
        }
    }

    impl FakeWindow {
        fn open() -> Self {
            FakeWindow {
                available: true,
                ..Default::default()
            }
        }

        // returns whether anybody was listening
        fn scroll_to(&self, offset: f64) -> bool {
            self.offset.set(offset);
            match self.handler.borrow_mut().as_mut() {
                Some(handler) => {
                    handler();
                    true
                }
                None => false,
            }
        }
    }

    fn tracker() -> Rc<RefCell<ScrollTracker>> {
        Rc::new(RefCell::new(ScrollTracker::default()))
    }

    #[test]
    fn scroll_events_reach_the_tracker_while_attached() {
        let window = FakeWindow::open();
        let tracker = tracker();
        let listener = ScrollListener::attach(window.clone(), tracker.clone());

        assert!(listener.is_attached());
        assert!(window.scroll_to(120.0));
        assert!(tracker.borrow().state().has_scrolled_past_threshold);
    }

    #[test]
    fn release_stops_delivery() {
        let window = FakeWindow::open();
        let tracker = tracker();
        let mut listener = ScrollListener::attach(window.clone(), tracker.clone());

        listener.release();

        assert!(!listener.is_attached());
        assert!(!window.scroll_to(120.0));
        assert!(!tracker.borrow().state().has_scrolled_past_threshold);
    }

    #[test]
    fn dropping_the_guard_deregisters() {
        let window = FakeWindow::open();
        let tracker = tracker();

        {
            let _listener = ScrollListener::attach(window.clone(), tracker.clone());
            assert!(window.handler.borrow().is_some());
        }

        assert!(window.handler.borrow().is_none());
        assert!(!window.scroll_to(500.0));
        assert!(!tracker.borrow().state().has_scrolled_past_threshold);
    }

    #[test]
    fn second_release_is_harmless() {
        let window = FakeWindow::open();
        let mut listener = ScrollListener::attach(window.clone(), tracker());

        listener.release();
        listener.release();
        drop(listener);

        assert!(window.handler.borrow().is_none());
    }

    #[test]
    fn measure_works_without_a_source() {
        let window = FakeWindow::default();
        window.offset.set(80.0);
        let tracker = tracker();
        let listener = ScrollListener::attach(window.clone(), tracker.clone());

        assert!(!listener.is_attached());
        listener.measure();
        assert!(tracker.borrow().state().has_scrolled_past_threshold);
    }
}
