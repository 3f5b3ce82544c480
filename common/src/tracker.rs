use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::section::SectionId;

pub const DEFAULT_THRESHOLD: f64 = 50.0;

// the probe line sits just below the fixed navigation bar
pub const DEFAULT_PROBE_LINE: f64 = 150.0;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct TrackerConfig {
    // vertical offset (px) past which the navigation bar is restyled
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    // distance (px) from the viewport top of the line that selects the active section
    #[serde(default = "default_probe_line")]
    pub probe_line: f64,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_probe_line() -> f64 {
    DEFAULT_PROBE_LINE
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            threshold: DEFAULT_THRESHOLD,
            probe_line: DEFAULT_PROBE_LINE,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ViewportState {
    pub has_scrolled_past_threshold: bool,
    pub active_section: SectionId,
}

/// Bounding box of a mounted section, relative to the top of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

/// Read-only view of the rendered page, as seen at one scroll tick.
pub trait SectionLayout {
    fn scroll_offset(&self) -> f64;

    // None means the section is not mounted (or cannot be measured) right now
    fn bounds(&self, section: SectionId) -> Option<SectionBounds>;
}

pub fn past_threshold(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

pub fn probe_hit(bounds: SectionBounds, probe_line: f64) -> bool {
    bounds.top <= probe_line && bounds.bottom >= probe_line
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Observer = Box<dyn FnMut(&ViewportState)>;

/// Derives the navigation state from raw scroll positions and publishes it to observers.
///
/// There is exactly one tracker per page; it is the only writer of `ViewportState`.
pub struct ScrollTracker {
    config: TrackerConfig,
    state: ViewportState,
    observers: Vec<(Subscription, Observer)>,
    next_subscription: u64,
}

impl ScrollTracker {
    pub fn new(config: TrackerConfig) -> Self {
        ScrollTracker {
            config,
            state: ViewportState::default(),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> ViewportState {
        self.state
    }

    pub fn subscribe<F>(&mut self, observer: F) -> Subscription
    where
        F: FnMut(&ViewportState) + 'static,
    {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;

        self.observers.push((subscription, Box::new(observer)));
        subscription
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.observers.retain(|(s, _)| *s != subscription);
    }

    // first section in scan order whose box straddles the probe line
    //
    // sections that cannot be measured are skipped for this tick
    fn probe(&self, layout: &impl SectionLayout) -> Option<SectionId> {
        SectionId::ALL.into_iter().find(|section| {
            layout
                .bounds(*section)
                .is_some_and(|bounds| probe_hit(bounds, self.config.probe_line))
        })
    }

    /// Recomputes the viewport state for one scroll notification.
    ///
    /// Observers are only notified when the state actually changed.  When no section
    /// straddles the probe line the previous active section is kept.
    pub fn on_scroll(&mut self, layout: &impl SectionLayout) -> ViewportState {
        let offset = layout.scroll_offset();

        let next = ViewportState {
            has_scrolled_past_threshold: past_threshold(offset, self.config.threshold),
            active_section: self.probe(layout).unwrap_or(self.state.active_section),
        };

        trace!(offset, active = %next.active_section, "scroll tick");

        if next != self.state {
            debug!(
                active = %next.active_section,
                scrolled = next.has_scrolled_past_threshold,
                "viewport state changed"
            );

            self.state = next;
            for (_, observer) in self.observers.iter_mut() {
                observer(&next);
            }
        }

        self.state
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        ScrollTracker::new(TrackerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashMap, rc::Rc};

    use super::*;

    #[derive(Default)]
    struct FakeLayout {
        offset: f64,
        boxes: HashMap<SectionId, SectionBounds>,
    }

    impl FakeLayout {
        fn at(offset: f64) -> Self {
            FakeLayout {
                offset,
                ..Default::default()
            }
        }

        fn with(mut self, section: SectionId, top: f64, bottom: f64) -> Self {
            self.boxes.insert(section, SectionBounds { top, bottom });
            self
        }
    }

    impl SectionLayout for FakeLayout {
        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn bounds(&self, section: SectionId) -> Option<SectionBounds> {
            self.boxes.get(&section).copied()
        }
    }

    #[test]
    fn threshold_is_strict() {
        let mut tracker = ScrollTracker::default();

        for (offset, expected) in [(0.0, false), (50.0, false), (50.5, true), (120.0, true)] {
            let state = tracker.on_scroll(&FakeLayout::at(offset));
            assert_eq!(state.has_scrolled_past_threshold, expected, "offset {offset}");
        }
    }

    #[test]
    fn probe_line_edges_are_inclusive() {
        let probe = DEFAULT_PROBE_LINE;

        assert!(probe_hit(SectionBounds { top: 150.0, bottom: 900.0 }, probe));
        assert!(probe_hit(SectionBounds { top: -400.0, bottom: 150.0 }, probe));
        assert!(!probe_hit(SectionBounds { top: 151.0, bottom: 900.0 }, probe));
        assert!(!probe_hit(SectionBounds { top: -400.0, bottom: 149.0 }, probe));
    }

    #[test]
    fn only_matching_section_becomes_active() {
        let mut tracker = ScrollTracker::default();
        let layout = FakeLayout::at(2400.0)
            .with(SectionId::About, -1200.0, -300.0)
            .with(SectionId::Projects, -300.0, 900.0)
            .with(SectionId::Skills, 900.0, 1700.0);

        assert_eq!(tracker.on_scroll(&layout).active_section, SectionId::Projects);
    }

    #[test]
    fn no_match_keeps_previous_section() {
        let mut tracker = ScrollTracker::default();
        tracker.on_scroll(&FakeLayout::at(900.0).with(SectionId::About, 0.0, 600.0));
        assert_eq!(tracker.state().active_section, SectionId::About);

        // gap between sections: nothing straddles the probe line
        let state = tracker.on_scroll(
            &FakeLayout::at(1000.0)
                .with(SectionId::About, -500.0, 100.0)
                .with(SectionId::Projects, 200.0, 1000.0),
        );
        assert_eq!(state.active_section, SectionId::About);
    }

    #[test]
    fn overlapping_sections_resolve_in_scan_order() {
        let mut tracker = ScrollTracker::default();
        let layout = FakeLayout::at(3000.0)
            .with(SectionId::Contact, 0.0, 800.0)
            .with(SectionId::Skills, 100.0, 400.0);

        assert_eq!(tracker.on_scroll(&layout).active_section, SectionId::Skills);
    }

    #[test]
    fn unmounted_sections_are_skipped() {
        let mut tracker = ScrollTracker::default();
        let layout = FakeLayout::at(0.0).with(SectionId::Home, 0.0, 800.0);

        let state = tracker.on_scroll(&layout);
        assert_eq!(state.active_section, SectionId::Home);
        assert!(!state.has_scrolled_past_threshold);
    }

    #[test]
    fn observers_see_changes_only() {
        let mut tracker = ScrollTracker::default();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        tracker.subscribe(move |state| sink.borrow_mut().push(*state));

        let about = FakeLayout::at(700.0).with(SectionId::About, 50.0, 900.0);
        tracker.on_scroll(&about);
        tracker.on_scroll(&about);
        tracker.on_scroll(&FakeLayout::at(10.0).with(SectionId::Home, 0.0, 800.0));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].active_section, SectionId::About);
        assert!(seen[0].has_scrolled_past_threshold);
        assert_eq!(seen[1], ViewportState::default());
    }

    #[test]
    fn unsubscribed_observer_is_silent() {
        let mut tracker = ScrollTracker::default();
        let calls = Rc::new(RefCell::new(0));

        let counter = calls.clone();
        let subscription = tracker.subscribe(move |_| *counter.borrow_mut() += 1);
        tracker.unsubscribe(subscription);

        tracker.on_scroll(&FakeLayout::at(500.0));
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn custom_config_moves_the_lines() {
        let mut tracker = ScrollTracker::new(TrackerConfig {
            threshold: 200.0,
            probe_line: 80.0,
        });
        let layout = FakeLayout::at(120.0)
            .with(SectionId::Home, -800.0, 100.0)
            .with(SectionId::About, 100.0, 900.0);

        let state = tracker.on_scroll(&layout);
        assert!(!state.has_scrolled_past_threshold);
        assert_eq!(state.active_section, SectionId::Home);
    }
}
