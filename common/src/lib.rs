// host-independent half of the portfolio page
//
// the webapp supplies the browser side of the seams (SectionLayout for measuring,
// ScrollSource for scroll events, NavigationHost for scrolling); everything here runs and tests natively
pub mod content;
pub mod listener;
pub mod navigator;
pub mod section;
pub mod theme;
pub mod tracker;
pub mod view;

pub use content::Content;
pub use listener::{ScrollListener, ScrollSource};
pub use navigator::{NavigationHost, SectionNavigator};
pub use section::SectionId;
pub use theme::ThemePreference;
pub use tracker::{ScrollTracker, SectionBounds, SectionLayout, TrackerConfig, ViewportState};
