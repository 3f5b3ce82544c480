use tracing::debug;

use crate::section::SectionId;

/// The part of the host page that can locate sections and scroll to them.
///
/// Easing and duration belong to the host's native smooth scroll.
pub trait NavigationHost {
    type Target;

    fn find(&self, id: &str) -> Option<Self::Target>;

    fn smooth_scroll(&self, target: &Self::Target);
}

// fire-and-forget navigation
//
// the resulting movement is only ever observed through later scroll ticks, so there is
// nothing to return and nothing to await.  a missing section is not an error: content
// may still be mounting, and a navigation click must never take the page down
#[derive(Clone, Debug)]
pub struct SectionNavigator<H> {
    host: H,
}

impl<H: NavigationHost> SectionNavigator<H> {
    pub fn new(host: H) -> Self {
        SectionNavigator { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn navigate_to(&self, id: &str) {
        match self.host.find(id) {
            Some(target) => {
                debug!(id, "scrolling to section");
                self.host.smooth_scroll(&target);
            }
            // distinguish a typo'd id from a section that simply has not mounted yet
            None => match id.parse::<SectionId>() {
                Ok(section) => debug!(%section, "section not mounted, ignoring navigation"),
                Err(err) => debug!(%err, "ignoring navigation"),
            },
        }
    }

    pub fn navigate(&self, section: SectionId) {
        self.navigate_to(section.dom_id())
    }
}
