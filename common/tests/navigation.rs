use std::cell::RefCell;

use common::{NavigationHost, ScrollTracker, SectionId, SectionNavigator};

#[derive(Default)]
struct RecordingHost {
    mounted: Vec<&'static str>,
    requests: RefCell<Vec<String>>,
}

impl NavigationHost for RecordingHost {
    type Target = String;

    fn find(&self, id: &str) -> Option<String> {
        self.mounted
            .iter()
            .find(|mounted| **mounted == id)
            .map(|id| id.to_string())
    }

    fn smooth_scroll(&self, target: &String) {
        self.requests.borrow_mut().push(target.clone());
    }
}

fn host_with_all_sections() -> RecordingHost {
    RecordingHost {
        mounted: SectionId::ALL.iter().map(|s| s.dom_id()).collect(),
        ..Default::default()
    }
}

#[test]
fn mounted_section_gets_one_scroll_request() {
    let navigator = SectionNavigator::new(host_with_all_sections());

    navigator.navigate_to("skills");

    assert_eq!(*navigator.host().requests.borrow(), vec!["skills".to_owned()]);
}

#[test]
fn typed_navigation_uses_the_dom_id() {
    let navigator = SectionNavigator::new(host_with_all_sections());

    navigator.navigate(SectionId::Contact);
    navigator.navigate(SectionId::Projects);

    assert_eq!(
        *navigator.host().requests.borrow(),
        vec!["contact".to_owned(), "projects".to_owned()]
    );
}

#[test]
fn unknown_id_is_a_silent_noop() {
    let navigator = SectionNavigator::new(host_with_all_sections());
    let tracker = ScrollTracker::default();
    let before = tracker.state();

    navigator.navigate_to("nonexistent");

    assert!(navigator.host().requests.borrow().is_empty());
    assert_eq!(tracker.state(), before);
}

#[test]
fn unmounted_section_is_a_silent_noop() {
    let navigator = SectionNavigator::new(RecordingHost {
        mounted: vec!["home", "about"],
        ..Default::default()
    });

    navigator.navigate(SectionId::Skills);

    assert!(navigator.host().requests.borrow().is_empty());
}
