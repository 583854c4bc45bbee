use log::{debug, warn};
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions};

use crate::state::scroll::anchor_id;

/// Something that can bring an element into view by id.
pub trait ScrollSurface {
    /// Returns false when no element carries `id`.
    fn scroll_to_id(&self, id: &str) -> bool;
}

impl ScrollSurface for Document {
    fn scroll_to_id(&self, id: &str) -> bool {
        let Some(element) = self.get_element_by_id(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Smooth-scrolls to the element an in-page link points at. A link whose
/// target is missing does nothing.
pub fn scroll_to_anchor_on<S: ScrollSurface>(surface: &S, href: &str) -> bool {
    let Some(id) = anchor_id(href) else {
        debug!("Not an in-page anchor: {}", href);
        return false;
    };
    let scrolled = surface.scroll_to_id(id);
    if !scrolled {
        debug!("No element with id {:?}, skipping scroll", id);
    }
    scrolled
}

pub fn scroll_to_anchor(href: &str) -> bool {
    match web_sys::window().and_then(|w| w.document()) {
        Some(document) => scroll_to_anchor_on(&document, href),
        None => false,
    }
}

/// Opens `url` in a new browsing context. Fire and forget.
pub fn open_external(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        warn!("Failed to open {}: {:?}", url, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakePage {
        ids: Vec<&'static str>,
        scrolled_to: RefCell<Vec<String>>,
    }

    impl FakePage {
        fn with_ids(ids: Vec<&'static str>) -> Self {
            Self {
                ids,
                scrolled_to: RefCell::new(Vec::new()),
            }
        }
    }

    impl ScrollSurface for FakePage {
        fn scroll_to_id(&self, id: &str) -> bool {
            if !self.ids.contains(&id) {
                return false;
            }
            self.scrolled_to.borrow_mut().push(id.to_string());
            true
        }
    }

    #[test]
    fn scrolls_to_present_anchor() {
        let page = FakePage::with_ids(vec!["home", "sobre", "faq"]);
        assert!(scroll_to_anchor_on(&page, "#faq"));
        assert_eq!(*page.scrolled_to.borrow(), vec!["faq".to_string()]);
    }

    #[test]
    fn missing_anchor_is_a_silent_no_op() {
        let page = FakePage::with_ids(vec!["home", "sobre"]);
        assert!(!scroll_to_anchor_on(&page, "#depoimentos"));
        assert!(page.scrolled_to.borrow().is_empty());
    }

    #[test]
    fn non_anchor_href_never_reaches_the_page() {
        let page = FakePage::with_ids(vec![""]);
        assert!(!scroll_to_anchor_on(&page, "#"));
        assert!(!scroll_to_anchor_on(&page, "https://wa.me/5511"));
        assert!(page.scrolled_to.borrow().is_empty());
    }
}
