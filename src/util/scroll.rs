//! Page scrolling helpers for the single-page layout.
//!
//! Pure geometry lives in small functions so it can be tested natively;
//! the browser calls are hydrate-only and no-op during SSR.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Height of the fixed navbar; anchored sections land below it.
pub const HEADER_OFFSET_PX: f64 = 80.0;
/// Scroll distance after which the navbar switches to its compact style.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;
/// Debounce for scroll-driven section tracking.
pub const SCROLL_DEBOUNCE_MS: u32 = 100;

/// Absolute scroll position that puts an element `element_top` px from the
/// viewport top just under the header.
#[must_use]
pub fn scroll_target(element_top: f64, scroll_y: f64, offset: f64) -> f64 {
    (element_top + scroll_y - offset).max(0.0)
}

#[must_use]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

/// Section currently under the header: the last one whose top edge has
/// crossed the probe line. `tops` are viewport-relative, in page order.
#[must_use]
pub fn active_section<'a>(tops: &[(&'a str, f64)]) -> Option<&'a str> {
    let probe = HEADER_OFFSET_PX + 1.0;
    tops.iter()
        .take_while(|(_, top)| *top <= probe)
        .last()
        .or_else(|| tops.first())
        .map(|(id, _)| *id)
}

/// Current vertical scroll offset.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Viewport-relative top edge of each element id that exists in the DOM.
pub fn section_tops<'a>(ids: &[&'a str]) -> Vec<(&'a str, f64)> {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        ids.iter()
            .filter_map(|id| {
                doc.get_element_by_id(id)
                    .map(|el| (*id, el.get_bounding_client_rect().top()))
            })
            .collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ids;
        Vec::new()
    }
}

/// Smooth-scroll so the element with `id` sits under the header.
pub fn scroll_to_element(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(el) = window.document().and_then(|d| d.get_element_by_id(id)) else {
            return;
        };
        let top = scroll_target(el.get_bounding_client_rect().top(), scroll_y(), HEADER_OFFSET_PX);
        smooth_scroll(&window, top);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            smooth_scroll(&window, 0.0);
        }
    }
}

#[cfg(feature = "hydrate")]
fn smooth_scroll(window: &web_sys::Window, top: f64) {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}
