//! Scroll Helpers
//!
//! Smooth-scroll utilities shared by the navbar and the projects page.
//! A missing target element means the action is silently skipped,
//! never retried or surfaced as an error.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

/// Layout-settle delay before a deferred scroll, in milliseconds.
/// Best-effort timing aid, not a correctness guarantee.
pub const SETTLE_MS: u32 = 100;

/// Viewport width below which map and details share one toggled region
pub const NARROW_VIEWPORT_PX: f64 = 768.0;

fn smooth_into_view(element: &web_sys::Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Scroll the element with `id` into view; skipped when not mounted
pub fn scroll_to_id(id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        smooth_into_view(&element);
    }
}

/// Scroll the first element matching `selector` into view
pub fn scroll_to_selector(selector: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(selector).ok().flatten())
    {
        smooth_into_view(&element);
    }
}

/// Scroll to an element id after a short settle delay
pub fn scroll_to_id_settled(id: &str) {
    let id = id.to_string();
    spawn_local(async move {
        TimeoutFuture::new(SETTLE_MS).await;
        scroll_to_id(&id);
    });
}

/// Scroll to a selector after a short settle delay
pub fn scroll_to_selector_settled(selector: &str) {
    let selector = selector.to_string();
    spawn_local(async move {
        TimeoutFuture::new(SETTLE_MS).await;
        scroll_to_selector(&selector);
    });
}

pub fn scroll_window_top() {
    if let Some(win) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

/// Whether the map/details toggle applies at the current width
pub fn is_narrow_viewport() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .is_some_and(|w| w < NARROW_VIEWPORT_PX)
}

/// Lock or release body scrolling while the gallery modal is open
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let value = if locked { "hidden" } else { "auto" };
        let _ = body.style().set_property("overflow", value);
    }
}
