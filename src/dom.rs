//! Layout queries and scrolling against the live document.
//!
//! The server build gets inert versions so components can call these
//! unconditionally.

use crate::models::{Section, SectionBounds};

/// Current vertical scroll offset of the window.
#[cfg(feature = "hydrate")]
pub fn scroll_y() -> f64 {
    match web_sys::window().map(|w| w.scroll_y()) {
        Some(Ok(y)) => y,
        _ => {
            leptos::logging::warn!("scroll offset unavailable");
            0.0
        }
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn scroll_y() -> f64 {
    0.0
}

/// Height of the window's layout viewport.
#[cfg(feature = "hydrate")]
pub fn viewport_height() -> f64 {
    match web_sys::window().map(|w| w.inner_height()) {
        Some(Ok(h)) => h.as_f64().unwrap_or_default(),
        _ => {
            leptos::logging::warn!("viewport height unavailable");
            0.0
        }
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn viewport_height() -> f64 {
    0.0
}

/// Bounds of every mounted section, in declared order. Sections that are not
/// in the document are left out.
#[cfg(feature = "hydrate")]
pub fn measure_sections() -> Vec<SectionBounds> {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        leptos::logging::warn!("document unavailable, skipping section measurement");
        return Vec::new();
    };
    Section::ALL
        .into_iter()
        .filter_map(|section| {
            let element = document
                .get_element_by_id(section.id())?
                .dyn_into::<web_sys::HtmlElement>()
                .ok()?;
            Some(SectionBounds::new(
                section,
                element.offset_top() as f64,
                element.offset_height() as f64,
            ))
        })
        .collect()
}

#[cfg(not(feature = "hydrate"))]
pub fn measure_sections() -> Vec<SectionBounds> {
    Vec::new()
}

/// Smooth-scroll the section into view.
#[cfg(feature = "hydrate")]
pub fn scroll_to(section: Section) {
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()));
    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => leptos::logging::warn!("no element with id '{}'", section.id()),
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn scroll_to(_section: Section) {}
