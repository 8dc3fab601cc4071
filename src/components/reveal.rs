use leptos::prelude::*;

use crate::context::use_scroll_state;
use crate::models::Section;

/// Anchors a page section by id and adds `revealed` once the scroll tracker
/// has reached it. The class is never removed again.
#[component]
pub fn Reveal(section: Section, children: Children) -> impl IntoView {
    let scroll = use_scroll_state();

    view! {
        <section
            id=section.id()
            class=move || {
                if scroll.is_revealed(section) {
                    "page-section revealed"
                } else {
                    "page-section"
                }
            }
        >
            {children()}
        </section>
    }
}
