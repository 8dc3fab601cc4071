use leptos::ev;
use leptos::prelude::*;

use crate::context::use_scroll_state;
use crate::dom;
use crate::models::profile::SOCIAL_LINKS;
use crate::models::Section;

#[component]
pub fn Nav() -> impl IntoView {
    let scroll = use_scroll_state();
    let (menu_open, set_menu_open) = signal(false);

    // Effects only run in the browser, so the listener is never installed during SSR
    Effect::new(move |_| {
        scroll.on_scroll(dom::scroll_y(), dom::viewport_height(), &dom::measure_sections());
        let handle = window_event_listener(ev::scroll, move |_| {
            scroll.on_scroll(dom::scroll_y(), dom::viewport_height(), &dom::measure_sections());
        });
        on_cleanup(move || handle.remove());
    });

    let go = move |section: Section| {
        dom::scroll_to(section);
        set_menu_open.set(false);
    };

    view! {
        <nav class=move || if scroll.scrolled.get() { "main-nav scrolled" } else { "main-nav" }>
            <div class="nav-inner">
                <button class="nav-brand" on:click=move |_| go(Section::Home)>
                    <span class="text-gradient-purple">"Alex"</span>
                    <span class="text-gradient-orange">"J"</span>
                </button>

                <div class="nav-links">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            let is_active = move || scroll.active.get() == section;
                            view! {
                                <button
                                    class=move || if is_active() { "nav-link active" } else { "nav-link" }
                                    on:click=move |_| go(section)
                                >
                                    {section.label()}
                                    <Show when=is_active>
                                        <span class="nav-indicator"></span>
                                    </Show>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <button class="btn btn-primary nav-cta" on:click=move |_| go(Section::Contact)>
                    "Let's Talk"
                </button>

                <button
                    class=move || if menu_open.get() { "menu-toggle open" } else { "menu-toggle" }
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>

        <div class=move || if menu_open.get() { "mobile-menu open" } else { "mobile-menu" }>
            <div class="mobile-menu-items">
                {Section::ALL
                    .into_iter()
                    .enumerate()
                    .map(|(i, section)| {
                        view! {
                            <button
                                class=move || {
                                    if scroll.active.get() == section {
                                        "mobile-menu-item active"
                                    } else {
                                        "mobile-menu-item"
                                    }
                                }
                                style=format!("transition-delay: {:.1}s", 0.2 + i as f64 * 0.1)
                                on:click=move |_| go(section)
                            >
                                {section.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <button class="mobile-menu-item btn btn-primary" on:click=move |_| go(Section::Contact)>
                "Let's Talk"
            </button>

            <div class="mobile-menu-item mobile-social">
                <h4>"Follow Me"</h4>
                <div class="social-row">
                    {SOCIAL_LINKS
                        .iter()
                        .take(3)
                        .map(|link| {
                            view! {
                                <a href=link.url class=format!("social-badge bg-gradient-to-r {}", link.gradient) aria-label=link.name>
                                    {link.glyph}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>

        <Show when=move || menu_open.get()>
            <div class="mobile-overlay" on:click=move |_| set_menu_open.set(false)></div>
        </Show>
    }
}
