use leptos::prelude::*;

use crate::dom;
use crate::models::profile::{OWNER_FIRST_NAME, OWNER_LAST_NAME, TAGLINE};
use crate::models::Section;

const PARTICLES: usize = 12;

// Deterministic so server and client markup agree on hydration
fn particle_style(i: usize) -> String {
    let left = (i as f64 * 61.8) % 100.0;
    let top = (i as f64 * 38.2 + 7.0) % 100.0;
    let delay = (i % 4) as f64 * 0.75;
    format!("left: {left:.1}%; top: {top:.1}%; animation-delay: {delay:.2}s")
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <div class="rotating-bg"></div>
            <div class="floating-element float-a"></div>
            <div class="floating-element float-b"></div>
            {(0..PARTICLES)
                .map(|i| view! { <div class="particle" style=particle_style(i)></div> })
                .collect_view()}

            <div class="hero-content stagger">
                <h1 class="hero-title glitch">
                    <span class="text-gradient-purple">{OWNER_FIRST_NAME}</span>
                    " "
                    <span class="text-gradient-orange">{OWNER_LAST_NAME}</span>
                </h1>

                <div class="hero-subtitle">
                    <h2>{TAGLINE}</h2>
                    <div class="rule"></div>
                </div>

                <p class="hero-description">
                    "Crafting digital experiences that blend cutting-edge technology with stunning visual design. "
                    "Specializing in React, Next.js, and creating immersive web applications that push the boundaries of what's possible."
                </p>

                <div class="cta-buttons">
                    <button class="btn btn-primary" on:click=move |_| dom::scroll_to(Section::Projects)>
                        "View My Work"
                    </button>
                    <button class="btn btn-outline" on:click=move |_| dom::scroll_to(Section::Contact)>
                        "Get In Touch"
                    </button>
                </div>
            </div>

            <div class="scroll-indicator">
                <div class="scroll-wheel"></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particles_stay_inside_the_hero() {
        for i in 0..PARTICLES {
            let style = particle_style(i);
            let left: f64 = style["left: ".len()..style.find('%').unwrap()].parse().unwrap();
            assert!((0.0..100.0).contains(&left), "{style}");
        }
        assert_eq!(particle_style(3), particle_style(3));
    }
}
