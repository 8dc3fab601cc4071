use leptos::prelude::*;

use crate::components::Reveal;
use crate::models::Section;
use crate::sections::{About, Contact, Hero, Projects};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <Reveal section=Section::Home>
                <Hero/>
            </Reveal>
            <Reveal section=Section::About>
                <About/>
            </Reveal>
            <Reveal section=Section::Projects>
                <Projects/>
            </Reveal>
            <Reveal section=Section::Contact>
                <Contact/>
            </Reveal>
            <footer class="site-footer">
                <p>"© Alex Johnson. Built with Rust and Leptos."</p>
            </footer>
        </div>
    }
}
