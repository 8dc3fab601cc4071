use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::Nav;
use crate::context::provide_scroll_state;
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_scroll_state();

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text="Alex Johnson - Creative Developer"/>
        <Meta
            name="description"
            content="Full-stack developer specializing in modern web technologies with a passion for creating stunning digital experiences."
        />
        <Meta name="keywords" content="portfolio, developer, full-stack, React, Next.js, TypeScript"/>

        <Router>
            <Nav/>
            <main class="site">
                <Routes fallback=|| view! { <h1 class="not-found">"404 - Page Not Found"</h1> }>
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}
