use leptos::prelude::*;

use crate::components::ProjectCard;
use crate::models::{filter_projects, Category, PROJECTS};

#[component]
pub fn Projects() -> impl IntoView {
    let (category, set_category) = signal(Category::All);

    // Recomputed from the full list on every selection
    let visible = Memo::new(move |_| filter_projects(PROJECTS, category.get()));

    view! {
        <div class="projects">
            <div class="floating-shape shape-a"></div>
            <div class="floating-shape shape-b"></div>
            <div class="floating-shape shape-c"></div>

            <div class="container stagger">
                <header class="section-header">
                    <h2 class="text-gradient glow">"My Projects"</h2>
                    <p>"A showcase of my latest work, featuring cutting-edge technologies and innovative solutions"</p>
                    <div class="rule"></div>
                </header>

                <div class="category-filter">
                    {Category::all()
                        .into_iter()
                        .map(|c| {
                            view! {
                                <button
                                    class=move || if category.get() == c { "filter-btn active" } else { "filter-btn" }
                                    on:click=move |_| set_category.set(c)
                                >
                                    {c.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="project-grid">
                    <For
                        each=move || visible.get().into_iter().enumerate()
                        key=|(_, project)| project.id
                        children=move |(index, project)| view! { <ProjectCard project=project index=index/> }
                    />
                </div>

                <Show when=move || visible.with(|v| v.is_empty())>
                    <p class="empty-state">"Nothing here yet."</p>
                </Show>
            </div>
        </div>
    }
}
