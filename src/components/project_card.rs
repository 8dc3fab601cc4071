use leptos::prelude::*;

use crate::models::project::placeholder_image;
use crate::models::Project;

/// One card in the project grid. `index` staggers the entrance animation.
#[component]
pub fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    let (image_src, set_image_src) = signal(project.image_url.to_string());
    let card_delay = index as f64 * 0.1;

    view! {
        <article
            class=if project.featured { "project-card featured" } else { "project-card" }
            style=format!("animation-delay: {card_delay:.1}s")
        >
            <div class="project-image">
                <img
                    src=move || image_src.get()
                    alt=project.title
                    loading="lazy"
                    on:error=move |_| set_image_src.set(placeholder_image(project.title))
                />
                <div class="project-image-shade"></div>

                {project.featured.then(|| view! { <span class="featured-badge">"Featured"</span> })}

                <div class="project-links">
                    <a href=project.demo_url target="_blank" rel="noopener" aria-label="Live demo">"↗"</a>
                    <a href=project.source_url target="_blank" rel="noopener" aria-label="Source code">"</>"</a>
                </div>
            </div>

            <div class="project-body">
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <div class="tags">
                    {project
                        .tags
                        .iter()
                        .enumerate()
                        .map(|(i, tag)| {
                            let delay = card_delay + i as f64 * 0.05;
                            view! {
                                <span class="tag" style=format!("animation-delay: {delay:.2}s")>
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}
