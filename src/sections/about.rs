use leptos::prelude::*;

use crate::models::profile::{skill_width, SKILLS, STATS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="about">
            <div class="container stagger">
                <header class="section-header">
                    <h2 class="text-gradient">"About Me"</h2>
                    <div class="rule"></div>
                </header>

                <div class="about-grid">
                    <div class="about-story">
                        <h3>"Creative Problem Solver"</h3>
                        <p>
                            "With over 5 years of experience in full-stack development, I specialize in creating "
                            "digital experiences that are not only functional but visually stunning. My passion "
                            "lies in the intersection of technology and design."
                        </p>
                        <p>
                            "I believe in writing clean, maintainable code and staying up-to-date with the latest "
                            "industry trends. Whether it's building responsive web applications or crafting "
                            "immersive user interfaces, I bring creativity to every project."
                        </p>

                        <div class="stats">
                            {STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="stat">
                                            <div class="stat-value">{stat.value}</div>
                                            <div class="stat-label">{stat.label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="skills">
                        <h3>"Skills & Expertise"</h3>
                        {SKILLS
                            .iter()
                            .enumerate()
                            .map(|(i, skill)| {
                                view! {
                                    <div class="skill">
                                        <div class="skill-head">
                                            <span>{skill.name}</span>
                                            <span>{format!("{}%", skill.level)}</span>
                                        </div>
                                        <div class="skill-track">
                                            <div
                                                class=format!("skill-bar bg-gradient-to-r {}", skill.gradient)
                                                style=format!(
                                                    "{}; transition-delay: {:.1}s",
                                                    skill_width(skill.level),
                                                    i as f64 * 0.1,
                                                )
                                            ></div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
