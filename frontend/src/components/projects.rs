use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::PROJECTS;

#[function_component(Projects)]
pub fn projects() -> Html {
    html! {
        <section id="projects" class="section projects-section">
            <div class="section-inner">
                <Reveal class="section-heading">
                    <h2>{"Featured "}<span class="accent">{"Projects"}</span></h2>
                    <div class="heading-rule"></div>
                </Reveal>

                <div class="project-grid">
                    {
                        PROJECTS.iter().map(|project| html! {
                            <Reveal
                                key={project.title}
                                class={classes!("project-card", project.featured.then(|| "featured"))}
                            >
                                {
                                    if project.featured {
                                        html! { <span class="featured-badge">{"Featured"}</span> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <h3>{ project.title }</h3>
                                <p>{ project.description }</p>
                                <div class="tech-tags">
                                    {
                                        project.tech.iter().map(|tech| html! {
                                            <span key={*tech} class="tech-tag">{ *tech }</span>
                                        }).collect::<Html>()
                                    }
                                </div>
                                <div class="project-links">
                                    <a href={project.demo_url} class="project-link">{"Live Demo"}</a>
                                    <a href={project.source_url} class="project-link">{"Source"}</a>
                                </div>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
