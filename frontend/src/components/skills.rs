use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::SKILL_GROUPS;

#[function_component(Skills)]
pub fn skills() -> Html {
    html! {
        <section id="skills" class="section skills-section">
            <div class="section-inner">
                <Reveal class="section-heading">
                    <h2>{"Skills & "}<span class="accent">{"Technologies"}</span></h2>
                    <div class="heading-rule"></div>
                </Reveal>

                <div class="skill-groups">
                    {
                        SKILL_GROUPS.iter().map(|group| html! {
                            <Reveal key={group.title} class="skill-group">
                                <h3>{ group.title }</h3>
                                <div class="skill-grid">
                                    {
                                        group.skills.iter().map(|skill| html! {
                                            <div key={skill.name} class="skill-chip">
                                                <span class="skill-icon">{ skill.icon }</span>
                                                <span class="skill-name">{ skill.name }</span>
                                            </div>
                                        }).collect::<Html>()
                                    }
                                </div>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
