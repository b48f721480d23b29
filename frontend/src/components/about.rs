use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{FEATURES, STATS};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="section about-section">
            <div class="section-inner">
                <Reveal class="section-heading">
                    <h2>{"About "}<span class="accent">{"Me"}</span></h2>
                    <div class="heading-rule"></div>
                </Reveal>

                <div class="about-columns">
                    <Reveal class="about-bio">
                        <p>
                            {"Hello! I'm Eero, a full-stack developer who likes the whole \
                              stack to be fast, not just the parts users can see. My path \
                              started with tiny embedded boards and ended up in the \
                              browser, which turned out to be the most hostile embedded \
                              target of them all."}
                        </p>
                        <p>
                            {"These days I ship WASM front-ends and small, sturdy API \
                              services, and I care a lot about the unglamorous middle: \
                              build times, error messages, logs you can actually read."}
                        </p>
                        <div class="stat-grid">
                            {
                                STATS.iter().map(|stat| html! {
                                    <div key={stat.label} class="stat-card">
                                        <span class="stat-value">{ stat.value }</span>
                                        <span class="stat-label">{ stat.label }</span>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </Reveal>

                    <div class="feature-list">
                        {
                            FEATURES.iter().map(|feature| html! {
                                <Reveal key={feature.title} class="feature-card">
                                    <span class="feature-icon">{ feature.icon }</span>
                                    <div>
                                        <h3>{ feature.title }</h3>
                                        <p>{ feature.description }</p>
                                    </div>
                                </Reveal>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}
