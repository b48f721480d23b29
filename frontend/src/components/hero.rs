use yew::prelude::*;

use crate::components::star_canvas::StarCanvas;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub dark: bool,
}

#[function_component(Hero)]
pub fn hero(props: &Props) -> Html {
    html! {
        <section id="home" class="hero">
            <StarCanvas dark={props.dark} />

            <div class="hero-content">
                <h1 class="hero-title">
                    {"Hi, I'm "}<span class="hero-accent">{"Eero"}</span>{" Salo"}
                </h1>
                <p class="hero-subtitle">
                    {"I build fast, reliable web experiences from the metal up. \
                      Full-stack developer with a soft spot for Rust, WebAssembly \
                      and interfaces that feel effortless."}
                </p>
                <div class="hero-cta-group">
                    <a href="#projects" class="hero-cta">{"View My Work"}</a>
                    <a href="#contact" class="hero-cta hero-cta-outline">{"Get In Touch"}</a>
                </div>
            </div>

            <a href="#about" class="scroll-cue" aria-label="Scroll to about section">
                <span class="scroll-cue-chevron"></span>
            </a>
        </section>
    }
}
