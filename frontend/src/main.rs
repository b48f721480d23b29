use log::{info, Level};
use yew::prelude::*;

mod config;
mod content;
mod starfield;
mod theme;

mod components {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod navbar;
    pub mod projects;
    pub mod reveal;
    pub mod skills;
    pub mod star_canvas;
}

use components::{
    about::About, contact::Contact, footer::Footer, hero::Hero, navbar::Navbar,
    projects::Projects, skills::Skills,
};

#[function_component]
fn App() -> Html {
    let dark = use_state(theme::initial_dark);

    // Persist the preference and mirror it onto the document root whenever
    // it changes.
    {
        let dark = *dark;
        use_effect_with_deps(
            move |_| {
                theme::persist_dark(dark);
                || ()
            },
            dark,
        );
    }

    let toggle_dark = {
        let dark = dark.clone();
        Callback::from(move |_| dark.set(!*dark))
    };

    html! {
        <div class={classes!("app", (*dark).then(|| "dark"))}>
            <Navbar dark={*dark} on_toggle={toggle_dark} />
            <main>
                <Hero dark={*dark} />
                <About />
                <Skills />
                <Projects />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
