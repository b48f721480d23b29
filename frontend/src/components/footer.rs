use chrono::Datelike;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <h3>{"eero"}<span class="accent">{".dev"}</span></h3>
                    <p>{"Building the future, one borrow checker fight at a time."}</p>
                </div>

                <div class="footer-links">
                    <a href="#home">{"Home"}</a>
                    <a href="#about">{"About"}</a>
                    <a href="#skills">{"Skills"}</a>
                    <a href="#projects">{"Projects"}</a>
                    <a href="#contact">{"Contact"}</a>
                </div>

                <div class="footer-copyright">
                    <p>{ format!("© {year} Eero Salo. All rights reserved.") }</p>
                </div>
            </div>
        </footer>
    }
}
