use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub dark: bool,
    pub on_toggle: Callback<()>,
}

const SECTIONS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let mut cleanup: Box<dyn FnOnce()> = Box::new(|| {});
                if let Some(window) = web_sys::window() {
                    let window_for_callback = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let scroll_top = window_for_callback.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll_top > 50.0);
                    }) as Box<dyn FnMut()>);

                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );

                    cleanup = Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    });
                }
                move || cleanup()
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let toggle_mode = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| {
            on_toggle.emit(());
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo" onclick={close_menu.clone()}>
                    {"eero"}<span class="nav-logo-accent">{".dev"}</span>
                </a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        SECTIONS.iter().map(|(href, label)| html! {
                            <a key={*href} href={*href} class="nav-link" onclick={close_menu.clone()}>
                                { *label }
                            </a>
                        }).collect::<Html>()
                    }
                    <button class="mode-toggle" onclick={toggle_mode} aria-label="Toggle dark mode">
                        { if props.dark { "☀️" } else { "🌙" } }
                    </button>
                </div>
            </div>
        </nav>
    }
}
