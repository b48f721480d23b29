use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

// One-shot entrance trigger: the wrapper gains a `visible` class the first
// time it scrolls into view, then stops being observed.
#[function_component(Reveal)]
pub fn reveal(props: &Props) -> Html {
    let node_ref = use_node_ref();

    {
        let node_ref = node_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut cleanup: Box<dyn FnOnce()> = Box::new(|| {});

                if let Some(element) = node_ref.cast::<Element>() {
                    let callback = Closure::wrap(Box::new(
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                                    if entry.is_intersecting() {
                                        let target = entry.target();
                                        let _ = target.class_list().add_1("visible");
                                        observer.unobserve(&target);
                                    }
                                }
                            }
                        },
                    )
                        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                    match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
                        Ok(observer) => {
                            observer.observe(&element);
                            cleanup = Box::new(move || {
                                observer.disconnect();
                                drop(callback);
                            });
                        }
                        Err(_) => drop(callback),
                    }
                }

                move || cleanup()
            },
            (),
        );
    }

    html! {
        <div ref={node_ref} class={classes!("reveal", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
