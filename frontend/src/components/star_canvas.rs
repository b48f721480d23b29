use std::cell::{Cell, RefCell};
use std::f64::consts::PI;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement, Window};
use yew::prelude::*;

use crate::starfield::{StarField, STAR_COUNT};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub dark: bool,
}

fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

fn context_for(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

// Colors are picked per draw call so a mode toggle changes them without
// waiting on anything but the next frame.
fn draw(ctx: &CanvasRenderingContext2d, field: &StarField, dark: bool) {
    ctx.clear_rect(0.0, 0.0, field.width(), field.height());

    for star in field.stars() {
        ctx.save();
        ctx.set_global_alpha(star.alpha_at(field.time()));
        ctx.set_fill_style_str(if dark { "#ffffff" } else { "#1e3a8a" });
        ctx.begin_path();
        let _ = ctx.arc(star.x, star.y, star.radius, 0.0, PI * 2.0);
        ctx.fill();
        ctx.restore();
    }

    for streak in field.streaks() {
        let (tip_x, tip_y) = streak.tip();
        ctx.save();
        ctx.set_global_alpha(streak.opacity * streak.life);
        ctx.set_line_width(2.0);
        ctx.set_line_cap("round");

        // Transparent at the origin, opaque at the tip.
        let gradient = ctx.create_linear_gradient(streak.x, streak.y, tip_x, tip_y);
        let (from, to) = if dark {
            ("rgba(255, 255, 255, 0)", "rgba(255, 255, 255, 1)")
        } else {
            ("rgba(59, 130, 246, 0)", "rgba(59, 130, 246, 1)")
        };
        let _ = gradient.add_color_stop(0.0, from);
        let _ = gradient.add_color_stop(1.0, to);
        ctx.set_stroke_style_canvas_gradient(&gradient);

        ctx.begin_path();
        ctx.move_to(streak.x, streak.y);
        ctx.line_to(tip_x, tip_y);
        ctx.stroke();
        ctx.restore();
    }
}

#[function_component(StarCanvas)]
pub fn star_canvas(props: &Props) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let dark = props.dark;
        // Keyed on the mode: a toggle tears the whole effect down and
        // reinitializes with a fresh field, which is cheap.
        use_effect_with_deps(
            move |_| {
                let mut cleanup: Box<dyn FnOnce()> = Box::new(|| {});

                // No window or no 2d context: render nothing, silently.
                if let (Some(window), Some(canvas)) =
                    (window(), canvas_ref.cast::<HtmlCanvasElement>())
                {
                    if let Some(ctx) = context_for(&canvas) {
                        let (width, height) = viewport_size(&window);
                        canvas.set_width(width as u32);
                        canvas.set_height(height as u32);

                        let seed =
                            (web_sys::js_sys::Math::random() * u32::MAX as f64) as u32;
                        let field =
                            Rc::new(RefCell::new(StarField::new(width, height, STAR_COUNT, seed)));

                        let resize = {
                            let field = field.clone();
                            let canvas = canvas.clone();
                            let window = window.clone();
                            Closure::wrap(Box::new(move || {
                                let (width, height) = viewport_size(&window);
                                canvas.set_width(width as u32);
                                canvas.set_height(height as u32);
                                field.borrow_mut().resize(width, height);
                            }) as Box<dyn FnMut()>)
                        };
                        let _ = window.add_event_listener_with_callback(
                            "resize",
                            resize.as_ref().unchecked_ref(),
                        );

                        let frame_id = Rc::new(Cell::new(0));
                        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                            Rc::new(RefCell::new(None));
                        {
                            let tick = tick.clone();
                            let tick_handle = tick.clone();
                            let frame_id = frame_id.clone();
                            let window = window.clone();
                            let field = field.clone();
                            *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                                {
                                    let mut field = field.borrow_mut();
                                    field.step();
                                    draw(&ctx, &field, dark);
                                }
                                if let Some(callback) = tick_handle.borrow().as_ref() {
                                    if let Ok(id) = window.request_animation_frame(
                                        callback.as_ref().unchecked_ref(),
                                    ) {
                                        frame_id.set(id);
                                    }
                                }
                            })
                                as Box<dyn FnMut()>));
                        }
                        if let Some(callback) = tick.borrow().as_ref() {
                            if let Ok(id) =
                                window.request_animation_frame(callback.as_ref().unchecked_ref())
                            {
                                frame_id.set(id);
                            }
                        }

                        let window = window.clone();
                        cleanup = Box::new(move || {
                            let _ = window.cancel_animation_frame(frame_id.get());
                            let _ = window.remove_event_listener_with_callback(
                                "resize",
                                resize.as_ref().unchecked_ref(),
                            );
                            drop(resize);
                            tick.borrow_mut().take();
                        });
                    }
                }

                move || cleanup()
            },
            dark,
        );
    }

    html! {
        <canvas ref={canvas_ref} class="star-canvas" />
    }
}
