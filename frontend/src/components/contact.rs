use gloo_console::log;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::Deserialize;
use serde_json::json;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;

#[derive(Deserialize, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Deserialize)]
struct SubmitResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Vec<FieldError>,
}

#[derive(Clone, PartialEq)]
enum Status {
    Success(String),
    Error(String),
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let subject = use_state(String::new);
    let message = use_state(String::new);
    let status = use_state(|| None::<Status>);
    let field_errors = use_state(Vec::<FieldError>::new);
    let is_sending = use_state(|| false);

    let oninput_text = |handle: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            handle.set(input.value());
        })
    };

    let oninput_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(area.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let subject = subject.clone();
        let message = message.clone();
        let status = status.clone();
        let field_errors = field_errors.clone();
        let is_sending = is_sending.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_sending {
                return;
            }

            let payload = json!({
                "name": *name,
                "email": *email,
                "subject": *subject,
                "message": *message,
            });

            let name = name.clone();
            let email = email.clone();
            let subject = subject.clone();
            let message = message.clone();
            let status = status.clone();
            let field_errors = field_errors.clone();
            let is_sending = is_sending.clone();

            is_sending.set(true);
            status.set(None);
            field_errors.set(Vec::new());

            spawn_local(async move {
                let request = Request::post(&format!("{}/api/contact", config::get_backend_url()))
                    .json(&payload)
                    .expect("contact payload serializes");

                match request.send().await {
                    Ok(response) => match response.json::<SubmitResponse>().await {
                        Ok(body) if body.success => {
                            name.set(String::new());
                            email.set(String::new());
                            subject.set(String::new());
                            message.set(String::new());
                            status.set(Some(Status::Success(body.message.unwrap_or_else(
                                || "Message sent successfully!".to_string(),
                            ))));

                            // Let the confirmation fade out on its own.
                            let status = status.clone();
                            Timeout::new(4_000, move || {
                                status.set(None);
                            })
                            .forget();
                        }
                        Ok(body) => {
                            field_errors.set(body.errors);
                            status.set(Some(Status::Error(body.message.unwrap_or_else(
                                || "Something went wrong, please try again.".to_string(),
                            ))));
                        }
                        Err(e) => {
                            log!(format!("failed to parse contact response: {e}"));
                            status.set(Some(Status::Error(
                                "Something went wrong, please try again.".to_string(),
                            )));
                        }
                    },
                    Err(e) => {
                        log!(format!("contact submit failed: {e}"));
                        status.set(Some(Status::Error(
                            "Could not reach the server, please try again later.".to_string(),
                        )));
                    }
                }
                is_sending.set(false);
            });
        })
    };

    let error_for = |field: &str| {
        field_errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| html! { <span class="field-error">{ e.message.clone() }</span> })
            .unwrap_or_default()
    };

    html! {
        <section id="contact" class="section contact-section">
            <div class="section-inner">
                <Reveal class="section-heading">
                    <h2>{"Get In "}<span class="accent">{"Touch"}</span></h2>
                    <div class="heading-rule"></div>
                    <p class="section-lead">
                        {"Have a project in mind, or just want to say hello? \
                          Drop me a line and I'll get back to you."}
                    </p>
                </Reveal>

                <Reveal class="contact-form-wrap">
                    <form class="contact-form" onsubmit={onsubmit}>
                        <div class="form-row">
                            <div class="form-field">
                                <label for="contact-name">{"Name"}</label>
                                <input
                                    id="contact-name"
                                    type="text"
                                    required={true}
                                    maxlength="100"
                                    value={(*name).clone()}
                                    oninput={oninput_text(name.clone())}
                                />
                                { error_for("name") }
                            </div>
                            <div class="form-field">
                                <label for="contact-email">{"Email"}</label>
                                <input
                                    id="contact-email"
                                    type="email"
                                    required={true}
                                    maxlength="100"
                                    value={(*email).clone()}
                                    oninput={oninput_text(email.clone())}
                                />
                                { error_for("email") }
                            </div>
                        </div>
                        <div class="form-field">
                            <label for="contact-subject">{"Subject"}</label>
                            <input
                                id="contact-subject"
                                type="text"
                                required={true}
                                maxlength="200"
                                value={(*subject).clone()}
                                oninput={oninput_text(subject.clone())}
                            />
                            { error_for("subject") }
                        </div>
                        <div class="form-field">
                            <label for="contact-message">{"Message"}</label>
                            <textarea
                                id="contact-message"
                                required={true}
                                maxlength="1000"
                                rows="6"
                                value={(*message).clone()}
                                oninput={oninput_message}
                            />
                            { error_for("message") }
                        </div>

                        {
                            match &*status {
                                Some(Status::Success(text)) => html! {
                                    <div class="form-banner success">{ text.clone() }</div>
                                },
                                Some(Status::Error(text)) => html! {
                                    <div class="form-banner error">{ text.clone() }</div>
                                },
                                None => html! {},
                            }
                        }

                        <button type="submit" class="submit-button" disabled={*is_sending}>
                            { if *is_sending { "Sending..." } else { "Send Message" } }
                        </button>
                    </form>
                </Reveal>
            </div>
        </section>
    }
}
