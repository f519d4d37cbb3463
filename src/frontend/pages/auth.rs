//! Authentication page component.

use crate::frontend::components::layout::Layout;
use crate::frontend::services::context::AuthState;
use dioxus::{events::KeyboardEvent, prelude::*};
use dioxus_router::use_navigator;

#[component]
pub fn AuthPage() -> Element {
    let nav = use_navigator();
    let auth = use_context::<AuthState>();
    let mut token = use_signal(String::new);
    let mut error_text = use_signal(String::new);

    let submit = {
        let auth = auth.clone();
        move || {
            let value = token.read().trim().to_string();
            let mut auth = auth.clone();
            let nav = nav;
            let mut error_text = error_text;

            error_text.set(String::new());
            spawn(async move {
                match auth.login(value).await {
                    Ok(()) => {
                        nav.push("/upload");
                    }
                    Err(message) => error_text.set(message),
                }
            });
        }
    };

    let on_keydown = {
        let mut submit = submit.clone();
        move |e: KeyboardEvent| {
            if e.key() == Key::Enter {
                submit();
            }
        }
    };

    let on_click = {
        let mut submit = submit.clone();
        move |_| submit()
    };

    rsx! {
        Layout {
            title: "Sign in to File Portal",
            // Revisiting the login page while signed in is allowed
            if (auth.is_authenticated)() {
                p {
                    style: "color: #7f8c8d;",
                    "A session is already active. Signing in again replaces it."
                }
            }
            input {
                style: "padding: 8px 12px; font-size: 1rem; width: 280px;",
                placeholder: "Access token",
                value: "{token}",
                oninput: move |e| token.set(e.value()),
                onkeydown: on_keydown,
            }
            button {
                style: "padding: 8px 24px; font-size: 1rem;",
                onclick: on_click,
                "Continue"
            }
            if !error_text.read().is_empty() {
                p {
                    style: "color: #c0392b;",
                    "{error_text}"
                }
            }
        }
    }
}
