//! Shared page chrome.

use dioxus::prelude::*;

#[component]
pub fn Layout(title: String, children: Element) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; height: 100vh; gap: 16px; font-family: sans-serif;",
            h1 { "{title}" }
            {children}
        }
    }
}
