//! Upload page with the navigation guard in front.

use crate::frontend::components::layout::Layout;
use crate::frontend::services::context::AuthState;
use crate::frontend::services::guard::{GuardDecision, NavigationGuard};
use dioxus::prelude::*;
use dioxus_router::navigator;

#[component]
pub fn UploadPage() -> Element {
    let nav = navigator();
    let guard = use_context::<NavigationGuard>();
    let auth = use_context::<AuthState>();

    if let GuardDecision::Redirect(login) = guard.check_path("/upload") {
        nav.replace(login);
        return rsx! { div {} };
    }

    let on_logout = {
        let auth = auth.clone();
        move |_| {
            let mut auth = auth.clone();
            let nav = nav;
            spawn(async move {
                auth.logout().await;
                nav.replace("/login");
            });
        }
    };

    rsx! {
        Layout {
            title: "Upload files",
            input {
                r#type: "file",
                style: "font-size: 1rem;",
            }
            button {
                style: "padding: 8px 24px; font-size: 1rem;",
                onclick: on_logout,
                "Sign out"
            }
        }
    }
}
