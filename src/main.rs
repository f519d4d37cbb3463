mod frontend;
mod utils;

use crate::frontend::app::main::Route;
use crate::frontend::services::context::AuthState;
use crate::frontend::services::guard::NavigationGuard;
use crate::frontend::services::session::SessionStore;
use dioxus::LaunchBuilder;
use dioxus::prelude::*;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use dioxus_router::Router;
use std::sync::Arc;

fn main() {
    // Logging setup
    env_logger::init();

    let size = LogicalSize::new(960.0, 640.0);

    let config = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title("File Portal")
                .with_inner_size(size)
                .with_min_inner_size(size)
                .with_resizable(false),
        )
        .with_menu(None);

    LaunchBuilder::new().with_cfg(config).launch(AppRoot);
}

#[component]
fn AppRoot() -> Element {
    let store = use_hook(|| Arc::new(SessionStore::open_default()));
    let guard = use_hook({
        let store = store.clone();
        move || NavigationGuard::new(store)
    });

    // A token saved by a previous session keeps the user signed in;
    // the seed applies the same presence check the guard does
    let is_authenticated = use_signal({
        let guard = guard.clone();
        move || guard.authenticated()
    });

    provide_context(AuthState::new(is_authenticated, store));
    provide_context(guard);

    rsx! { Router::<Route> {} }
}
