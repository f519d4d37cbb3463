//! Application routing system.

use crate::frontend::pages::auth::AuthPage;
use crate::frontend::pages::upload::UploadPage;

use dioxus::prelude::*;
use dioxus_router::Routable;

#[component]
pub fn Auth() -> Element {
    rsx! { AuthPage {} }
}

/// `/login` renders the same page as `/`.
#[component]
pub fn Login() -> Element {
    rsx! { AuthPage {} }
}

#[component]
pub fn Upload() -> Element {
    rsx! { UploadPage {} }
}

/// Main routing enum for the application.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
pub enum Route {
    /// Login or register page.
    #[route("/")]
    Auth {},
    /// Alias for the login page.
    #[route("/login")]
    Login {},
    /// File upload page, token-gated.
    #[route("/upload")]
    Upload {},
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::app::routes::ROUTES;
    use std::str::FromStr;

    #[test]
    fn router_enum_covers_the_route_table() {
        for route in &ROUTES {
            let parsed = Route::from_str(route.path)
                .unwrap_or_else(|_| panic!("no router entry for {}", route.path));
            assert_eq!(parsed.to_string(), route.path);
        }
    }
}
