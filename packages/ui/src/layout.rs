use dioxus::prelude::*;

use crate::guard::{guard, Access};
use crate::{use_auth, Footer, Navbar, Route};

/// Navbar, page content and footer, shared by every route.
#[component]
pub fn AppLayout() -> Element {
    rsx! {
        div {
            class: "d-flex flex-column min-vh-100",
            Navbar {}
            main {
                class: "flex-grow-1",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}

/// Renders protected pages only with a session, otherwise goes to `/login`.
#[component]
pub fn RequireAuth() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    match guard(&auth()) {
        Access::Allow => rsx! {
            Outlet::<Route> {}
        },
        Access::Redirect => {
            nav.replace(Route::Login {});
            rsx! {}
        }
    }
}
