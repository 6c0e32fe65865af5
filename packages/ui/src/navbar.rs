use dioxus::prelude::*;

use crate::auth::{logout, use_auth};
use crate::icons::FaCloudArrowUp;
use crate::{Icon, Route};

#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut expanded = use_signal(|| false);
    let state = auth();

    let handle_logout = move |_| {
        logout(auth);
        expanded.set(false);
        nav.push(Route::Login {});
    };

    let collapse_class = if expanded() {
        "collapse navbar-collapse justify-content-end show"
    } else {
        "collapse navbar-collapse justify-content-end"
    };

    rsx! {
        nav {
            class: "navbar navbar-expand-lg navbar-dark shadow-sm taskhive-navbar",
            div {
                class: "container",
                Link { class: "navbar-brand fw-bold", to: Route::Home {}, "TaskHive" }
                button {
                    class: "navbar-toggler",
                    r#type: "button",
                    aria_label: "Toggle navigation",
                    onclick: move |_| expanded.toggle(),
                    span { class: "navbar-toggler-icon" }
                }
                div {
                    class: collapse_class,
                    ul {
                        class: "navbar-nav align-items-lg-center",
                        onclick: move |_| expanded.set(false),
                        if state.is_authenticated() {
                            if !state.online {
                                li {
                                    class: "nav-item me-2",
                                    span {
                                        class: "badge bg-warning text-dark",
                                        title: "Server unreachable",
                                        Icon { icon: FaCloudArrowUp, width: 12, height: 12 }
                                        " Offline"
                                    }
                                }
                            }
                            NavItem { to: Route::Dashboard {}, label: "Dashboard" }
                            NavItem { to: Route::Tasks {}, label: "Tasks" }
                            NavItem { to: Route::Notes {}, label: "Notes" }
                            NavItem { to: Route::Feed {}, label: "Feed" }
                            NavItem { to: Route::Explore {}, label: "Explore" }
                            NavItem { to: Route::MyProfile {}, label: "Profile" }
                            li {
                                class: "nav-item ms-lg-2",
                                button {
                                    class: "btn btn-outline-light btn-sm",
                                    onclick: handle_logout,
                                    "Logout"
                                }
                            }
                        } else {
                            NavItem { to: Route::Home {}, label: "Home" }
                            NavItem { to: Route::Login {}, label: "Login" }
                            NavItem { to: Route::Signup {}, label: "Signup" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavItem(to: Route, label: String) -> Element {
    rsx! {
        li {
            class: "nav-item",
            Link { class: "nav-link", active_class: "active", to: to, "{label}" }
        }
    }
}
