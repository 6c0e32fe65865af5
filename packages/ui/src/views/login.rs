//! Login page view with username/password form.

use dioxus::prelude::*;

use crate::auth::{login, use_api, use_auth};
use crate::components::{Alert, AlertKind};
use crate::icons::FaRightToBracket;
use crate::{Icon, Route};

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let api = use_api();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go to the dashboard
    if auth().is_authenticated() && !loading() {
        nav.replace(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            let name = username().trim().to_string();
            match login(&api, auth, &name, &password()).await {
                Ok(()) => {
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::warn!("Login failed: {e}");
                    error.set(Some("Invalid credentials. Please try again.".to_string()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "container py-5",
            div {
                class: "auth-box mx-auto",
                h2 {
                    class: "mb-4 text-center",
                    Icon { class: "me-2", icon: FaRightToBracket, width: 24, height: 24 }
                    "Login to TaskHive"
                }

                if let Some(err) = error() {
                    Alert { kind: AlertKind::Danger, message: err }
                }

                form {
                    onsubmit: handle_login,
                    div {
                        class: "mb-3",
                        label { class: "form-label", r#for: "username", "Username" }
                        input {
                            id: "username",
                            class: "form-control",
                            r#type: "text",
                            placeholder: "Enter your username",
                            required: true,
                            value: username(),
                            oninput: move |evt: FormEvent| username.set(evt.value()),
                        }
                    }
                    div {
                        class: "mb-4",
                        label { class: "form-label", r#for: "password", "Password" }
                        input {
                            id: "password",
                            class: "form-control",
                            r#type: "password",
                            placeholder: "Enter your password",
                            required: true,
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }
                    button {
                        class: "btn btn-primary w-100",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Logging in..." } else { "Login" }
                    }
                }

                p {
                    class: "mt-4 text-center text-muted",
                    "No account yet? "
                    Link { to: Route::Signup {}, "Sign up" }
                }
            }
        }
    }
}
