//! Registration page. A successful signup does not log in.

use dioxus::prelude::*;
use store::SignupRequest;

use crate::auth::{signup, use_api};
use crate::components::{Alert, AlertKind};
use crate::Route;

#[component]
pub fn Signup() -> Element {
    let api = use_api();
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut created = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);

            if password() != confirm_password() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            let form = SignupRequest {
                first_name: first_name().trim().to_string(),
                last_name: last_name().trim().to_string(),
                email: email().trim().to_string(),
                username: username().trim().to_string(),
                password: password(),
            };

            loading.set(true);
            match signup(&api, &form).await {
                Ok(()) => {
                    tracing::info!(username = %form.username, "account created");
                    created.set(true);
                }
                Err(e) => {
                    tracing::warn!("Signup failed: {e}");
                    error.set(Some("Failed to create an account".to_string()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "container my-5",
            div {
                class: "row justify-content-center",
                div {
                    class: "col-md-6",
                    div {
                        class: "card shadow-sm",
                        div {
                            class: "card-body",
                            h3 { class: "text-center mb-4", "Sign Up" }

                            if let Some(err) = error() {
                                Alert { kind: AlertKind::Danger, message: err }
                            }

                            if created() {
                                Alert { kind: AlertKind::Success, message: "Account created successfully." }
                                Link { class: "btn btn-primary w-100", to: Route::Login {}, "Continue to Login" }
                            } else {
                                form {
                                    onsubmit: handle_signup,
                                    div {
                                        class: "row",
                                        div {
                                            class: "col mb-3",
                                            label { class: "form-label", r#for: "first-name", "First Name" }
                                            input {
                                                id: "first-name",
                                                class: "form-control",
                                                r#type: "text",
                                                required: true,
                                                value: first_name(),
                                                oninput: move |evt: FormEvent| first_name.set(evt.value()),
                                            }
                                        }
                                        div {
                                            class: "col mb-3",
                                            label { class: "form-label", r#for: "last-name", "Last Name" }
                                            input {
                                                id: "last-name",
                                                class: "form-control",
                                                r#type: "text",
                                                required: true,
                                                value: last_name(),
                                                oninput: move |evt: FormEvent| last_name.set(evt.value()),
                                            }
                                        }
                                    }
                                    div {
                                        class: "mb-3",
                                        label { class: "form-label", r#for: "email", "Email" }
                                        input {
                                            id: "email",
                                            class: "form-control",
                                            r#type: "email",
                                            required: true,
                                            value: email(),
                                            oninput: move |evt: FormEvent| email.set(evt.value()),
                                        }
                                    }
                                    div {
                                        class: "mb-3",
                                        label { class: "form-label", r#for: "username", "Username" }
                                        input {
                                            id: "username",
                                            class: "form-control",
                                            r#type: "text",
                                            required: true,
                                            value: username(),
                                            oninput: move |evt: FormEvent| username.set(evt.value()),
                                        }
                                    }
                                    div {
                                        class: "mb-3",
                                        label { class: "form-label", r#for: "password", "Password" }
                                        input {
                                            id: "password",
                                            class: "form-control",
                                            r#type: "password",
                                            required: true,
                                            value: password(),
                                            oninput: move |evt: FormEvent| password.set(evt.value()),
                                        }
                                    }
                                    div {
                                        class: "mb-4",
                                        label { class: "form-label", r#for: "confirm-password", "Confirm Password" }
                                        input {
                                            id: "confirm-password",
                                            class: "form-control",
                                            r#type: "password",
                                            required: true,
                                            value: confirm_password(),
                                            oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                                        }
                                    }
                                    button {
                                        class: "btn btn-primary w-100",
                                        r#type: "submit",
                                        disabled: loading(),
                                        if loading() { "Creating Account..." } else { "Sign Up" }
                                    }
                                }
                            }

                            p {
                                class: "mt-4 text-center text-muted",
                                "Already have an account? "
                                Link { to: Route::Login {}, "Log in" }
                            }
                        }
                    }
                }
            }
        }
    }
}
