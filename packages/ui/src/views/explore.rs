use dioxus::prelude::*;
use store::media::image_url;

use crate::auth::{use_api, use_auth, use_config};
use crate::components::{Alert, Spinner};
use crate::Route;

/// Grid of every other user's profile.
#[component]
pub fn Explore() -> Element {
    let api = use_api();
    let auth = use_auth();
    let config = use_config();
    let viewer = auth().username().unwrap_or_default().to_string();

    let profiles = use_resource(move || {
        let api = api.clone();
        async move { api.list_profiles().await }
    });

    let body = match &*profiles.read_unchecked() {
        None => rsx! {
            div { class: "text-center", Spinner {} }
        },
        Some(Err(e)) => {
            tracing::warn!("Explore fetch failed: {e}");
            rsx! { Alert { message: "Failed to load profiles." } }
        }
        Some(Ok(all)) => {
            let others: Vec<_> = all.iter().filter(|p| p.username != viewer).cloned().collect();
            if others.is_empty() {
                rsx! { p { class: "text-center", "No other profiles found." } }
            } else {
                rsx! {
                    div {
                        class: "row row-cols-1 row-cols-sm-2 row-cols-md-3 g-4",
                        for profile in others {
                            div {
                                key: "{profile.id}",
                                class: "col",
                                div {
                                    class: "card text-center h-100 p-3 shadow-sm",
                                    img {
                                        class: "card-img-top rounded-circle mx-auto avatar-md",
                                        src: image_url(profile.image.as_deref(), &config.media.image_base_url),
                                        alt: "{profile.username}'s avatar",
                                    }
                                    div {
                                        class: "card-body",
                                        h5 { class: "card-title", "@{profile.username}" }
                                        Link {
                                            class: "btn btn-primary btn-sm",
                                            to: Route::UserProfile { username: profile.username.clone() },
                                            "View Profile"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "container mt-4",
            h2 { class: "mb-4 text-center", "Explore Users" }
            {body}
        }
    }
}
