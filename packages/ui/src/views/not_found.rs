use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div {
            class: "container my-5",
            div {
                class: "card shadow-sm mx-auto text-center not-found-card",
                div {
                    class: "card-body",
                    h2 { class: "card-title", "404" }
                    p { class: "text-muted", "Nothing lives at " code { "{path}" } "." }
                    Link { class: "btn btn-primary", to: Route::Home {}, "Back to Home" }
                }
            }
        }
    }
}
