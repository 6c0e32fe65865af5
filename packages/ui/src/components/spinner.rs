use dioxus::prelude::*;

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            class: "d-flex justify-content-center my-5",
            div {
                class: "spinner-border text-primary",
                role: "status",
                span { class: "visually-hidden", "Loading..." }
            }
        }
    }
}
