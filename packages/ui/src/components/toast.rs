use dioxus::prelude::*;

use super::AlertKind;

/// A dismissible toast pinned to the top-right corner.
#[component]
pub fn Toast(
    #[props(default)] kind: AlertKind,
    message: String,
    on_close: EventHandler<()>,
) -> Element {
    let variant = kind.class();

    rsx! {
        div {
            class: "toast-container position-fixed top-0 end-0 p-3",
            div {
                class: "toast show align-items-center text-bg-{variant} border-0",
                role: "alert",
                div {
                    class: "d-flex",
                    div { class: "toast-body", "{message}" }
                    button {
                        class: "btn-close btn-close-white me-2 m-auto",
                        r#type: "button",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                    }
                }
            }
        }
    }
}
