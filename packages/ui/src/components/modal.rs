use dioxus::prelude::*;

/// A centered Bootstrap modal with a backdrop.
/// Clicking the backdrop or the close button triggers `on_close`.
/// Children supply the `modal-body` and `modal-footer` sections.
#[component]
pub fn Modal(
    title: String,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "modal-backdrop fade show" }
        div {
            class: "modal fade show d-block",
            tabindex: "-1",
            role: "dialog",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-dialog modal-dialog-centered modal-dialog-scrollable",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-content",
                    div {
                        class: "modal-header",
                        h5 { class: "modal-title", "{title}" }
                        button {
                            class: "btn-close",
                            r#type: "button",
                            aria_label: "Close",
                            onclick: move |_| on_close.call(()),
                        }
                    }
                    {children}
                }
            }
        }
    }
}

/// Yes/no confirmation before a destructive action.
#[component]
pub fn ConfirmModal(
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        Modal {
            title: "Please confirm",
            on_close: move |_| on_cancel.call(()),
            div { class: "modal-body", p { class: "mb-0", "{message}" } }
            div {
                class: "modal-footer",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-danger",
                    r#type: "button",
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_label}"
                }
            }
        }
    }
}
