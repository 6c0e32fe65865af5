use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertKind {
    Success,
    #[default]
    Danger,
}

impl AlertKind {
    pub fn class(self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Danger => "danger",
        }
    }
}

/// A Bootstrap alert. Shows a close button when `on_close` is set.
#[component]
pub fn Alert(
    #[props(default)] kind: AlertKind,
    message: String,
    on_close: Option<EventHandler<()>>,
) -> Element {
    let variant = kind.class();
    let dismissible = if on_close.is_some() { " alert-dismissible" } else { "" };

    rsx! {
        div {
            class: "alert alert-{variant}{dismissible}",
            role: "alert",
            "{message}"
            if let Some(on_close) = on_close {
                button {
                    class: "btn-close",
                    r#type: "button",
                    aria_label: "Close",
                    onclick: move |_| on_close.call(()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_kind_defaults_to_danger() {
        assert_eq!(AlertKind::default(), AlertKind::Danger);
        assert_eq!(AlertKind::default().class(), "danger");
        assert_eq!(AlertKind::Success.class(), "success");
    }
}
