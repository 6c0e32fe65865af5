use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::{AuthProvider, Route};

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

fn main() {
    let level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("Failed to initialise logger: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = ui::load_config();
        tracing::info!(api = %config.api.base_url, "Starting TaskHive desktop");
        config
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: BOOTSTRAP_CSS }
        document::Link { rel: "stylesheet", href: ui::TASKHIVE_CSS }

        AuthProvider {
            config: config,
            Router::<Route> {}
        }
    }
}
