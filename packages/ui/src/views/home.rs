use dioxus::prelude::*;

use crate::icons::{FaCommentDots, FaListCheck, FaNoteSticky, FaUserGroup};
use crate::{Icon, Route};

const HERO_IMAGE: &str =
    "https://res.cloudinary.com/dotdnopux/image/upload/v1747318759/MyHero_qzvy3k.jpg";

/// Landing page.
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "container my-5",
            div {
                class: "row align-items-center",
                div {
                    class: "col-md-6",
                    h2 { strong { "Organize Your Study Life with Ease" } }
                    p {
                        class: "text-muted",
                        "TaskHive helps you stay on top of assignments, collaborate with peers, and take meaningful notes in one place."
                    }
                    Link { class: "btn btn-primary", to: Route::Signup {}, "Join Us" }
                }
                div {
                    class: "col-md-6",
                    img { class: "img-fluid rounded hero-image", src: HERO_IMAGE, alt: "TaskHive Hero" }
                }
            }
        }

        section {
            class: "how-it-works py-5",
            div {
                class: "container",
                h3 { class: "text-center mb-4", "How It Works" }
                div {
                    class: "row text-center",
                    FeatureCard {
                        title: "Create Tasks",
                        description: "Stay focused with smart task management. Prioritize what matters.",
                        Icon { icon: FaListCheck, width: 32, height: 32 }
                    }
                    FeatureCard {
                        title: "Make Notes",
                        description: "Write and organize notes connected to your goals or tasks.",
                        Icon { icon: FaNoteSticky, width: 32, height: 32 }
                    }
                    FeatureCard {
                        title: "Follow Friends",
                        description: "See what your friends are working on and stay motivated.",
                        Icon { icon: FaUserGroup, width: 32, height: 32 }
                    }
                    FeatureCard {
                        title: "Engage with Peers",
                        description: "Like and comment on shared notes to build a learning network.",
                        Icon { icon: FaCommentDots, width: 32, height: 32 }
                    }
                }
            }
        }

        section {
            class: "cta text-white text-center py-5",
            div {
                class: "container",
                h2 { strong { "Ready to boost your productivity?" } }
                p { class: "mb-4", "Join TaskHive today and take control of your tasks, notes, and learning journey." }
                Link { class: "btn btn-light me-3", to: Route::Signup {}, "Get Started" }
                Link { class: "btn btn-outline-light", to: Route::Login {}, "Log In" }
            }
        }
    }
}

#[component]
fn FeatureCard(title: String, description: String, children: Element) -> Element {
    rsx! {
        div {
            class: "col-md-3 col-sm-6 col-12 mb-4",
            div {
                class: "card shadow-sm h-100",
                div {
                    class: "card-body",
                    div { class: "mb-3 text-primary", {children} }
                    h5 { strong { "{title}" } }
                    p { class: "text-muted", "{description}" }
                }
            }
        }
    }
}
