use chrono::{Datelike, Utc};
use dioxus::prelude::*;

use crate::brand_icons::{FaFacebook, FaGithub, FaInstagram, FaLinkedin, FaTwitter};
use crate::icons::FaEnvelope;
use crate::{Icon, Route};

#[component]
pub fn Footer() -> Element {
    let year = Utc::now().year();

    rsx! {
        footer {
            class: "taskhive-footer text-light py-4 mt-5",
            div {
                class: "container",
                div {
                    class: "row mb-3 text-center text-md-start",
                    div {
                        class: "col-md-4",
                        h5 { "TaskHive" }
                        p { class: "small", "Manage tasks & notes. Stay productive. Stay inspired." }
                    }
                    div {
                        class: "col-md-4",
                        h6 { "Quick Links" }
                        ul {
                            class: "list-unstyled",
                            li { Link { class: "footer-link", to: Route::Home {}, "Home" } }
                            li { Link { class: "footer-link", to: Route::Dashboard {}, "Dashboard" } }
                            li { Link { class: "footer-link", to: Route::Tasks {}, "Tasks" } }
                            li { Link { class: "footer-link", to: Route::Notes {}, "Notes" } }
                            li { Link { class: "footer-link", to: Route::Explore {}, "Explore" } }
                        }
                    }
                    div {
                        class: "col-md-4 d-flex flex-column align-items-center",
                        h6 { "Connect with us" }
                        div {
                            class: "d-flex justify-content-center flex-wrap gap-3",
                            a { class: "footer-icon", href: "https://github.com", target: "_blank", rel: "noreferrer",
                                Icon { icon: FaGithub, width: 22, height: 22 }
                            }
                            a { class: "footer-icon", href: "https://linkedin.com", target: "_blank", rel: "noreferrer",
                                Icon { icon: FaLinkedin, width: 22, height: 22 }
                            }
                            a { class: "footer-icon", href: "https://twitter.com", target: "_blank", rel: "noreferrer",
                                Icon { icon: FaTwitter, width: 22, height: 22 }
                            }
                            a { class: "footer-icon", href: "https://instagram.com", target: "_blank", rel: "noreferrer",
                                Icon { icon: FaInstagram, width: 22, height: 22 }
                            }
                            a { class: "footer-icon", href: "https://facebook.com", target: "_blank", rel: "noreferrer",
                                Icon { icon: FaFacebook, width: 22, height: 22 }
                            }
                            a { class: "footer-icon", href: "mailto:hello@taskhive.app",
                                Icon { icon: FaEnvelope, width: 22, height: 22 }
                            }
                        }
                    }
                }
                hr { class: "border-light opacity-25" }
                p { class: "text-center small mb-0 opacity-75", "© {year} TaskHive. All rights reserved." }
            }
        }
    }
}
