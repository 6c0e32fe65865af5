//! Public notes from followed users, with likes and comments.

use dioxus::prelude::*;
use store::filters::{preview, search_feed};
use store::Note;

use crate::auth::use_api;
use crate::components::{Alert, Spinner};
use crate::icons::{FaMagnifyingGlass, FaUsers};
use crate::{CommentsModal, Icon, LikesButton};

#[component]
pub fn Feed() -> Element {
    let api = use_api();
    let mut search = use_signal(String::new);
    let mut commenting = use_signal(|| Option::<Note>::None);

    let mut feed = use_resource(move || {
        let api = api.clone();
        async move { api.feed().await }
    });

    let term = search();
    let body = match &*feed.read_unchecked() {
        None => rsx! {
            div { class: "text-center mt-5", Spinner {} }
        },
        Some(Err(e)) => {
            tracing::warn!("Failed to load feed: {e}");
            rsx! { Alert { message: "Failed to load feed." } }
        }
        Some(Ok(notes)) => {
            let visible: Vec<Note> = search_feed(notes, &term).into_iter().cloned().collect();
            rsx! {
                div {
                    class: "row",
                    if visible.is_empty() {
                        div { class: "col", p { class: "text-muted", "No public notes from your network yet." } }
                    }
                    for note in visible {
                        div {
                            key: "{note.id}",
                            class: "col-md-4",
                            div {
                                class: "card mb-3 shadow-sm",
                                div {
                                    class: "card-body",
                                    h5 { class: "card-title", "{note.title}" }
                                    h6 { class: "card-subtitle mb-2 text-muted", "by {note.owner}" }
                                    p { class: "card-text", {preview(&note.content, 100)} }
                                    div {
                                        class: "d-flex justify-content-between align-items-center",
                                        button {
                                            class: "btn btn-sm btn-outline-secondary",
                                            aria_label: "Comment on {note.title}",
                                            onclick: {
                                                let note = note.clone();
                                                move |_| commenting.set(Some(note.clone()))
                                            },
                                            "Comment"
                                        }
                                        LikesButton {
                                            note_id: note.id,
                                            initial_count: note.like_count,
                                            on_change: move |_| feed.restart(),
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
            h3 {
                class: "mb-4",
                Icon { class: "me-2", icon: FaUsers, width: 22, height: 22 }
                "Feed: Notes from Your Network"
            }

            div {
                class: "input-group mb-4",
                span {
                    class: "input-group-text",
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                }
                input {
                    class: "form-control",
                    placeholder: "Search notes by title or content...",
                    aria_label: "Search notes",
                    value: search(),
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                }
            }

            {body}
        }

        if let Some(note) = commenting() {
            CommentsModal { note: note, on_close: move |_| commenting.set(None) }
        }
    }
}
