//! Comment thread of a note, shown in a modal.

use dioxus::prelude::*;
use store::social::can_edit_comment;
use store::Note;

use crate::auth::{use_api, use_auth};
use crate::components::{Alert, Modal, Spinner};
use crate::format;

/// Lists, adds, edits and deletes comments. Every change re-fetches the thread.
#[component]
pub fn CommentsModal(note: Note, on_close: EventHandler<()>) -> Element {
    let api = use_api();
    let auth = use_auth();
    let viewer = auth().username().unwrap_or_default().to_string();
    let note_id = note.id;

    let mut new_comment = use_signal(String::new);
    let mut editing = use_signal(|| Option::<i64>::None);
    let mut edit_text = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let list_api = api.clone();
    let mut comments = use_resource(move || {
        let api = list_api.clone();
        async move { api.list_comments(note_id).await }
    });

    let add_api = api.clone();
    let handle_add = move |evt: FormEvent| {
        evt.prevent_default();
        let api = add_api.clone();
        spawn(async move {
            let content = new_comment().trim().to_string();
            if content.is_empty() {
                return;
            }
            error.set(None);
            match api.add_comment(note_id, &content).await {
                Ok(()) => {
                    new_comment.set(String::new());
                    comments.restart();
                }
                Err(e) => {
                    tracing::warn!(note_id, "Failed to add comment: {e}");
                    error.set(Some("Could not post your comment.".to_string()));
                }
            }
        });
    };

    let save_api = api.clone();
    let save_edit = move |_: MouseEvent| {
        let api = save_api.clone();
        async move {
            let Some(id) = editing() else { return };
            match api.edit_comment(id, &edit_text()).await {
                Ok(()) => {
                    editing.set(None);
                    edit_text.set(String::new());
                    comments.restart();
                }
                Err(e) => {
                    tracing::warn!(comment_id = id, "Failed to edit comment: {e}");
                    error.set(Some("Could not save the comment.".to_string()));
                }
            }
        }
    };

    let delete_api = api.clone();
    let delete_comment = move |id: i64| {
        let api = delete_api.clone();
        spawn(async move {
            match api.delete_comment(id).await {
                Ok(()) => comments.restart(),
                Err(e) => {
                    tracing::warn!(comment_id = id, "Failed to delete comment: {e}");
                    error.set(Some("Could not delete the comment.".to_string()));
                }
            }
        });
    };

    let thread = match &*comments.read_unchecked() {
        None => rsx! { Spinner {} },
        Some(Err(e)) => {
            tracing::warn!(note_id, "Failed to load comments: {e}");
            rsx! { Alert { message: "Failed to load comments." } }
        }
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "text-muted", "No comments yet." }
        },
        Some(Ok(list)) => rsx! {
            for comment in list.iter().cloned() {
                div {
                    key: "{comment.id}",
                    class: "mb-3",
                    strong { "{comment.commenter}" }
                    " "
                    small {
                        class: "text-muted",
                        "("
                        {format::datetime(&comment.created_at)}
                        ")"
                    }
                    if editing() == Some(comment.id) {
                        input {
                            class: "form-control mt-2",
                            r#type: "text",
                            value: edit_text(),
                            oninput: move |evt: FormEvent| edit_text.set(evt.value()),
                        }
                        div {
                            class: "d-flex gap-2 mt-1",
                            button { class: "btn btn-sm btn-primary", onclick: save_edit.clone(), "Save" }
                            button {
                                class: "btn btn-sm btn-secondary",
                                onclick: move |_| editing.set(None),
                                "Cancel"
                            }
                        }
                    } else {
                        p { class: "mb-1", "{comment.content}" }
                        if can_edit_comment(&comment, &note.owner, &viewer) {
                            div {
                                class: "d-flex gap-2 mt-1",
                                button {
                                    class: "btn btn-sm btn-outline-secondary",
                                    onclick: {
                                        let content = comment.content.clone();
                                        move |_| {
                                            editing.set(Some(comment.id));
                                            edit_text.set(content.clone());
                                        }
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "btn btn-sm btn-outline-danger",
                                    onclick: {
                                        let delete_comment = delete_comment.clone();
                                        move |_| delete_comment(comment.id)
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        },
    };

    let title = format!("Comments on \"{}\"", note.title);
    let content = note.content.clone();

    rsx! {
        Modal {
            title: title,
            on_close: on_close,
            div {
                class: "modal-body",
                p {
                    strong { "Content: " }
                    "{content}"
                }
                hr {}
                if let Some(err) = error() {
                    Alert { message: err, on_close: move |_| error.set(None) }
                }
                {thread}
                form {
                    onsubmit: handle_add,
                    label { class: "form-label mt-2", r#for: "new-comment", "Add a Comment" }
                    input {
                        id: "new-comment",
                        class: "form-control",
                        r#type: "text",
                        placeholder: "Type your comment...",
                        value: new_comment(),
                        oninput: move |evt: FormEvent| new_comment.set(evt.value()),
                    }
                    button { class: "btn btn-primary mt-2", r#type: "submit", "Post" }
                }
            }
        }
    }
}
