//! Add, rename, delete and filter the user's tags.

use dioxus::prelude::*;
use store::filters::{filter_tags, rename_tag_in_notes, tag_in_use};
use store::{Note, Tag};

use crate::auth::use_api;
use crate::components::{Alert, Modal};

/// Tag manager. `tags` and `notes` are owned by the notes page and patched in
/// place; a rename is applied to both.
#[component]
pub fn ManageTagsModal(
    tags: Signal<Vec<Tag>>,
    notes: Signal<Vec<Note>>,
    on_close: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut tag_input = use_signal(String::new);
    let mut filter = use_signal(String::new);
    let mut editing = use_signal(|| Option::<i64>::None);
    let mut edit_name = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let add_api = api.clone();
    let handle_add = move |evt: FormEvent| {
        evt.prevent_default();
        let api = add_api.clone();
        spawn(async move {
            let name = tag_input().trim().to_string();
            if name.is_empty() {
                return;
            }
            match api.create_tag(&name).await {
                Ok(tag) => {
                    tags.write().push(tag);
                    tag_input.set(String::new());
                    error.set(None);
                }
                Err(e) => {
                    tracing::warn!("Failed to add tag: {e}");
                    error.set(Some("Could not add the tag.".to_string()));
                }
            }
        });
    };

    let save_api = api.clone();
    let save_edit = move |_: MouseEvent| {
        let api = save_api.clone();
        async move {
            let Some(id) = editing() else { return };
            let name = edit_name().trim().to_string();
            if name.is_empty() {
                return;
            }
            match api.rename_tag(id, &name).await {
                Ok(_) => {
                    if let Some(tag) = tags.write().iter_mut().find(|t| t.id == id) {
                        rename_tag_in_notes(&mut notes.write(), &tag.name, &name);
                        tag.name = name;
                    }
                    editing.set(None);
                    edit_name.set(String::new());
                    error.set(None);
                }
                Err(e) => {
                    tracing::warn!(tag_id = id, "Failed to rename tag: {e}");
                    error.set(Some("Could not rename the tag.".to_string()));
                }
            }
        }
    };

    let delete_api = api.clone();
    let delete_tag = move |tag: Tag| {
        if tag_in_use(&notes.read(), &tag.name) {
            error.set(Some("Cannot delete tag that is used in notes.".to_string()));
            return;
        }
        let api = delete_api.clone();
        spawn(async move {
            match api.delete_tag(tag.id).await {
                Ok(()) => {
                    tags.write().retain(|t| t.id != tag.id);
                    error.set(None);
                }
                Err(e) => {
                    tracing::warn!(tag_id = tag.id, "Failed to delete tag: {e}");
                    error.set(Some("Could not delete the tag.".to_string()));
                }
            }
        });
    };

    let all_tags = tags();
    let visible: Vec<Tag> = filter_tags(&all_tags, &filter()).into_iter().cloned().collect();

    rsx! {
        Modal {
            title: "Manage Tags",
            on_close: on_close,
            div {
                class: "modal-body",
                if let Some(err) = error() {
                    Alert { message: err, on_close: move |_| error.set(None) }
                }
                form {
                    onsubmit: handle_add,
                    label { class: "form-label", r#for: "new-tag", "Add New Tag" }
                    div {
                        class: "input-group",
                        input {
                            id: "new-tag",
                            class: "form-control",
                            r#type: "text",
                            placeholder: "Enter tag name",
                            value: tag_input(),
                            oninput: move |evt: FormEvent| tag_input.set(evt.value()),
                        }
                        button { class: "btn btn-primary", r#type: "submit", "Add" }
                    }
                }
                hr {}
                div {
                    class: "mb-3",
                    label { class: "form-label", r#for: "tag-filter", "Filter Tags" }
                    input {
                        id: "tag-filter",
                        class: "form-control",
                        r#type: "text",
                        placeholder: "Search...",
                        value: filter(),
                        oninput: move |evt: FormEvent| filter.set(evt.value()),
                    }
                }
                if visible.is_empty() {
                    p { "No tags found." }
                }
                for tag in visible {
                    div {
                        key: "{tag.id}",
                        class: "d-flex justify-content-between align-items-center gap-2 mb-2",
                        if editing() == Some(tag.id) {
                            input {
                                class: "form-control",
                                value: edit_name(),
                                oninput: move |evt: FormEvent| edit_name.set(evt.value()),
                            }
                            button { class: "btn btn-sm btn-success", onclick: save_edit.clone(), "Save" }
                            button {
                                class: "btn btn-sm btn-secondary",
                                onclick: move |_| editing.set(None),
                                "Cancel"
                            }
                        } else {
                            span { "{tag.name}" }
                            div {
                                class: "d-flex gap-2",
                                button {
                                    class: "btn btn-sm btn-outline-secondary",
                                    onclick: {
                                        let name = tag.name.clone();
                                        move |_| {
                                            editing.set(Some(tag.id));
                                            edit_name.set(name.clone());
                                        }
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "btn btn-sm btn-danger",
                                    onclick: {
                                        let mut delete_tag = delete_tag.clone();
                                        let tag = tag.clone();
                                        move |_| delete_tag(tag.clone())
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
