//! The user's notes: title search, tag filter, add/edit modal with a tag
//! picker, comments and the tag manager.

use api::ApiError;
use dioxus::prelude::*;
use store::filters::{filter_notes, preview, tags_to_create};
use store::{Note, NoteForm, Tag};

use crate::auth::use_api;
use crate::components::{Alert, AlertKind, ConfirmModal, Modal, Spinner};
use crate::icons::{FaPlus, FaTags};
use crate::{format, CommentsModal, Icon, ManageTagsModal};

#[derive(Clone, Debug, PartialEq)]
enum Editor {
    Closed,
    Create,
    Edit(Note),
}

#[component]
pub fn Notes() -> Element {
    let api = use_api();
    let mut notes = use_signal(Vec::<Note>::new);
    let tags = use_signal(Vec::<Tag>::new);
    let mut loading = use_signal(|| true);
    let mut search = use_signal(String::new);
    let mut filter_tag = use_signal(|| Option::<String>::None);
    let mut editor = use_signal(|| Editor::Closed);
    let mut commenting = use_signal(|| Option::<Note>::None);
    let mut managing_tags = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<i64>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);

    let load_api = api.clone();
    let mut reload = use_resource(move || {
        let api = load_api.clone();
        async move {
            if let Err(e) = refresh(&api, notes, tags).await {
                tracing::warn!("Failed to fetch notes or tags: {e}");
                error.set(Some("Error fetching notes or tags.".to_string()));
            }
            loading.set(false);
        }
    });

    let save_api = api.clone();
    let handle_save = move |form: NoteForm| {
        let api = save_api.clone();
        spawn(async move {
            let editing = match editor() {
                Editor::Edit(note) => Some(note.id),
                _ => None,
            };
            match save_note(&api, editing, &form, &tags()).await {
                Ok(message) => {
                    success.set(Some(message.to_string()));
                    error.set(None);
                    editor.set(Editor::Closed);
                    reload.restart();
                }
                Err(e) => {
                    tracing::warn!("Failed to save note: {e}");
                    error.set(Some("Error saving note.".to_string()));
                }
            }
        });
    };

    let delete_api = api.clone();
    let confirm_delete = move |_| {
        let api = delete_api.clone();
        spawn(async move {
            let Some(id) = pending_delete() else { return };
            pending_delete.set(None);
            match api.delete_note(id).await {
                Ok(()) => {
                    success.set(Some("Note deleted.".to_string()));
                    notes.write().retain(|n| n.id != id);
                }
                Err(e) => {
                    tracing::warn!(note_id = id, "Failed to delete note: {e}");
                    error.set(Some("Error deleting note.".to_string()));
                }
            }
        });
    };

    let all_notes = notes();
    let visible: Vec<Note> = filter_notes(&all_notes, &search(), filter_tag().as_deref())
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        div {
            class: "page-banner notes-banner",
            h3 { "Welcome to Your Notes" }
            p { "Use this page to create, tag, edit, delete, and filter your study notes by topic." }
        }

        div {
            class: "container mt-4",
            if let Some(message) = success() {
                Alert { kind: AlertKind::Success, message: message, on_close: move |_| success.set(None) }
            }
            if let Some(message) = error() {
                Alert { kind: AlertKind::Danger, message: message, on_close: move |_| error.set(None) }
            }

            div {
                class: "d-flex justify-content-end mb-3 gap-2",
                button {
                    class: "btn btn-info",
                    onclick: move |_| managing_tags.set(true),
                    Icon { class: "me-1", icon: FaTags, width: 14, height: 14 }
                    "Manage Tags"
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| editor.set(Editor::Create),
                    Icon { class: "me-1", icon: FaPlus, width: 12, height: 12 }
                    "Add Note"
                }
            }

            input {
                class: "form-control mb-3",
                r#type: "text",
                placeholder: "Search by title...",
                value: search(),
                oninput: move |evt: FormEvent| search.set(evt.value()),
            }

            div {
                class: "mb-3 d-flex flex-wrap gap-2",
                for tag in tags() {
                    span {
                        key: "{tag.id}",
                        class: if filter_tag().as_deref() == Some(tag.name.as_str()) { "badge bg-primary tag-filter" } else { "badge bg-secondary tag-filter" },
                        onclick: {
                            let name = tag.name.clone();
                            move |_| {
                                if filter_tag().as_deref() == Some(name.as_str()) {
                                    filter_tag.set(None);
                                } else {
                                    filter_tag.set(Some(name.clone()));
                                }
                            }
                        },
                        "{tag.name}"
                    }
                }
            }

            if loading() {
                Spinner {}
            } else if visible.is_empty() {
                p { class: "text-muted", "No notes found." }
            } else {
                div {
                    class: "row",
                    for note in visible {
                        div {
                            key: "{note.id}",
                            class: "col-md-6 col-lg-4 mb-4",
                            div {
                                class: "card shadow-sm h-100 note-card",
                                div {
                                    class: "card-body",
                                    h5 {
                                        class: "card-title",
                                        "{note.title}"
                                        if note.is_public {
                                            span { class: "badge bg-light text-dark ms-2", "Public" }
                                        }
                                    }
                                    p { class: "card-text", {preview(&note.content, 100)} }
                                    div {
                                        class: "mb-2 d-flex flex-wrap gap-1",
                                        for name in note.tags.clone() {
                                            span {
                                                key: "{name}",
                                                class: "badge bg-info tag-filter",
                                                onclick: {
                                                    let name = name.clone();
                                                    move |_| filter_tag.set(Some(name.clone()))
                                                },
                                                "{name}"
                                            }
                                        }
                                    }
                                    div {
                                        class: "d-flex justify-content-between gap-2",
                                        button {
                                            class: "btn btn-sm btn-secondary",
                                            onclick: {
                                                let note = note.clone();
                                                move |_| editor.set(Editor::Edit(note.clone()))
                                            },
                                            "Edit"
                                        }
                                        button {
                                            class: "btn btn-sm btn-danger",
                                            onclick: move |_| pending_delete.set(Some(note.id)),
                                            "Delete"
                                        }
                                        button {
                                            class: "btn btn-sm btn-info",
                                            onclick: {
                                                let note = note.clone();
                                                move |_| commenting.set(Some(note.clone()))
                                            },
                                            "Comments"
                                        }
                                    }
                                }
                                div {
                                    class: "card-footer text-muted small",
                                    "Created: "
                                    {format::date(&note.created_at)}
                                }
                            }
                        }
                    }
                }
            }
        }

        {match editor() {
            Editor::Closed => rsx! {},
            Editor::Create => rsx! {
                NoteFormModal {
                    initial: NoteForm::default(),
                    editing: false,
                    existing_tags: tags(),
                    on_save: handle_save.clone(),
                    on_close: move |_| editor.set(Editor::Closed),
                }
            },
            Editor::Edit(note) => rsx! {
                NoteFormModal {
                    initial: NoteForm::from(&note),
                    editing: true,
                    existing_tags: tags(),
                    on_save: handle_save.clone(),
                    on_close: move |_| editor.set(Editor::Closed),
                }
            },
        }}

        if let Some(note) = commenting() {
            CommentsModal { note: note, on_close: move |_| commenting.set(None) }
        }

        if managing_tags() {
            ManageTagsModal {
                tags: tags,
                notes: notes,
                on_close: move |_| managing_tags.set(false),
            }
        }

        if pending_delete().is_some() {
            ConfirmModal {
                message: "Are you sure you want to delete this note?",
                on_confirm: confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}

/// Fetch notes and tags together.
async fn refresh(
    api: &api::ApiClient,
    mut notes: Signal<Vec<Note>>,
    mut tags: Signal<Vec<Tag>>,
) -> Result<(), ApiError> {
    let (fetched_notes, fetched_tags) = futures::join!(api.list_notes(), api.list_tags());
    notes.set(fetched_notes?);
    tags.set(fetched_tags?);
    Ok(())
}

/// Create any new tags first, then create or update the note.
async fn save_note(
    api: &api::ApiClient,
    editing: Option<i64>,
    form: &NoteForm,
    existing: &[Tag],
) -> Result<&'static str, ApiError> {
    for name in tags_to_create(&form.tags, existing) {
        api.create_tag(&name).await?;
    }
    match editing {
        Some(id) => {
            api.update_note(id, form).await?;
            Ok("Note updated successfully.")
        }
        None => {
            api.create_note(form).await?;
            Ok("Note created successfully.")
        }
    }
}

#[component]
fn NoteFormModal(
    initial: NoteForm,
    editing: bool,
    existing_tags: Vec<Tag>,
    on_save: EventHandler<NoteForm>,
    on_close: EventHandler<()>,
) -> Element {
    let mut title = use_signal(|| initial.title.clone());
    let mut content = use_signal(|| initial.content.clone());
    let mut is_public = use_signal(|| initial.is_public);
    let selected = use_signal(|| initial.tags.clone());

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_save.call(NoteForm {
            title: title().trim().to_string(),
            content: content(),
            is_public: is_public(),
            tags: selected(),
        });
    };

    let heading = if editing { "Edit Note" } else { "Add New Note" };
    let submit_label = if editing { "Save Changes" } else { "Create Note" };

    rsx! {
        Modal {
            title: heading.to_string(),
            on_close: on_close,
            form {
                onsubmit: handle_submit,
                div {
                    class: "modal-body",
                    div {
                        label { class: "form-label", r#for: "note-title", "Title" }
                        input {
                            id: "note-title",
                            class: "form-control",
                            required: true,
                            value: title(),
                            oninput: move |evt: FormEvent| title.set(evt.value()),
                        }
                    }
                    div {
                        class: "mt-2",
                        label { class: "form-label", r#for: "note-content", "Content" }
                        textarea {
                            id: "note-content",
                            class: "form-control",
                            rows: "3",
                            required: true,
                            value: content(),
                            oninput: move |evt: FormEvent| content.set(evt.value()),
                        }
                    }
                    div {
                        class: "mt-2",
                        label { class: "form-label", "Tags" }
                        TagPicker { selected: selected, existing: existing_tags.clone() }
                    }
                    div {
                        class: "form-check mt-2",
                        input {
                            id: "note-public",
                            class: "form-check-input",
                            r#type: "checkbox",
                            checked: is_public(),
                            onchange: move |evt: FormEvent| is_public.set(evt.checked()),
                        }
                        label { class: "form-check-label", r#for: "note-public", "Make this note public" }
                    }
                }
                div {
                    class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button { class: "btn btn-primary", r#type: "submit", "{submit_label}" }
                }
            }
        }
    }
}

/// Multi-select over existing tags that also accepts new names.
#[component]
fn TagPicker(selected: Signal<Vec<String>>, existing: Vec<Tag>) -> Element {
    let mut input = use_signal(String::new);

    let mut add = move |name: String| {
        let name = name.trim().to_string();
        if !name.is_empty() && !selected.read().contains(&name) {
            selected.write().push(name);
        }
        input.set(String::new());
    };

    let suggestions: Vec<String> = existing
        .iter()
        .map(|t| t.name.clone())
        .filter(|name| !selected.read().contains(name))
        .collect();

    rsx! {
        div {
            class: "d-flex flex-wrap gap-1 mb-2",
            for name in selected() {
                span {
                    key: "{name}",
                    class: "badge bg-primary d-flex align-items-center gap-1",
                    "{name}"
                    button {
                        class: "btn-close btn-close-white btn-sm",
                        r#type: "button",
                        aria_label: "Remove",
                        onclick: {
                            let name = name.clone();
                            move |_| selected.write().retain(|n| n != &name)
                        },
                    }
                }
            }
        }
        div {
            class: "input-group",
            input {
                class: "form-control",
                r#type: "text",
                list: "tag-suggestions",
                placeholder: "Pick or type a tag",
                value: input(),
                oninput: move |evt: FormEvent| input.set(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        evt.prevent_default();
                        add(input());
                    }
                },
            }
            button {
                class: "btn btn-outline-secondary",
                r#type: "button",
                onclick: move |_| add(input()),
                "Add"
            }
        }
        datalist {
            id: "tag-suggestions",
            for name in suggestions {
                option { key: "{name}", value: "{name}" }
            }
        }
    }
}
