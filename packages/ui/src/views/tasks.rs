//! Task list with server-side filters and a create/edit modal.

use chrono::{NaiveDate, Utc};
use dioxus::prelude::*;
use store::filters::{is_overdue, TaskQuery};
use store::{Priority, Task, TaskForm, TaskStatus};

use crate::auth::use_api;
use crate::components::{Alert, AlertKind, ConfirmModal, Modal, Spinner};
use crate::format;
use crate::icons::FaPlus;
use crate::Icon;

/// Which task the modal is editing, if any.
#[derive(Clone, Debug, PartialEq)]
enum Editor {
    Closed,
    Create,
    Edit(Task),
}

#[component]
pub fn Tasks() -> Element {
    let api = use_api();
    let mut search = use_signal(String::new);
    let mut priority = use_signal(|| Option::<Priority>::None);
    let mut status = use_signal(|| Option::<TaskStatus>::None);
    let mut editor = use_signal(|| Editor::Closed);
    let mut pending_delete = use_signal(|| Option::<i64>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);

    // Re-runs whenever a filter signal changes
    let list_api = api.clone();
    let mut tasks = use_resource(move || {
        let api = list_api.clone();
        let query = TaskQuery {
            search: search(),
            priority: priority(),
            status: status(),
        };
        async move { api.list_tasks(&query).await }
    });

    let save_api = api.clone();
    let handle_save = move |form: TaskForm| {
        let api = save_api.clone();
        spawn(async move {
            let result = match editor() {
                Editor::Edit(task) => api.update_task(task.id, &form).await.map(|_| "Task updated!"),
                _ => api.create_task(&form).await.map(|_| "Task created!"),
            };
            match result {
                Ok(message) => {
                    success.set(Some(message.to_string()));
                    error.set(None);
                    editor.set(Editor::Closed);
                    tasks.restart();
                }
                Err(e) => {
                    tracing::warn!("Failed to save task: {e}");
                    error.set(Some("Something went wrong.".to_string()));
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
            match api.delete_task(id).await {
                Ok(()) => {
                    success.set(Some("Task deleted.".to_string()));
                    tasks.restart();
                }
                Err(e) => {
                    tracing::warn!(task_id = id, "Failed to delete task: {e}");
                    error.set(Some("Failed to delete task.".to_string()));
                }
            }
        });
    };

    let now = Utc::now();
    let list = match &*tasks.read_unchecked() {
        None => rsx! { Spinner {} },
        Some(Err(e)) => {
            tracing::warn!("Failed to fetch tasks: {e}");
            rsx! { Alert { message: "Failed to fetch tasks." } }
        }
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "text-muted", "No tasks found." }
        },
        Some(Ok(list)) => rsx! {
            div {
                class: "row",
                for task in list.iter().cloned() {
                    div {
                        key: "{task.id}",
                        class: "col-md-4",
                        div {
                            class: "card mb-3 shadow-sm",
                            div {
                                class: "card-body",
                                h5 {
                                    class: "card-title",
                                    "{task.title}"
                                    if is_overdue(task.due_date, now) {
                                        span { class: "badge bg-danger ms-2", "Overdue" }
                                    }
                                }
                                if !task.description.is_empty() {
                                    p { class: "card-text text-muted", "{task.description}" }
                                }
                                p {
                                    class: "card-text",
                                    strong { "Priority: " } "{task.priority.label()}"
                                    br {}
                                    strong { "Status: " } "{task.status.label()}"
                                    br {}
                                    strong { "Due: " } {format::due(task.due_date)}
                                    br {}
                                    strong { "Created: " } {format::datetime(&task.created_at)}
                                    br {}
                                    strong { "Updated: " } {format::datetime(&task.updated_at)}
                                }
                                div {
                                    class: "d-flex justify-content-between",
                                    button {
                                        class: "btn btn-sm btn-outline-primary",
                                        onclick: {
                                            let task = task.clone();
                                            move |_| editor.set(Editor::Edit(task.clone()))
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "btn btn-sm btn-outline-danger",
                                        onclick: move |_| pending_delete.set(Some(task.id)),
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "page-banner tasks-banner",
            h2 { "Manage Your Tasks" }
        }

        div {
            class: "container my-4",
            if let Some(message) = success() {
                Alert { kind: AlertKind::Success, message: message, on_close: move |_| success.set(None) }
            }
            if let Some(message) = error() {
                Alert { kind: AlertKind::Danger, message: message, on_close: move |_| error.set(None) }
            }

            div {
                class: "row mb-3 g-2",
                div {
                    class: "col-md-4",
                    input {
                        class: "form-control",
                        placeholder: "Search tasks...",
                        value: search(),
                        oninput: move |evt: FormEvent| search.set(evt.value()),
                    }
                }
                div {
                    class: "col-md-3",
                    select {
                        class: "form-select",
                        value: priority().map(Priority::as_str).unwrap_or_default(),
                        onchange: move |evt: FormEvent| priority.set(Priority::parse(&evt.value())),
                        option { value: "", "All Priorities" }
                        for p in [Priority::High, Priority::Medium, Priority::Low] {
                            option { value: p.as_str(), "{p.label()}" }
                        }
                    }
                }
                div {
                    class: "col-md-3",
                    select {
                        class: "form-select",
                        value: status().map(TaskStatus::as_str).unwrap_or_default(),
                        onchange: move |evt: FormEvent| status.set(TaskStatus::parse(&evt.value())),
                        option { value: "", "All Statuses" }
                        for s in TaskStatus::ALL {
                            option { value: s.as_str(), "{s.label()}" }
                        }
                    }
                }
                div {
                    class: "col-md-2",
                    button {
                        class: "btn btn-primary w-100",
                        onclick: move |_| editor.set(Editor::Create),
                        Icon { class: "me-1", icon: FaPlus, width: 12, height: 12 }
                        "New Task"
                    }
                }
            }

            {list}
        }

        {match editor() {
            Editor::Closed => rsx! {},
            Editor::Create => rsx! {
                TaskFormModal {
                    initial: TaskForm::default(),
                    editing: false,
                    on_save: handle_save.clone(),
                    on_close: move |_| editor.set(Editor::Closed),
                }
            },
            Editor::Edit(task) => rsx! {
                TaskFormModal {
                    initial: TaskForm::from(&task),
                    editing: true,
                    on_save: handle_save.clone(),
                    on_close: move |_| editor.set(Editor::Closed),
                }
            },
        }}

        if pending_delete().is_some() {
            ConfirmModal {
                message: "Are you sure you want to delete this task?",
                on_confirm: confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}

#[component]
fn TaskFormModal(
    initial: TaskForm,
    editing: bool,
    on_save: EventHandler<TaskForm>,
    on_close: EventHandler<()>,
) -> Element {
    let mut title = use_signal(|| initial.title.clone());
    let mut description = use_signal(|| initial.description.clone());
    let mut priority = use_signal(|| initial.priority);
    let mut status = use_signal(|| initial.status);
    let mut due_date = use_signal(|| initial.due_date);
    let mut is_public = use_signal(|| initial.is_public);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_save.call(TaskForm {
            title: title().trim().to_string(),
            description: description(),
            priority: priority(),
            status: status(),
            due_date: due_date(),
            is_public: is_public(),
        });
    };

    let heading = if editing { "Edit Task" } else { "Create Task" };
    let submit_label = if editing { "Save Changes" } else { "Create Task" };
    let due_value = due_date().map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();

    rsx! {
        Modal {
            title: heading.to_string(),
            on_close: on_close,
            form {
                onsubmit: handle_submit,
                div {
                    class: "modal-body",
                    div {
                        label { class: "form-label", r#for: "task-title", "Title *" }
                        input {
                            id: "task-title",
                            class: "form-control",
                            r#type: "text",
                            required: true,
                            value: title(),
                            oninput: move |evt: FormEvent| title.set(evt.value()),
                        }
                    }
                    div {
                        class: "mt-2",
                        label { class: "form-label", r#for: "task-description", "Description" }
                        textarea {
                            id: "task-description",
                            class: "form-control",
                            rows: "2",
                            value: description(),
                            oninput: move |evt: FormEvent| description.set(evt.value()),
                        }
                    }
                    div {
                        class: "row mt-2",
                        div {
                            class: "col",
                            label { class: "form-label", "Priority" }
                            select {
                                class: "form-select",
                                value: priority().as_str(),
                                onchange: move |evt: FormEvent| {
                                    if let Some(p) = Priority::parse(&evt.value()) {
                                        priority.set(p);
                                    }
                                },
                                for p in Priority::ALL {
                                    option { value: p.as_str(), selected: p == priority(), "{p.label()}" }
                                }
                            }
                        }
                        div {
                            class: "col",
                            label { class: "form-label", "Status" }
                            select {
                                class: "form-select",
                                value: status().as_str(),
                                onchange: move |evt: FormEvent| {
                                    if let Some(s) = TaskStatus::parse(&evt.value()) {
                                        status.set(s);
                                    }
                                },
                                for s in TaskStatus::ALL {
                                    option { value: s.as_str(), selected: s == status(), "{s.label()}" }
                                }
                            }
                        }
                    }
                    div {
                        class: "mt-2",
                        label { class: "form-label", r#for: "task-due", "Due Date" }
                        input {
                            id: "task-due",
                            class: "form-control",
                            r#type: "date",
                            value: due_value,
                            oninput: move |evt: FormEvent| {
                                due_date.set(NaiveDate::parse_from_str(&evt.value(), "%Y-%m-%d").ok());
                            },
                        }
                    }
                    div {
                        class: "form-check mt-2",
                        input {
                            id: "task-public",
                            class: "form-check-input",
                            r#type: "checkbox",
                            checked: is_public(),
                            onchange: move |evt: FormEvent| is_public.set(evt.checked()),
                        }
                        label { class: "form-check-label", r#for: "task-public", "Make this task public" }
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
