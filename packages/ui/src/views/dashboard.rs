use api::ApiError;
use dioxus::prelude::*;
use store::filters::{preview, TaskQuery};
use store::{Note, Task};

use crate::auth::{use_api, use_auth};
use crate::components::{Alert, Spinner};
use crate::icons::FaUsers;
use crate::{Icon, Route};

const RECENT: usize = 3;

struct DashboardData {
    tasks: Vec<Task>,
    notes: Vec<Note>,
    feed: Vec<Note>,
}

/// Overview of recent tasks, notes and network activity.
#[component]
pub fn Dashboard() -> Element {
    let api = use_api();
    let auth = use_auth();
    let username = auth().username().unwrap_or_default().to_string();

    let data = use_resource(move || {
        let api = api.clone();
        async move {
            let query = TaskQuery::default();
            let (tasks, notes, feed) = futures::join!(
                api.list_tasks(&query),
                api.list_notes(),
                api.feed()
            );
            Ok::<_, ApiError>(DashboardData {
                tasks: tasks?,
                notes: notes?,
                feed: feed?,
            })
        }
    });

    let body = match &*data.read_unchecked() {
        None => rsx! { Spinner {} },
        Some(Err(e)) => {
            tracing::warn!("Failed to load dashboard: {e}");
            rsx! {
                div { class: "container mt-4 text-center", Alert { message: "Failed to load dashboard data." } }
            }
        }
        Some(Ok(data)) => rsx! {
            div {
                class: "container dashboard py-4",
                h2 { class: "text-center mb-4", "Welcome back, {username}" }

                h4 { "Recent Tasks" }
                div {
                    class: "row mb-3",
                    if data.tasks.is_empty() {
                        div { class: "col", p { class: "text-muted", "You have no tasks yet. Start by creating one!" } }
                    }
                    for task in data.tasks.iter().take(RECENT).cloned() {
                        div {
                            key: "{task.id}",
                            class: "col-md-4",
                            div {
                                class: "card mb-3 shadow-sm",
                                div {
                                    class: "card-body",
                                    h5 { class: "card-title", "{task.title}" }
                                    p {
                                        class: "card-text",
                                        "Status: {task.status.label()}"
                                        br {}
                                        "Priority: {task.priority.label()}"
                                    }
                                    Link { class: "btn btn-outline-primary btn-sm", to: Route::Tasks {}, "View Task" }
                                }
                            }
                        }
                    }
                }
                if data.tasks.len() > RECENT {
                    div { class: "text-end mb-4",
                        Link { class: "btn btn-sm btn-primary", to: Route::Tasks {}, "View More Tasks" }
                    }
                }

                h4 { "Recent Notes" }
                div {
                    class: "row",
                    if data.notes.is_empty() {
                        div { class: "col", p { class: "text-muted", "You haven't added any notes yet." } }
                    }
                    for note in data.notes.iter().take(RECENT).cloned() {
                        NoteCard { key: "{note.id}", note: note.clone(), show_owner: false }
                    }
                }
                if data.notes.len() > RECENT {
                    div { class: "text-end mb-4",
                        Link { class: "btn btn-sm btn-success", to: Route::Notes {}, "View More Notes" }
                    }
                }

                div {
                    class: "mt-5",
                    h4 {
                        Icon { class: "me-2", icon: FaUsers, width: 20, height: 20 }
                        "Feed: Notes from Your Network"
                    }
                    div {
                        class: "row",
                        if data.feed.is_empty() {
                            div { class: "col", p { class: "text-muted", "No public notes from your network yet." } }
                        }
                        for note in data.feed.iter().take(RECENT).cloned() {
                            NoteCard { key: "{note.id}", note: note.clone(), show_owner: true }
                        }
                    }
                    if data.feed.len() > RECENT {
                        div { class: "text-end mt-2",
                            Link { class: "btn btn-sm btn-info", to: Route::Feed {}, "View More Feed" }
                        }
                    }
                }
            }
        },
    };

    body
}

#[component]
fn NoteCard(note: Note, show_owner: bool) -> Element {
    let excerpt = preview(&note.content, 50);
    let target = if show_owner { Route::Feed {} } else { Route::Notes {} };

    rsx! {
        div {
            class: "col-md-4",
            div {
                class: "card mb-3 shadow-sm",
                div {
                    class: "card-body",
                    h5 { class: "card-title", "{note.title}" }
                    if show_owner {
                        h6 { class: "card-subtitle mb-2 text-muted", "by {note.owner}" }
                    }
                    p { class: "card-text", "{excerpt}" }
                    Link { class: "btn btn-outline-success btn-sm", to: target, "View Note" }
                }
            }
        }
    }
}
