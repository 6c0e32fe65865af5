//! Heart button with the like count of a note.

use dioxus::prelude::*;
use store::social::{own_like, LikeState};

use crate::auth::{use_api, use_auth};
use crate::icons::FaHeart;
use crate::regular_icons::FaHeart as FaHeartOutline;
use crate::Icon;

/// Like toggle. Checks on mount whether the viewer already liked the note and
/// patches the count locally after each successful toggle.
#[component]
pub fn LikesButton(
    note_id: i64,
    #[props(default)] initial_count: u32,
    on_change: Option<EventHandler<()>>,
) -> Element {
    let api = use_api();
    let auth = use_auth();
    let viewer = auth().username().map(str::to_string);
    let mut state = use_signal(|| LikeState::new(false, initial_count));
    let mut busy = use_signal(|| false);

    let check_api = api.clone();
    let check_viewer = viewer.clone();
    let _ = use_resource(move || {
        let api = check_api.clone();
        let viewer = check_viewer.clone();
        async move {
            let Some(viewer) = viewer else { return };
            match api.list_likes(note_id).await {
                Ok(likes) => {
                    let liked = own_like(&likes, &viewer).is_some();
                    state.with_mut(|s| s.liked = liked);
                }
                Err(e) => tracing::warn!(note_id, "Failed to check like status: {e}"),
            }
        }
    });

    let toggle = move |_| {
        let api = api.clone();
        let viewer = viewer.clone().unwrap_or_default();
        async move {
            if busy() {
                return;
            }
            busy.set(true);
            let current = state();
            let result = if current.liked {
                match api.list_likes(note_id).await {
                    Ok(likes) => match own_like(&likes, &viewer) {
                        Some(like) => api.unlike(like.id).await.map(|_| current.toggled()),
                        // Already gone on the server.
                        None => Ok(LikeState { liked: false, ..current }),
                    },
                    Err(e) => Err(e),
                }
            } else {
                api.like_note(note_id).await.map(|_| current.toggled())
            };
            match result {
                Ok(next) => {
                    state.set(next);
                    if let Some(on_change) = on_change {
                        on_change.call(());
                    }
                }
                Err(e) => tracing::warn!(note_id, "Failed to toggle like: {e}"),
            }
            busy.set(false);
        }
    };

    let LikeState { liked, count } = state();

    rsx! {
        button {
            class: "btn btn-sm btn-outline-danger d-flex align-items-center gap-1",
            r#type: "button",
            disabled: busy(),
            onclick: toggle,
            if liked {
                Icon { icon: FaHeart, width: 14, height: 14 }
            } else {
                Icon { icon: FaHeartOutline, width: 14, height: 14 }
            }
            "{count}"
        }
    }
}
