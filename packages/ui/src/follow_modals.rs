//! Followers and following lists opened from a profile's counters.

use dioxus::prelude::*;
use store::media::image_url;
use store::social::{mark_followed_back, remove_followee};
use store::FollowUser;

use crate::auth::{use_api, use_config};
use crate::components::{Alert, Modal, Spinner};
use crate::Route;

/// Followers of `username`. "Follow Back" follows a user that is not followed
/// yet and bumps the parent's count through `on_follow_back`.
#[component]
pub fn FollowersModal(
    username: String,
    on_close: EventHandler<()>,
    on_follow_back: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut list = use_signal(Vec::<FollowUser>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let load_api = api.clone();
    let owner = username.clone();
    let _ = use_resource(move || {
        let api = load_api.clone();
        let owner = owner.clone();
        async move {
            match api.followers(&owner).await {
                Ok(users) => list.set(users),
                Err(e) => {
                    tracing::warn!(username = %owner, "Failed to load followers: {e}");
                    error.set(Some("Failed to load followers.".to_string()));
                }
            }
            loading.set(false);
        }
    });

    let follow_back = move |target: String| {
        let api = api.clone();
        spawn(async move {
            match api.follow(&target).await {
                Ok(()) => {
                    mark_followed_back(&mut list.write(), &target);
                    on_follow_back.call(());
                }
                Err(e) => {
                    tracing::warn!(username = %target, "Failed to follow back: {e}");
                    error.set(Some("Could not follow back.".to_string()));
                }
            }
        });
    };

    rsx! {
        Modal {
            title: "Followers",
            on_close: on_close,
            div {
                class: "modal-body",
                if loading() {
                    Spinner {}
                } else if let Some(err) = error() {
                    Alert { message: err }
                } else if list().is_empty() {
                    p { "No followers yet." }
                } else {
                    ul {
                        class: "list-group",
                        for user in list() {
                            li {
                                key: "{user.id}",
                                class: "list-group-item d-flex justify-content-between align-items-center",
                                UserLink { user: user.clone(), on_navigate: on_close }
                                if !user.followed_back {
                                    button {
                                        class: "btn btn-sm btn-outline-primary",
                                        onclick: {
                                            let follow_back = follow_back.clone();
                                            let target = user.username.clone();
                                            move |_| follow_back(target.clone())
                                        },
                                        "Follow Back"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Users `username` follows. "Unfollow" removes the row and decrements the
/// parent's count through `on_unfollow`.
#[component]
pub fn FollowingModal(
    username: String,
    on_close: EventHandler<()>,
    on_unfollow: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut list = use_signal(Vec::<FollowUser>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let load_api = api.clone();
    let owner = username.clone();
    let _ = use_resource(move || {
        let api = load_api.clone();
        let owner = owner.clone();
        async move {
            match api.following(&owner).await {
                Ok(users) => list.set(users),
                Err(e) => {
                    tracing::warn!(username = %owner, "Failed to load following: {e}");
                    error.set(Some("Failed to load following list.".to_string()));
                }
            }
            loading.set(false);
        }
    });

    let unfollow = move |target: String| {
        let api = api.clone();
        spawn(async move {
            match api.unfollow(&target).await {
                Ok(()) => {
                    remove_followee(&mut list.write(), &target);
                    on_unfollow.call(());
                }
                Err(e) => {
                    tracing::warn!(username = %target, "Failed to unfollow: {e}");
                    error.set(Some("Could not unfollow.".to_string()));
                }
            }
        });
    };

    rsx! {
        Modal {
            title: "Following",
            on_close: on_close,
            div {
                class: "modal-body",
                if loading() {
                    Spinner {}
                } else if let Some(err) = error() {
                    Alert { message: err }
                } else if list().is_empty() {
                    p { "Not following anyone yet." }
                } else {
                    ul {
                        class: "list-group",
                        for user in list() {
                            li {
                                key: "{user.id}",
                                class: "list-group-item d-flex justify-content-between align-items-center",
                                UserLink { user: user.clone(), on_navigate: on_close }
                                button {
                                    class: "btn btn-sm btn-outline-danger",
                                    onclick: {
                                        let unfollow = unfollow.clone();
                                        let target = user.username.clone();
                                        move |_| unfollow(target.clone())
                                    },
                                    "Unfollow"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Avatar and handle linking to the user's profile.
#[component]
fn UserLink(user: FollowUser, on_navigate: EventHandler<()>) -> Element {
    let config = use_config();
    let avatar = image_url(user.image.as_deref(), &config.media.image_base_url);

    rsx! {
        Link {
            class: "d-flex align-items-center text-decoration-none",
            to: Route::UserProfile { username: user.username.clone() },
            onclick: move |_| on_navigate.call(()),
            img {
                class: "rounded-circle me-2 avatar-sm",
                src: avatar,
                alt: "{user.username}",
                width: "40",
                height: "40",
            }
            "@{user.username}"
        }
    }
}
