//! Profile pages. `/profile` shows the viewer's own profile with an edit
//! modal; `/profiles/:username` shows another user with a follow toggle.

use api::ProfileUpdate;
use dioxus::prelude::*;
use store::media::image_url;
use store::social::FollowState;
use store::Profile;

use crate::auth::{use_api, use_auth, use_config};
use crate::components::{Alert, AlertKind, Modal, Spinner, Toast};
use crate::{FollowersModal, FollowingModal};

#[component]
pub fn MyProfile() -> Element {
    rsx! {
        ProfilePage { username: None }
    }
}

#[component]
pub fn UserProfile(username: String) -> Element {
    rsx! {
        ProfilePage { username: Some(username) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum ListModal {
    Closed,
    Followers,
    Following,
}

#[derive(Clone, Debug, PartialEq)]
struct ToastMessage {
    kind: AlertKind,
    text: String,
}

impl ToastMessage {
    fn success(text: &str) -> Self {
        Self { kind: AlertKind::Success, text: text.to_string() }
    }

    fn failure(text: &str) -> Self {
        Self { kind: AlertKind::Danger, text: text.to_string() }
    }
}

/// `username: None` loads `/api/profiles/me/`.
#[component]
fn ProfilePage(#[props(!optional)] username: Option<String>) -> Element {
    let api = use_api();
    let auth = use_auth();
    let config = use_config();
    let mut profile = use_signal(|| Option::<Profile>::None);
    let mut follow = use_signal(FollowState::default);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut toast = use_signal(|| Option::<ToastMessage>::None);
    let mut list_modal = use_signal(|| ListModal::Closed);
    let mut editing = use_signal(|| false);
    let mut saving = use_signal(|| false);

    let load_api = api.clone();
    let mut fetch = use_resource(use_reactive((&username,), move |(username,)| {
        let api = load_api.clone();
        async move {
            let result = match username.as_deref() {
                Some(name) => api.profile_by_username(name).await,
                None => api.my_profile().await,
            };
            match result {
                Ok(p) => {
                    follow.set(FollowState::new(p.is_following, p.followers_count));
                    profile.set(Some(p));
                    error.set(None);
                }
                Err(e) => {
                    tracing::warn!(username = ?username, "Failed to fetch profile: {e}");
                    error.set(Some("Could not fetch profile.".to_string()));
                }
            }
            loading.set(false);
        }
    }));

    let viewer = auth().username().map(str::to_string);
    let is_own = match username.as_deref() {
        None => true,
        Some(name) => viewer.as_deref() == Some(name),
    };

    let follow_api = api.clone();
    let toggle_follow = move |_| {
        let api = follow_api.clone();
        async move {
            let Some(target) = profile().map(|p| p.username) else { return };
            let current = follow();
            let result = if current.is_following {
                api.unfollow(&target).await
            } else {
                api.follow(&target).await
            };
            match result {
                Ok(()) => follow.set(current.toggled()),
                Err(e) => {
                    tracing::warn!(username = %target, "Follow toggle failed: {e}");
                    toast.set(Some(ToastMessage::failure("Follow action failed.")));
                }
            }
        }
    };

    let save_api = api.clone();
    let save_profile = move |update: ProfileUpdate| {
        let api = save_api.clone();
        saving.set(true);
        spawn(async move {
            match api.update_my_profile(update).await {
                Ok(_) => {
                    toast.set(Some(ToastMessage::success("Profile updated successfully!")));
                    editing.set(false);
                    fetch.restart();
                }
                Err(e) => {
                    tracing::warn!("Failed to update profile: {e}");
                    toast.set(Some(ToastMessage::failure("Failed to update profile.")));
                }
            }
            saving.set(false);
        });
    };

    if loading() {
        return rsx! {
            div { class: "text-center mt-5", Spinner {} }
        };
    }
    if let Some(err) = error() {
        return rsx! {
            div { class: "container mt-3 text-center", Alert { message: err } }
        };
    }
    let Some(current) = profile() else {
        return rsx! {
            div {
                class: "container mt-5 text-center",
                Alert { message: "Profile not found or failed to load." }
            }
        };
    };

    let avatar = image_url(current.image.as_deref(), &config.media.image_base_url);
    let FollowState { is_following, followers_count } = follow();
    let bio = if current.bio.trim().is_empty() {
        "No bio added.".to_string()
    } else {
        current.bio.clone()
    };

    rsx! {
        div {
            class: "container mt-4 d-flex justify-content-center",
            div {
                class: "card shadow p-4 w-100 profile-card",
                div {
                    class: "text-center",
                    img {
                        class: "rounded-circle avatar-lg",
                        src: avatar,
                        alt: "Profile",
                        width: "130",
                        height: "130",
                    }
                    h4 { class: "mt-3", "@{current.username}" }
                    p { class: "text-muted", "{bio}" }
                    p {
                        strong { "Followers: " }
                        span {
                            class: "profile-count",
                            onclick: move |_| list_modal.set(ListModal::Followers),
                            "{followers_count}"
                        }
                    }
                    p {
                        strong { "Following: " }
                        span {
                            class: "profile-count",
                            onclick: move |_| list_modal.set(ListModal::Following),
                            "{current.following_count}"
                        }
                    }
                    if is_own {
                        button {
                            class: "btn btn-sm btn-outline-primary",
                            onclick: move |_| editing.set(true),
                            "Edit Profile"
                        }
                    } else {
                        button {
                            class: if is_following { "btn btn-sm btn-danger mt-3" } else { "btn btn-sm btn-success mt-3" },
                            onclick: toggle_follow,
                            if is_following { "Unfollow" } else { "Follow" }
                        }
                    }
                }
            }
        }

        if let Some(message) = toast() {
            Toast {
                kind: message.kind,
                message: message.text,
                on_close: move |_| toast.set(None),
            }
        }

        if editing() {
            EditProfileModal {
                bio: current.bio.clone(),
                saving: saving(),
                on_save: save_profile,
                on_close: move |_| editing.set(false),
            }
        }

        {match list_modal() {
            ListModal::Closed => rsx! {},
            ListModal::Followers => rsx! {
                FollowersModal {
                    username: current.username.clone(),
                    on_close: move |_| list_modal.set(ListModal::Closed),
                    on_follow_back: move |_| follow.with_mut(|f| f.followers_count += 1),
                }
            },
            ListModal::Following => rsx! {
                FollowingModal {
                    username: current.username.clone(),
                    on_close: move |_| list_modal.set(ListModal::Closed),
                    on_unfollow: move |_| {
                        if let Some(p) = profile.write().as_mut() {
                            p.following_count = p.following_count.saturating_sub(1);
                        }
                    },
                }
            },
        }}
    }
}

#[component]
fn EditProfileModal(
    bio: String,
    saving: bool,
    on_save: EventHandler<ProfileUpdate>,
    on_close: EventHandler<()>,
) -> Element {
    let mut bio = use_signal(|| bio.clone());
    let mut image = use_signal(|| Option::<(String, Vec<u8>)>::None);

    let pick_image = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else { return };
        let Some(name) = engine.files().into_iter().next() else { return };
        match engine.read_file(&name).await {
            Some(bytes) => image.set(Some((name, bytes))),
            None => tracing::warn!(file = %name, "Could not read selected image"),
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_save.call(ProfileUpdate {
            bio: bio(),
            image: image(),
        });
    };

    rsx! {
        Modal {
            title: "Edit Profile",
            on_close: on_close,
            form {
                onsubmit: handle_submit,
                div {
                    class: "modal-body",
                    div {
                        label { class: "form-label", r#for: "profile-bio", "Bio" }
                        textarea {
                            id: "profile-bio",
                            class: "form-control",
                            rows: "3",
                            value: bio(),
                            oninput: move |evt: FormEvent| bio.set(evt.value()),
                        }
                    }
                    div {
                        class: "mt-3",
                        label { class: "form-label", r#for: "profile-image", "Profile Image" }
                        input {
                            id: "profile-image",
                            class: "form-control",
                            r#type: "file",
                            accept: "image/*",
                            onchange: pick_image,
                        }
                        if let Some((name, _)) = image() {
                            p { class: "text-muted small mt-2", "Selected: {name}" }
                        }
                    }
                }
                div {
                    class: "modal-footer d-flex justify-content-between",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: saving,
                        if saving { "Saving..." } else { "Save Changes" }
                    }
                }
            }
        }
    }
}
