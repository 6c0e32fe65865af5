//! Authentication context and hooks for the UI.

use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use store::{AuthSession, SessionUser, SignupRequest, TaskHiveConfig};

use crate::platform::session_store;

const CHECK_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60);

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<AuthSession>,
    /// True until the restored session has been checked against the backend.
    pub loading: bool,
    /// Whether the backend answered the last check.
    pub online: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: None,
            loading: false,
            online: true,
        }
    }
}

impl AuthState {
    /// State for a session read back from storage, pending validation.
    pub fn restored(session: Option<AuthSession>) -> Self {
        Self {
            loading: session.is_some(),
            session,
            online: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(AuthSession::username)
    }

    pub fn token(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.token.clone())
    }

    /// Fold the result of a `current_user` check into the state.
    ///
    /// A rejected token ends the session. Any other failure keeps it and marks
    /// the backend unreachable.
    pub fn after_check(self, result: &Result<SessionUser, ApiError>) -> Self {
        match result {
            Ok(user) => Self {
                session: self.session.map(|s| AuthSession {
                    user: user.clone(),
                    ..s
                }),
                loading: false,
                online: true,
            },
            Err(e) if e.is_auth_failure() => Self {
                session: None,
                loading: false,
                online: true,
            },
            Err(_) => Self {
                loading: false,
                online: false,
                ..self
            },
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// API client carrying the current session token.
pub fn use_api() -> ApiClient {
    let base = use_context::<ApiClient>();
    let auth = use_auth();
    let token = auth().token();
    base.with_token(token)
}

/// The client configuration provided at the root.
pub fn use_config() -> TaskHiveConfig {
    use_context::<TaskHiveConfig>()
}

/// Check the stored token against the backend and apply the outcome.
async fn validate_session(base: ApiClient, mut auth: Signal<AuthState>) {
    let Some(token) = auth.peek().token() else {
        if auth.peek().loading {
            auth.set(AuthState::default());
        }
        return;
    };

    let result = base.with_token(Some(token.clone())).current_user().await;
    if let Err(e) = &result {
        if e.is_auth_failure() {
            tracing::info!("Stored session rejected, logging out");
        } else {
            tracing::warn!("Session check failed: {e}");
        }
    }

    let current = auth.peek().clone();
    let CheckOutcome::Apply { next, persist } = settle_check(&current, &token, &result) else {
        return;
    };
    let store = session_store();
    match persist {
        Persist::Save(session) => session.save(&store),
        Persist::Clear => AuthSession::clear(&store),
        Persist::Keep => {}
    }
    if next != current {
        auth.set(next);
    }
}

/// Storage change that follows a session check.
#[derive(Debug, Clone, PartialEq)]
enum Persist {
    Keep,
    Save(AuthSession),
    Clear,
}

#[derive(Debug, Clone, PartialEq)]
enum CheckOutcome {
    /// Login or logout happened while the check was in flight.
    Stale,
    Apply { next: AuthState, persist: Persist },
}

/// Decide what a finished check for `checked_token` does to `current`.
fn settle_check(
    current: &AuthState,
    checked_token: &str,
    result: &Result<SessionUser, ApiError>,
) -> CheckOutcome {
    if current.token().as_deref() != Some(checked_token) {
        return CheckOutcome::Stale;
    }
    let next = current.clone().after_check(result);
    let persist = match &next.session {
        Some(session) if current.session.as_ref() != Some(session) => Persist::Save(session.clone()),
        Some(_) => Persist::Keep,
        None => Persist::Clear,
    };
    CheckOutcome::Apply { next, persist }
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(config: TaskHiveConfig, children: Element) -> Element {
    let base = use_hook(|| ApiClient::new(&config));
    let auth_state = use_signal(|| AuthState::restored(AuthSession::load(&session_store())));

    use_context_provider(|| config.clone());
    use_context_provider(|| base.clone());
    use_context_provider(|| auth_state);

    // Validate the restored session on mount
    let check_base = base.clone();
    let _ = use_resource(move || validate_session(check_base.clone(), auth_state));

    // Periodic session check
    use_effect(move || {
        let base = base.clone();
        spawn(async move {
            loop {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(CHECK_INTERVAL).await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(CHECK_INTERVAL).await;

                validate_session(base.clone(), auth_state).await;
            }
        });
    });

    rsx! {
        {children}
    }
}

/// Log in and persist the session.
pub async fn login(
    api: &ApiClient,
    mut auth: Signal<AuthState>,
    username: &str,
    password: &str,
) -> Result<(), ApiError> {
    let response = api.login(username, password).await?;
    let session = AuthSession::from_login(response, username);
    session.save(&session_store());
    tracing::info!(username = session.username(), "logged in");
    auth.set(AuthState {
        session: Some(session),
        loading: false,
        online: true,
    });
    Ok(())
}

/// Forget the session locally. The backend token is not revoked.
pub fn logout(mut auth: Signal<AuthState>) {
    AuthSession::clear(&session_store());
    tracing::info!("logged out");
    let online = auth.peek().online;
    auth.set(AuthState {
        session: None,
        loading: false,
        online,
    });
}

/// Register a new account. The user still has to log in afterwards.
pub async fn signup(api: &ApiClient, form: &SignupRequest) -> Result<(), ApiError> {
    api.register(form).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> AuthSession {
        AuthSession {
            token: "tok".to_string(),
            user: SessionUser::from_username("amina"),
        }
    }

    #[test]
    fn test_restored_session_is_loading() {
        assert!(AuthState::restored(Some(session())).loading);
        assert!(!AuthState::restored(None).loading);
    }

    #[test]
    fn test_check_success_refreshes_user() {
        let user = SessionUser {
            id: Some(3),
            username: "amina".into(),
            email: "amina@example.com".into(),
            ..SessionUser::default()
        };
        let state = AuthState::restored(Some(session())).after_check(&Ok(user.clone()));
        assert!(!state.loading);
        assert!(state.online);
        assert_eq!(state.session.unwrap().user, user);
    }

    #[test]
    fn test_check_unauthorized_ends_session() {
        let state = AuthState::restored(Some(session())).after_check(&Err(ApiError::Unauthorized));
        assert!(state.session.is_none());
        assert!(state.online);
    }

    #[test]
    fn test_settle_discards_check_for_replaced_token() {
        let relogged = AuthState::restored(Some(AuthSession {
            token: "fresh".to_string(),
            user: SessionUser::from_username("amina"),
        }));
        assert_eq!(
            settle_check(&relogged, "tok", &Err(ApiError::Unauthorized)),
            CheckOutcome::Stale
        );
        assert_eq!(
            settle_check(&AuthState::default(), "tok", &Ok(SessionUser::from_username("amina"))),
            CheckOutcome::Stale
        );
    }

    #[test]
    fn test_settle_persists_outcome() {
        let current = AuthState::restored(Some(session()));

        let unchanged = settle_check(&current, "tok", &Ok(SessionUser::from_username("amina")));
        assert!(matches!(unchanged, CheckOutcome::Apply { persist: Persist::Keep, .. }));

        let refreshed_user = SessionUser {
            email: "amina@example.com".into(),
            ..SessionUser::from_username("amina")
        };
        match settle_check(&current, "tok", &Ok(refreshed_user.clone())) {
            CheckOutcome::Apply { persist: Persist::Save(saved), next } => {
                assert_eq!(saved.user, refreshed_user);
                assert_eq!(next.session, Some(saved));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }

        let rejected = settle_check(&current, "tok", &Err(ApiError::Unauthorized));
        assert!(matches!(rejected, CheckOutcome::Apply { persist: Persist::Clear, .. }));

        let offline = settle_check(&current, "tok", &Err(ApiError::NotFound));
        match offline {
            CheckOutcome::Apply { next, persist } => {
                assert_eq!(persist, Persist::Keep);
                assert!(!next.online);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_check_server_error_keeps_session_offline() {
        let err = ApiError::Status {
            status: 502,
            body: String::new(),
        };
        let state = AuthState::restored(Some(session())).after_check(&Err(err));
        assert_eq!(state.username(), Some("amina"));
        assert!(!state.online);
        assert!(!state.loading);
    }
}
