//! Access decision for protected routes.

use crate::auth::AuthState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    /// Send the visitor to the login page.
    Redirect,
}

/// Protected pages need a session. The session is restored synchronously, so
/// a pending validation does not block rendering.
pub fn guard(state: &AuthState) -> Access {
    if state.is_authenticated() {
        Access::Allow
    } else {
        Access::Redirect
    }
}

#[cfg(test)]
mod tests {
    use store::{AuthSession, SessionUser};

    use super::*;

    #[test]
    fn test_guard() {
        assert_eq!(guard(&AuthState::default()), Access::Redirect);

        let session = AuthSession {
            token: "tok".into(),
            user: SessionUser::from_username("leo"),
        };
        assert_eq!(guard(&AuthState::restored(Some(session.clone()))), Access::Allow);

        let offline = AuthState {
            session: Some(session),
            loading: false,
            online: false,
        };
        assert_eq!(guard(&offline), Access::Allow);
    }
}
