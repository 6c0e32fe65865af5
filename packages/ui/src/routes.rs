use dioxus::prelude::*;

use crate::layout::{AppLayout, RequireAuth};
use crate::views::{
    Dashboard, Explore, Feed, Home, Login, MyProfile, NotFound, Notes, Signup, Tasks, UserProfile,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Signup {},
        #[layout(RequireAuth)]
            #[route("/dashboard")]
            Dashboard {},
            #[route("/tasks")]
            Tasks {},
            #[route("/notes")]
            Notes {},
            #[route("/profile")]
            MyProfile {},
            #[route("/profiles/:username")]
            UserProfile { username: String },
            #[route("/feed")]
            Feed {},
            #[route("/explore")]
            Explore {},
        #[end_layout]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Route::Signup {}.to_string(), "/register");
        assert_eq!(
            Route::UserProfile { username: "leo".into() }.to_string(),
            "/profiles/leo"
        );
        assert_eq!(Route::from_str("/feed").ok(), Some(Route::Feed {}));
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let route = Route::from_str("/no/such/page").ok();
        assert!(matches!(route, Some(Route::NotFound { .. })));
    }
}
