mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod dashboard;
pub use dashboard::Dashboard;

mod tasks;
pub use tasks::Tasks;

mod notes;
pub use notes::Notes;

mod profile;
pub use profile::{MyProfile, UserProfile};

mod feed;
pub use feed::Feed;

mod explore;
pub use explore::Explore;

mod not_found;
pub use not_found::NotFound;
