//! Bootstrap building blocks shared by the pages and widgets.

mod alert;
pub use alert::{Alert, AlertKind};

mod modal;
pub use modal::{ConfirmModal, Modal};

mod spinner;
pub use spinner::Spinner;

mod toast;
pub use toast::Toast;
