pub mod activity;
pub mod form;
pub mod notification;
pub mod reply;

pub use activity::{Activity, ActivityCatalog};
pub use form::{RemovalTarget, SignupForm};
pub use notification::{Notification, Severity};
pub use reply::{ApiReply, ReplyBody};
