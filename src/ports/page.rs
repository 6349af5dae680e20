use crate::render::{ActivityListView, ActivityOption};
use crate::types::form::SignupForm;
use crate::types::notification::Notification;

/// The host page surface: activity list, activity selector, signup form and
/// the shared message area.
pub trait Page {
    /// Replaces the whole list, including every removal control.
    fn render_activities(&self, view: &ActivityListView);
    fn render_load_failure(&self, message: &str);
    /// Replaces every option of the selector, placeholder included.
    fn render_activity_options(&self, options: &[ActivityOption]);
    fn show_notification(&self, notification: &Notification);
    fn hide_notification(&self);
    fn signup_form(&self) -> SignupForm;
    fn reset_signup_form(&self);
}
