use std::cell::RefCell;
use std::io::Write;

use crate::ports;
use crate::render;
use crate::render::{ActivityListView, ActivityOption};
use crate::types::form::{RemovalTarget, SignupForm};
use crate::types::notification::Notification;

/// Printed when the message area goes back to hidden.
pub const HIDDEN_NOTICE: &str = "[message hidden]";

/// A terminal rendition of the host page. It writes every page change to
/// `out` and keeps the current list, selector and form so commands can act on
/// them the way clicks would.
pub struct ConsolePage<W> {
    out: RefCell<W>,
    view: RefCell<Option<ActivityListView>>,
    options: RefCell<Vec<ActivityOption>>,
    form: RefCell<SignupForm>,
    notification: RefCell<Option<Notification>>,
}

impl<W: Write> ConsolePage<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
            view: RefCell::new(None),
            options: RefCell::new(vec![ActivityOption::placeholder()]),
            form: RefCell::new(SignupForm::default()),
            notification: RefCell::new(None),
        }
    }

    /// Fills the signup form. Returns `false` when the activity is not one of
    /// the selector's options, as a select element would refuse the value.
    pub fn fill_signup_form(&self, email: &str, activity: &str) -> bool {
        let known = self
            .options
            .borrow()
            .iter()
            .any(|option| !option.is_placeholder() && option.value == activity);
        if !known {
            return false;
        }
        *self.form.borrow_mut() = SignupForm {
            email: email.to_string(),
            activity: activity.to_string(),
        };
        true
    }

    /// The removal control rendered for this participant, if the current list
    /// has one.
    pub fn removal_control(&self, activity: &str, email: &str) -> Option<RemovalTarget> {
        self.view
            .borrow()
            .as_ref()?
            .find_removal(activity, email)
            .cloned()
    }

    pub fn options(&self) -> Vec<ActivityOption> {
        self.options.borrow().clone()
    }

    pub fn notification(&self) -> Option<Notification> {
        self.notification.borrow().clone()
    }

    /// Writes a line that is not part of the page, such as command errors.
    pub fn print_line(&self, line: &str) {
        self.write(&format!("{line}\n"));
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn write(&self, text: &str) {
        let mut out = self.out.borrow_mut();
        if let Err(err) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
            log::warn!("failed to write to console: {err}");
        }
    }
}

impl<W: Write> ports::Page for ConsolePage<W> {
    fn render_activities(&self, view: &ActivityListView) {
        match render::render_text(view) {
            Ok(text) => {
                self.write(&text);
                *self.view.borrow_mut() = Some(view.clone());
            }
            Err(err) => {
                log::error!("failed to render activities: {err}");
                self.render_load_failure(render::LOAD_FAILURE_MESSAGE);
            }
        }
    }

    fn render_load_failure(&self, message: &str) {
        *self.view.borrow_mut() = None;
        self.write(&format!("{message}\n"));
    }

    fn render_activity_options(&self, options: &[ActivityOption]) {
        *self.options.borrow_mut() = options.to_vec();
        let names: Vec<&str> = options
            .iter()
            .filter(|option| !option.is_placeholder())
            .map(|option| option.label.as_str())
            .collect();
        self.write(&format!("Activities: {}\n", names.join(", ")));
    }

    fn show_notification(&self, notification: &Notification) {
        *self.notification.borrow_mut() = Some(notification.clone());
        self.write(&format!(
            "[{}] {}\n",
            notification.severity.label(),
            notification.message
        ));
    }

    fn hide_notification(&self) {
        if self.notification.borrow_mut().take().is_some() {
            self.write(&format!("{HIDDEN_NOTICE}\n"));
        }
    }

    fn signup_form(&self) -> SignupForm {
        self.form.borrow().clone()
    }

    fn reset_signup_form(&self) {
        *self.form.borrow_mut() = SignupForm::default();
    }
}
