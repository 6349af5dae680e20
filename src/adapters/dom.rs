use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, HtmlOptionElement, HtmlSelectElement};

use crate::error::DomError;
use crate::ports;
use crate::render;
use crate::render::{ActivityListView, ActivityOption};
use crate::types::form::SignupForm;
use crate::types::notification::Notification;

pub const ACTIVITIES_LIST_ID: &str = "activities-list";
pub const ACTIVITY_SELECT_ID: &str = "activity";
pub const SIGNUP_FORM_ID: &str = "signup-form";
pub const EMAIL_INPUT_ID: &str = "email";
pub const MESSAGE_ID: &str = "message";

const HIDDEN_CLASS: &str = "hidden";

/// The host page elements the board reads and writes. They must exist before
/// the board starts.
#[derive(Debug, Clone)]
pub struct DomPage {
    document: Document,
    activities_list: Element,
    activity_select: HtmlSelectElement,
    signup_form: HtmlFormElement,
    email_input: HtmlInputElement,
    message: Element,
}

impl DomPage {
    pub fn from_document(document: &Document) -> Result<Self, DomError> {
        Ok(Self {
            document: document.clone(),
            activities_list: element_by_id(document, ACTIVITIES_LIST_ID, "element")?,
            activity_select: element_by_id(document, ACTIVITY_SELECT_ID, "select")?,
            signup_form: element_by_id(document, SIGNUP_FORM_ID, "form")?,
            email_input: element_by_id(document, EMAIL_INPUT_ID, "input")?,
            message: element_by_id(document, MESSAGE_ID, "element")?,
        })
    }

    pub fn activities_list(&self) -> &Element {
        &self.activities_list
    }

    pub fn form_element(&self) -> &HtmlFormElement {
        &self.signup_form
    }
}

fn element_by_id<T: JsCast>(
    document: &Document,
    id: &'static str,
    expected: &'static str,
) -> Result<T, DomError> {
    document
        .get_element_by_id(id)
        .ok_or(DomError::MissingElement(id))?
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongElement { id, expected })
}

impl ports::Page for DomPage {
    fn render_activities(&self, view: &ActivityListView) {
        match render::render_html(view) {
            Ok(html) => self.activities_list.set_inner_html(&html),
            Err(err) => {
                log::error!("failed to render activities: {err}");
                self.render_load_failure(render::LOAD_FAILURE_MESSAGE);
            }
        }
    }

    fn render_load_failure(&self, message: &str) {
        self.activities_list.set_inner_html("");
        match self.document.create_element("p") {
            Ok(paragraph) => {
                paragraph.set_text_content(Some(message));
                if self.activities_list.append_child(&paragraph).is_err() {
                    log::error!("failed to insert load failure message");
                }
            }
            Err(_) => log::error!("failed to create load failure message"),
        }
    }

    fn render_activity_options(&self, options: &[ActivityOption]) {
        self.activity_select.set_inner_html("");
        for option in options {
            let element = match HtmlOptionElement::new_with_text_and_value(&option.label, &option.value) {
                Ok(element) => element,
                Err(_) => {
                    log::error!("failed to create option for '{}'", option.value);
                    continue;
                }
            };
            if self.activity_select.append_child(&element).is_err() {
                log::error!("failed to insert option for '{}'", option.value);
            }
        }
    }

    fn show_notification(&self, notification: &Notification) {
        self.message.set_text_content(Some(&notification.message));
        self.message
            .set_class_name(notification.severity.class_name());
        if self.message.class_list().remove_1(HIDDEN_CLASS).is_err() {
            log::warn!("failed to reveal message area");
        }
    }

    fn hide_notification(&self) {
        if self.message.class_list().add_1(HIDDEN_CLASS).is_err() {
            log::warn!("failed to hide message area");
        }
    }

    fn signup_form(&self) -> SignupForm {
        SignupForm {
            email: self.email_input.value(),
            activity: self.activity_select.value(),
        }
    }

    fn reset_signup_form(&self) {
        self.signup_form.reset();
    }
}
