use crate::config::BoardConfig;
use crate::error::ApiError;
use crate::notifier::Notifier;
use crate::ports;
use crate::render;
use crate::render::ActivityListView;
use crate::types::form::RemovalTarget;
use crate::types::notification::Notification;
use crate::types::reply::ApiReply;

const SIGNUP_SUCCESS_FALLBACK: &str = "Signed up successfully";
const SIGNUP_ERROR_FALLBACK: &str = "An error occurred";
const SIGNUP_FAILURE: &str = "Failed to sign up. Please try again.";
const REMOVAL_SUCCESS_FALLBACK: &str = "Participant removed";
const REMOVAL_ERROR_FALLBACK: &str = "Error removing participant";
const REMOVAL_FAILURE: &str = "Failed to remove participant. Please try again.";

/// Something the user or the page lifecycle asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Load,
    SubmitSignup,
    RemoveParticipant(RemovalTarget),
}

/// The activity board controller. It mirrors server state onto a page and
/// never keeps any of it between refreshes.
pub struct Board<A, P, T> {
    api: A,
    page: P,
    notifier: Notifier<T>,
}

impl<A, P, T> Board<A, P, T>
where
    A: ports::ActivityApi,
    P: ports::Page,
    T: ports::TimeProvider,
{
    pub fn new(api: A, page: P, time: T, config: &BoardConfig) -> Self {
        Self {
            api,
            page,
            notifier: Notifier::new(time, config.notification_ttl),
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn into_page(self) -> P {
        self.page
    }

    pub async fn handle(&self, action: Action) {
        match action {
            Action::Load => self.refresh().await,
            Action::SubmitSignup => self.submit_signup().await,
            Action::RemoveParticipant(target) => self.remove_participant(&target).await,
        }
    }

    /// Fetches the catalog and rebuilds the list and the selector from it.
    /// On failure the selector keeps whatever the last successful refresh
    /// produced.
    pub async fn refresh(&self) {
        match self.api.list_activities().await {
            Ok(catalog) => {
                let view = ActivityListView::from_catalog(&catalog);
                self.page.render_activities(&view);
                self.page
                    .render_activity_options(&render::activity_options(&catalog));
                log::debug!("rendered {} activities", catalog.len());
            }
            Err(err) => {
                self.page.render_load_failure(render::LOAD_FAILURE_MESSAGE);
                log::error!("error fetching activities: {err}");
            }
        }
    }

    pub async fn submit_signup(&self) {
        let form = self.page.signup_form();
        let notification = match self.api.sign_up(&form.activity, &form.email).await {
            Ok(reply) if reply.is_success() => {
                let message = reply.message().unwrap_or(SIGNUP_SUCCESS_FALLBACK);
                let ticket = self.notifier.show(&self.page, Notification::success(message));
                self.page.reset_signup_form();
                tokio::join!(self.refresh(), self.notifier.expire(&self.page, ticket));
                return;
            }
            Ok(reply) => Notification::error(
                reply
                    .detail()
                    .unwrap_or_else(|| SIGNUP_ERROR_FALLBACK.to_string()),
            ),
            Err(err) => {
                log::error!(
                    "error signing up {} for {}: {err}",
                    form.email,
                    form.activity
                );
                Notification::error(SIGNUP_FAILURE)
            }
        };
        let ticket = self.notifier.show(&self.page, notification);
        self.notifier.expire(&self.page, ticket).await;
    }

    pub async fn remove_participant(&self, target: &RemovalTarget) {
        let result = self
            .api
            .remove_participant(&target.activity, &target.email)
            .await;
        let notification = match tolerate_undecodable_body(result) {
            Ok(reply) if reply.is_success() => {
                let message = reply.message().unwrap_or(REMOVAL_SUCCESS_FALLBACK);
                let ticket = self.notifier.show(&self.page, Notification::success(message));
                tokio::join!(self.refresh(), self.notifier.expire(&self.page, ticket));
                return;
            }
            Ok(reply) => Notification::error(
                reply
                    .detail()
                    .unwrap_or_else(|| REMOVAL_ERROR_FALLBACK.to_string()),
            ),
            Err(err) => {
                log::error!(
                    "error removing {} from {}: {err}",
                    target.email,
                    target.activity
                );
                Notification::error(REMOVAL_FAILURE)
            }
        };
        let ticket = self.notifier.show(&self.page, notification);
        self.notifier.expire(&self.page, ticket).await;
    }
}

/// Removal responses are judged by status alone when the body is not JSON.
fn tolerate_undecodable_body(result: Result<ApiReply, ApiError>) -> Result<ApiReply, ApiError> {
    match result {
        Err(ApiError::Decode { status, source }) => {
            log::debug!("ignoring undecodable removal body: {source}");
            Ok(ApiReply::empty(status))
        }
        other => other,
    }
}
