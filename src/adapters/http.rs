use std::pin::Pin;

use reqwest::Method;
use reqwest::Url;

use crate::config::BoardConfig;
use crate::error::ApiError;
use crate::ports;
use crate::types::activity::ActivityCatalog;
use crate::types::reply::{ApiReply, ReplyBody};

/// `ActivityApi` over HTTP. Works natively and, through reqwest's fetch
/// backend, in the browser.
#[derive(Debug, Clone)]
pub struct HttpActivityApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpActivityApi {
    pub fn new(config: &BoardConfig) -> Result<Self, ApiError> {
        let invalid = |reason: String| ApiError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason,
        };
        let base_url = Url::parse(config.base_url.trim()).map_err(|err| invalid(err.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("url cannot be used as a base".to_string()));
        }

        #[allow(unused_mut)]
        let mut builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends percent-encoded path segments to the base url and, when given,
    /// the `email` query parameter.
    pub fn endpoint(&self, segments: &[&str], email: Option<&str>) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "url cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        if let Some(email) = email {
            url.query_pairs_mut().append_pair("email", email);
        }
        Ok(url)
    }

    async fn fetch_catalog(&self) -> Result<ActivityCatalog, ApiError> {
        let url = self.endpoint(&["activities"], None)?;
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        if !response.status().is_success() {
            return Err(ApiError::Status { status });
        }
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode { status, source })
    }

    async fn send_reply(
        &self,
        method: Method,
        segments: &[&str],
        email: &str,
    ) -> Result<ApiReply, ApiError> {
        let url = self.endpoint(segments, Some(email))?;
        log::debug!("{method} {url}");
        let response = self.client.request(method, url).send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        let body: ReplyBody =
            serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode { status, source })?;
        Ok(ApiReply::new(status, body))
    }
}

impl ports::ActivityApi for HttpActivityApi {
    type ListFut<'a>
        = Pin<Box<dyn Future<Output = Result<ActivityCatalog, ApiError>> + 'a>>
    where
        Self: 'a;
    type ReplyFut<'a>
        = Pin<Box<dyn Future<Output = Result<ApiReply, ApiError>> + 'a>>
    where
        Self: 'a;

    fn list_activities(&self) -> Self::ListFut<'_> {
        Box::pin(self.fetch_catalog())
    }

    fn sign_up<'a>(&'a self, activity: &'a str, email: &'a str) -> Self::ReplyFut<'a> {
        Box::pin(async move {
            self.send_reply(Method::POST, &["activities", activity, "signup"], email)
                .await
        })
    }

    fn remove_participant<'a>(&'a self, activity: &'a str, email: &'a str) -> Self::ReplyFut<'a> {
        Box::pin(async move {
            self.send_reply(
                Method::DELETE,
                &["activities", activity, "participants"],
                email,
            )
            .await
        })
    }
}
