//! Forms API Client
//!
//! Bindings to the forms REST service, organized by resource.
//! `FormsApi` is the seam the dashboard talks through; `HttpFormsApi`
//! is the fetch-backed implementation.

mod forms;

use async_trait::async_trait;
use leptos::prelude::*;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Form, FormId};

/// Characters left intact when an id is placed in a path segment
pub(crate) const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Operations the dashboard needs from the forms service
#[async_trait(?Send)]
pub trait FormsApi {
    /// `GET /forms`
    async fn list_forms(&self) -> ApiResult<Vec<Form>>;

    /// `POST /forms/{id}/duplicate`, returns the new copy
    async fn duplicate_form(&self, id: &FormId) -> ApiResult<Form>;

    /// `DELETE /forms/{id}`
    async fn delete_form(&self, id: &FormId) -> ApiResult<()>;
}

/// HTTP client for the forms service
#[derive(Clone, Debug)]
pub struct HttpFormsApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFormsApi {
    /// Client for the configured API; relative bases resolve against the page origin
    pub fn new(config: &AppConfig) -> Self {
        let base = &config.api_base_url;
        let base_url = if is_absolute(base) {
            base.clone()
        } else {
            let origin = web_sys::window()
                .and_then(|win| win.location().origin().ok())
                .unwrap_or_default();
            resolve_base_url(base, &origin)
        };
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Join the base URL with path segments, escaping each segment
    pub(crate) fn endpoint(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in segments {
            url.push('/');
            url.extend(utf8_percent_encode(segment, PATH_SEGMENT));
        }
        url
    }

    async fn send(&self, method: Method, segments: &[&str]) -> ApiResult<Response> {
        let url = self.endpoint(segments);
        log::debug!("[API] {} {}", method, url);

        let response = self.client.request(method.clone(), &url).send().await.map_err(|e| {
            log::warn!("[API] {} {} failed: {}", method, url, e);
            ApiError::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Error bodies are best-effort; a failed read still yields the status
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::Status {
            status: status.as_u16(),
            message: error_message(status.as_u16(), &body),
        };
        log::warn!("[API] {} {} -> {}: {}", method, url, status.as_u16(), err);
        Err(err)
    }

    async fn send_json<T: DeserializeOwned>(&self, method: Method, segments: &[&str]) -> ApiResult<T> {
        let response = self.send(method, segments).await?;
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Get the API client from context
pub fn use_forms_api() -> HttpFormsApi {
    expect_context::<HttpFormsApi>()
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Prefix a path-only base URL with the page origin
pub(crate) fn resolve_base_url(base: &str, origin: &str) -> String {
    if is_absolute(base) {
        return base.to_string();
    }
    let origin = origin.trim_end_matches('/');
    if base.is_empty() {
        origin.to_string()
    } else if base.starts_with('/') {
        format!("{}{}", origin, base)
    } else {
        format!("{}/{}", origin, base)
    }
}

/// Extract a readable message from an error response body
pub(crate) fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error"]
                .iter()
                .find_map(|key| value.get(*key).and_then(|v| v.as_str()).map(str::to_string))
        })
        .filter(|msg| !msg.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed with status code {}", status))
}
