//! Routes
//!
//! Paths the dashboard links to. Pages other than the dashboard live
//! outside this crate; only their addresses are known here.

use percent_encoding::{percent_decode_str, utf8_percent_encode};

use crate::api::PATH_SEGMENT;
use crate::models::FormId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    NewForm,
    Edit(FormId),
    Preview(FormId),
    Settings(FormId),
    Analytics(FormId),
    /// Public respondent view of a form
    Render(FormId),
    Submissions(FormId),
    SubmissionDetail(FormId, String),
    NotFound,
}

fn encode(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

fn decode(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

fn id(segment: &str) -> FormId {
    FormId(decode(segment))
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Dashboard,
            ["forms", "new"] => Route::NewForm,
            ["forms", form] => Route::Render(id(form)),
            ["forms", form, "edit"] => Route::Edit(id(form)),
            ["forms", form, "preview"] => Route::Preview(id(form)),
            ["forms", form, "settings"] => Route::Settings(id(form)),
            ["forms", form, "analytics"] => Route::Analytics(id(form)),
            ["forms", form, "submissions"] => Route::Submissions(id(form)),
            ["forms", form, "submissions", sub] => Route::SubmissionDetail(id(form), decode(sub)),
            _ => Route::NotFound,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::Dashboard | Route::NotFound => "/".to_string(),
            Route::NewForm => "/forms/new".to_string(),
            Route::Edit(id) => format!("/forms/{}/edit", encode(id.as_str())),
            Route::Preview(id) => format!("/forms/{}/preview", encode(id.as_str())),
            Route::Settings(id) => format!("/forms/{}/settings", encode(id.as_str())),
            Route::Analytics(id) => format!("/forms/{}/analytics", encode(id.as_str())),
            Route::Render(id) => format!("/forms/{}", encode(id.as_str())),
            Route::Submissions(id) => format!("/forms/{}/submissions", encode(id.as_str())),
            Route::SubmissionDetail(id, sub) => {
                format!("/forms/{}/submissions/{}", encode(id.as_str()), encode(sub))
            }
        }
    }

    /// Public form pages render without the dashboard shell
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Render(_))
    }
}

/// Sidebar highlighting: `/` matches exactly, others by prefix
pub fn is_nav_active(nav_path: &str, current: &str) -> bool {
    if nav_path == "/" {
        current == "/"
    } else {
        current.starts_with(nav_path)
    }
}

/// Current browser path
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}
