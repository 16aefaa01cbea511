//! Notifications
//!
//! Transient toast messages. A toast shown with a key replaces any toast
//! already holding that key, which is how a "loading" message turns into
//! its final outcome.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Loading,
    Success,
    Error,
}

impl ToastKind {
    /// Loading toasts stay until replaced
    pub fn auto_dismiss(&self) -> bool {
        !matches!(self, ToastKind::Loading)
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Loading => "toast toast-loading",
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ToastId {
    Keyed(String),
    Auto(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    /// Bumped every time a keyed toast is replaced
    pub revision: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Ordered toast list, oldest first
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next: u64,
}

impl ToastQueue {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Show a toast, replacing the toast with the same key in place.
    /// Returns the id and revision to dismiss it with.
    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>, key: Option<&str>) -> (ToastId, u64) {
        self.next += 1;
        let revision = self.next;
        let message = message.into();

        let id = match key {
            Some(key) => ToastId::Keyed(key.to_string()),
            None => ToastId::Auto(revision),
        };

        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(existing) => {
                existing.kind = kind;
                existing.message = message;
                existing.revision = revision;
            }
            None => self.toasts.push(Toast { id: id.clone(), revision, kind, message }),
        }
        (id, revision)
    }

    /// Remove a toast if it still has the given revision
    pub fn dismiss(&mut self, id: &ToastId, revision: u64) {
        self.toasts.retain(|t| !(t.id == *id && t.revision == revision));
    }

    /// Remove a toast regardless of revision
    pub fn remove(&mut self, id: &ToastId) {
        self.toasts.retain(|t| t.id != *id);
    }
}

/// Sink for user-visible operation feedback
pub trait Notify {
    fn loading(&self, key: &str, message: &str);
    fn success(&self, key: &str, message: &str);
    fn error(&self, key: Option<&str>, message: &str);
}

/// Reactive toast handle provided via context
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<ToastQueue>,
    duration_ms: u32,
}

impl Toasts {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            duration_ms,
        }
    }

    pub fn list(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }

    pub fn close(&self, id: &ToastId) {
        self.queue.update(|q| q.remove(id));
    }

    fn push(&self, kind: ToastKind, message: &str, key: Option<&str>) {
        let Some((id, revision)) = self.queue.try_update(|q| q.show(kind, message, key)) else {
            return;
        };
        if kind.auto_dismiss() {
            let queue = self.queue;
            Timeout::new(self.duration_ms, move || {
                queue.try_update(|q| q.dismiss(&id, revision));
            })
            .forget();
        }
    }
}

impl Notify for Toasts {
    fn loading(&self, key: &str, message: &str) {
        self.push(ToastKind::Loading, message, Some(key));
    }

    fn success(&self, key: &str, message: &str) {
        self.push(ToastKind::Success, message, Some(key));
    }

    fn error(&self, key: Option<&str>, message: &str) {
        self.push(ToastKind::Error, message, key);
    }
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}
