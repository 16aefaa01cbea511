//! Toaster Component
//!
//! Renders active notifications in the top-right corner.

use leptos::prelude::*;

use crate::notify::{use_toasts, ToastKind};

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toaster top-right" role="status" aria-live="polite">
            <For
                each=move || toasts.list()
                // Revision in the key re-renders a keyed toast when it is replaced
                key=|toast| (toast.id.clone(), toast.revision)
                children=move |toast| {
                    let id = toast.id.clone();
                    let icon = match toast.kind {
                        ToastKind::Loading => "⏳",
                        ToastKind::Success => "✓",
                        ToastKind::Error => "⚠",
                    };
                    view! {
                        <div class=toast.kind.css_class()>
                            <span class="toast-icon">{icon}</span>
                            <span class="toast-message">{toast.message}</span>
                            <button class="toast-close" title="Dismiss" on:click=move |_| toasts.close(&id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
