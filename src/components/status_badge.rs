use leptos::prelude::*;

use crate::models::FormStatus;

/// Green pill for published forms, amber for drafts
#[component]
pub fn StatusBadge(status: FormStatus) -> impl IntoView {
    let class = match status {
        FormStatus::Published => "status-badge status-published",
        FormStatus::Draft => "status-badge status-draft",
    };
    view! { <span class=class>{status.as_str()}</span> }
}
