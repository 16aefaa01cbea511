use leptos::prelude::*;

use crate::routes::Route;

/// Shown for routes served by pages outside the dashboard
#[component]
pub fn NotAvailable(path: String) -> impl IntoView {
    view! {
        <div class="modern-card not-available">
            <h3>"Page not available"</h3>
            <p>{format!("{} is not part of the forms dashboard.", path)}</p>
            <a class="btn-gradient" href=Route::Dashboard.href()>"Back to Dashboard"</a>
        </div>
    }
}
