//! Forms Dashboard App
//!
//! Root component: provides shared context and picks the page for the
//! current path.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpFormsApi;
use crate::components::Layout;
use crate::config::AppConfig;
use crate::notify::Toasts;
use crate::pages::{FormsList, NotAvailable};
use crate::routes::{current_path, Route};
use crate::store::DashboardState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide context to all children
    provide_context(HttpFormsApi::new(&config));
    provide_context(Toasts::new(config.toast_duration_ms));
    provide_context(Store::new(DashboardState::default()));

    let path = current_path();
    let route = Route::parse(&path);
    log::debug!("[APP] Rendering {} as {:?}", path, route);

    view! {
        <Layout route=route.clone() current_path=path.clone()>
            {match route {
                Route::Dashboard => view! { <FormsList /> }.into_any(),
                _ => view! { <NotAvailable path=path /> }.into_any(),
            }}
        </Layout>
    }
}
