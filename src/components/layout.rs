//! Layout Shell
//!
//! Sidebar navigation plus the centered content card. Public form pages
//! skip the shell entirely.

use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::components::Toaster;
use crate::routes::{is_nav_active, Route};

const NAV_ITEMS: &[(&str, &str, &str)] = &[
    ("/", "Dashboard", "🏠"),
    ("/forms/new", "New Form", "＋"),
];

#[component]
fn Sidebar(
    current_path: String,
    is_open: ReadSignal<bool>,
    set_is_open: WriteSignal<bool>,
) -> impl IntoView {
    let close = move |_: web_sys::MouseEvent| set_is_open.set(false);
    let year = Utc::now().year();

    view! {
        <Show when=move || is_open.get()>
            <div class="sidebar-overlay" on:click=close></div>
        </Show>

        <aside class=move || if is_open.get() { "sidebar open" } else { "sidebar" }>
            <div class="sidebar-header">
                <div class="sidebar-brand">
                    <div class="sidebar-logo">"📄"</div>
                    <div>
                        <div class="sidebar-title">"Form Builder"</div>
                        <div class="sidebar-subtitle">"Professional Dashboard"</div>
                    </div>
                </div>
                <button class="sidebar-close" on:click=close>"×"</button>
            </div>

            <nav class="sidebar-nav">
                {NAV_ITEMS.iter().map(|(path, label, icon)| {
                    let class = if is_nav_active(path, &current_path) { "nav-item active" } else { "nav-item" };
                    view! {
                        <a class=class href=*path on:click=close>
                            <span class="nav-icon">{*icon}</span>
                            <span>{*label}</span>
                        </a>
                    }
                }).collect_view()}
            </nav>

            <div class="sidebar-footer">{format!("© {} Form Builder Pro", year)}</div>
        </aside>
    }
}

#[component]
pub fn Layout(route: Route, current_path: String, children: Children) -> impl IntoView {
    if route.is_public() {
        return view! { <div class="public-page">{children()}</div> }.into_any();
    }

    let (sidebar_open, set_sidebar_open) = signal(false);

    view! {
        <div class="app-layout">
            <Sidebar current_path=current_path is_open=sidebar_open set_is_open=set_sidebar_open />
            <main class="main-content">
                <button class="sidebar-toggle" title="Menu" on:click=move |_| set_sidebar_open.set(true)>
                    "☰"
                </button>
                <div class="content-card">{children()}</div>
            </main>
            <Toaster />
        </div>
    }
    .into_any()
}
