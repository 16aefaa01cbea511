//! Action Menu Component
//!
//! Per-card "more actions" dropdown for the compact layout. Only one
//! menu is open at a time; the open row lives in the dashboard store.

use leptos::prelude::*;

use crate::models::Form;
use crate::routes::Route;
use crate::store::{
    store_close_menu, store_request, store_toggle_menu, use_dashboard_store, DashboardStateStoreFields,
    PendingAction,
};

#[component]
pub fn ActionMenu(form: Form) -> impl IntoView {
    let store = use_dashboard_store();
    let id = form.id.clone();

    let is_open = {
        let id = id.clone();
        move || store.open_menu().get().as_ref() == Some(&id)
    };

    let on_toggle = {
        let id = id.clone();
        move |ev: web_sys::MouseEvent| {
            // Keep the outside-click listener from closing what we just opened
            ev.stop_propagation();
            store_toggle_menu(&store, &id);
        }
    };

    let links = [
        (Route::Edit(id.clone()), "✎", "Edit Form", "menu-icon indigo"),
        (Route::Preview(id.clone()), "👁", "Preview", "menu-icon emerald"),
        (Route::Analytics(id.clone()), "📊", "Analytics", "menu-icon purple"),
        (Route::Settings(id.clone()), "⚙", "Settings", "menu-icon slate"),
    ];

    view! {
        <div class="action-menu">
            <button class="action-menu-toggle" title="More actions" on:click=on_toggle>
                "⋮"
            </button>
            <Show when=is_open>
                <div class="action-menu-dropdown">
                    {links.clone().into_iter().map(|(route, icon, label, icon_class)| view! {
                        <a class="action-menu-item" href=route.href() on:click=move |_| store_close_menu(&store)>
                            <span class=icon_class>{icon}</span>
                            {label}
                        </a>
                    }).collect_view()}
                    <div class="action-menu-divider"></div>
                    <button
                        class="action-menu-item"
                        on:click={
                            let form = form.clone();
                            move |_| store_request(&store, PendingAction::Duplicate(form.clone()))
                        }
                    >
                        <span class="menu-icon slate">"⧉"</span>
                        "Duplicate"
                    </button>
                    <button
                        class="action-menu-item danger"
                        on:click={
                            let form = form.clone();
                            move |_| store_request(&store, PendingAction::Delete(form.clone()))
                        }
                    >
                        <span class="menu-icon">"🗑"</span>
                        "Delete"
                    </button>
                </div>
            </Show>
        </div>
    }
}
