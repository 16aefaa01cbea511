//! Forms Dashboard Page
//!
//! Lists every form and drives duplicate/delete through confirmation
//! dialogs. Local state changes only after the server confirmed a call.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::api::use_forms_api;
use crate::components::{ConfirmColor, ConfirmModal, DashboardSkeleton, FormCards, FormsTable};
use crate::notify::use_toasts;
use crate::routes::Route;
use crate::store::{
    store_close_menu, store_take_delete, store_take_duplicate, use_dashboard_store, view_state,
    DashboardStateStoreFields, ViewState,
};

#[component]
fn LoadError(message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="modern-card load-error">
            <div class="load-error-icon">"⚠"</div>
            <div>
                <h3 class="load-error-title">"Unable to load forms"</h3>
                <div class="load-error-message">{message}</div>
                <button class="btn-gradient" on:click=move |_| on_retry.run(())>
                    "Try Again"
                </button>
            </div>
        </div>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="modern-card empty-state">
            <div class="empty-state-icon">"📄"</div>
            <h3>"No forms created yet"</h3>
            <p>"Get started by creating your first form to collect responses and manage submissions."</p>
            <a class="btn-gradient" href=Route::NewForm.href()>
                "＋ Create Your First Form"
            </a>
        </div>
    }
}

#[component]
fn DashboardHeader() -> impl IntoView {
    let store = use_dashboard_store();

    view! {
        <div class="dashboard-header">
            <div>
                <h1>"Forms Dashboard"</h1>
                <p class="dashboard-subtitle">"Manage and track your form submissions"</p>
                <div class="dashboard-stats">
                    <span class="stat">
                        <span class="status-dot status-active"></span>
                        {move || format!("{} Total Forms", store.forms().with(Vec::len))}
                    </span>
                    <span class="stat">
                        <span class="status-dot"></span>
                        "Live Dashboard"
                    </span>
                </div>
            </div>
            <a class="btn-gradient" href=Route::NewForm.href()>
                "＋ Create Form"
            </a>
        </div>
    }
}

/// Forms collection view
#[component]
pub fn FormsList() -> impl IntoView {
    let store = use_dashboard_store();
    let toasts = use_toasts();
    let api = use_forms_api();

    let load = Callback::new({
        let api = api.clone();
        move |_: ()| {
            let api = api.clone();
            spawn_local(async move { actions::load_into_store(&store, &api, &toasts).await });
        }
    });

    // Load once on mount
    Effect::new(move |_| load.run(()));

    // Any click that reaches the window closes the open action menu
    let outside_click = window_event_listener(leptos::ev::click, move |_| store_close_menu(&store));
    on_cleanup(move || outside_click.remove());

    // The target is taken before the dialog closes, so a second confirm is a no-op
    let confirm_duplicate = Callback::new({
        let api = api.clone();
        move |_: ()| {
            let Some(form) = store_take_duplicate(&store) else { return };
            let api = api.clone();
            spawn_local(async move { actions::duplicate_into_store(&store, &api, &toasts, &form).await });
        }
    });

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(form) = store_take_delete(&store) else { return };
        let api = api.clone();
        spawn_local(async move { actions::delete_from_store(&store, &api, &toasts, &form).await });
    });

    let state = Memo::new(move |_| view_state(&store.phase().get(), store.forms().with(Vec::len)));
    let forms = Signal::derive(move || store.forms().get());

    let delete_message = Signal::derive(move || {
        let title = store.delete_dialog().with(|f| f.as_ref().map(|f| f.title.clone())).unwrap_or_default();
        format!(
            "Are you sure you want to delete \"{}\" and all its submissions? This action cannot be undone.",
            title
        )
    });
    let duplicate_message = Signal::derive(move || {
        let title = store.duplicate_dialog().with(|f| f.as_ref().map(|f| f.title.clone())).unwrap_or_default();
        format!("Do you want to create a copy of \"{}\"?", title)
    });

    view! {
        <div class="dashboard">
            {move || match state.get() {
                ViewState::Loading => view! { <DashboardSkeleton /> }.into_any(),
                ViewState::Error(message) => view! { <LoadError message=message on_retry=load /> }.into_any(),
                ViewState::Empty => view! {
                    <DashboardHeader />
                    <EmptyState />
                }.into_any(),
                ViewState::Ready => view! {
                    <DashboardHeader />
                    <FormsTable forms=forms />
                    <FormCards forms=forms />
                }.into_any(),
            }}

            <ConfirmModal
                is_open=Signal::derive(move || store.delete_dialog().with(Option::is_some))
                on_close=move |_: ()| { store_take_delete(&store); }
                on_confirm=confirm_delete
                title="Delete Form"
                message=delete_message
                confirm_text="Delete"
                confirm_color=ConfirmColor::Red
            />

            <ConfirmModal
                is_open=Signal::derive(move || store.duplicate_dialog().with(Option::is_some))
                on_close=move |_: ()| { store_take_duplicate(&store); }
                on_confirm=confirm_duplicate
                title="Duplicate Form"
                message=duplicate_message
                confirm_text="Duplicate"
                confirm_color=ConfirmColor::Blue
            />
        </div>
    }
}
