//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The local
//! form list is only changed after the server confirmed an operation.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Form, FormId};

/// Lifecycle of the forms fetch
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadPhase {
    #[default]
    Loading,
    Failed(String),
    Ready,
}

/// A confirmation dialog request for a specific form
#[derive(Clone, Debug, PartialEq)]
pub enum PendingAction {
    Duplicate(Form),
    Delete(Form),
}

/// Forms dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Local copy of the server's form list, in server order
    pub forms: Vec<Form>,
    pub phase: LoadPhase,
    /// Row whose action menu is open (at most one)
    pub open_menu: Option<FormId>,
    /// Target of the open duplicate confirmation, if any
    pub duplicate_dialog: Option<Form>,
    /// Target of the open delete confirmation, if any
    pub delete_dialog: Option<Form>,
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

/// What the forms view should render
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState {
    Loading,
    Error(String),
    /// Loaded, but there are no forms yet
    Empty,
    Ready,
}

pub fn view_state(phase: &LoadPhase, form_count: usize) -> ViewState {
    match phase {
        LoadPhase::Loading => ViewState::Loading,
        LoadPhase::Failed(message) => ViewState::Error(message.clone()),
        LoadPhase::Ready if form_count == 0 => ViewState::Empty,
        LoadPhase::Ready => ViewState::Ready,
    }
}

/// Menu state after the user toggles `id`'s menu
pub fn toggled_menu(current: Option<FormId>, id: &FormId) -> Option<FormId> {
    match current {
        Some(open) if open == *id => None,
        _ => Some(id.clone()),
    }
}

/// Insert a server-created form at the top of the list
pub fn prepend_form(forms: &mut Vec<Form>, form: Form) {
    forms.insert(0, form);
}

/// Remove the form with this id, wherever it sits
pub fn remove_form(forms: &mut Vec<Form>, id: &FormId) {
    forms.retain(|form| form.id != *id);
}

// ========================
// Store Helper Functions
// ========================

pub fn store_begin_load(store: &DashboardStore) {
    store.phase().set(LoadPhase::Loading);
}

pub fn store_load_succeeded(store: &DashboardStore, forms: Vec<Form>) {
    store.forms().set(forms);
    store.phase().set(LoadPhase::Ready);
}

/// Previously loaded forms are kept
pub fn store_load_failed(store: &DashboardStore, message: String) {
    store.phase().set(LoadPhase::Failed(message));
}

pub fn store_prepend_form(store: &DashboardStore, form: Form) {
    prepend_form(&mut store.forms().write(), form);
}

pub fn store_remove_form(store: &DashboardStore, id: &FormId) {
    remove_form(&mut store.forms().write(), id);
}

pub fn store_toggle_menu(store: &DashboardStore, id: &FormId) {
    store.open_menu().update(|open| *open = toggled_menu(open.take(), id));
}

pub fn store_close_menu(store: &DashboardStore) {
    if store.open_menu().get_untracked().is_some() {
        store.open_menu().set(None);
    }
}

/// Open the confirmation dialog for `action`, closing any action menu
pub fn store_request(store: &DashboardStore, action: PendingAction) {
    store_close_menu(store);
    match action {
        PendingAction::Duplicate(form) => store.duplicate_dialog().set(Some(form)),
        PendingAction::Delete(form) => store.delete_dialog().set(Some(form)),
    }
}

/// Close the duplicate dialog, returning its target if it was open
pub fn store_take_duplicate(store: &DashboardStore) -> Option<Form> {
    store.duplicate_dialog().try_update(Option::take).flatten()
}

/// Close the delete dialog, returning its target if it was open
pub fn store_take_delete(store: &DashboardStore) -> Option<Form> {
    store.delete_dialog().try_update(Option::take).flatten()
}
