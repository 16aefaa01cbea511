//! Form Actions
//!
//! The server round trips behind the dashboard: load, duplicate, delete.
//! Each reports its outcome through `Notify`; callers apply a successful
//! result to local state only after the server confirmed it.

use crate::api::FormsApi;
use crate::error::ApiResult;
use crate::models::Form;
use crate::notify::Notify;
use crate::store::{
    store_begin_load, store_load_failed, store_load_succeeded, store_prepend_form, store_remove_form,
    DashboardStore,
};

pub const DUPLICATE_KEY: &str = "duplicate";
pub const DELETE_KEY: &str = "delete";

/// Fetch all forms. Failures are also announced as a toast.
pub async fn load_forms<A, N>(api: &A, notify: &N) -> ApiResult<Vec<Form>>
where
    A: FormsApi + ?Sized,
    N: Notify + ?Sized,
{
    match api.list_forms().await {
        Ok(forms) => {
            log::info!("[FORMS] Loaded {} forms", forms.len());
            Ok(forms)
        }
        Err(e) => {
            match e.status() {
                Some(status) => log::error!("[FORMS] Load failed with HTTP {}: {}", status, e),
                None => log::error!("[FORMS] Load failed: {}", e),
            }
            notify.error(None, &format!("Failed to load forms: {}", e.message()));
            Err(e)
        }
    }
}

/// Duplicate `form`, returning the server's copy
pub async fn duplicate_form<A, N>(api: &A, notify: &N, form: &Form) -> ApiResult<Form>
where
    A: FormsApi + ?Sized,
    N: Notify + ?Sized,
{
    notify.loading(DUPLICATE_KEY, "Duplicating form...");
    match api.duplicate_form(&form.id).await {
        Ok(copy) => {
            log::info!("[FORMS] Duplicated {} as {}", form.id, copy.id);
            notify.success(DUPLICATE_KEY, &format!("\"{}\" duplicated successfully!", form.title));
            Ok(copy)
        }
        Err(e) => {
            log::warn!("[FORMS] Duplicate of {} failed: {}", form.id, e);
            notify.error(Some(DUPLICATE_KEY), &format!("Failed to duplicate form: {}", e.message()));
            Err(e)
        }
    }
}

/// Delete `form` on the server
pub async fn delete_form<A, N>(api: &A, notify: &N, form: &Form) -> ApiResult<()>
where
    A: FormsApi + ?Sized,
    N: Notify + ?Sized,
{
    notify.loading(DELETE_KEY, "Deleting form...");
    match api.delete_form(&form.id).await {
        Ok(()) => {
            log::info!("[FORMS] Deleted {}", form.id);
            notify.success(DELETE_KEY, &format!("\"{}\" deleted successfully!", form.title));
            Ok(())
        }
        Err(e) => {
            log::warn!("[FORMS] Delete of {} failed: {}", form.id, e);
            notify.error(Some(DELETE_KEY), &format!("Failed to delete form: {}", e.message()));
            Err(e)
        }
    }
}

// ========================
// Store-backed flows
// ========================

/// Fetch the collection into the store, switching the view through loading
pub async fn load_into_store<A, N>(store: &DashboardStore, api: &A, notify: &N)
where
    A: FormsApi + ?Sized,
    N: Notify + ?Sized,
{
    store_begin_load(store);
    match load_forms(api, notify).await {
        Ok(forms) => store_load_succeeded(store, forms),
        Err(e) => store_load_failed(store, e.message()),
    }
}

/// Duplicate a confirmed target; the copy goes first once the server returns it
pub async fn duplicate_into_store<A, N>(store: &DashboardStore, api: &A, notify: &N, form: &Form)
where
    A: FormsApi + ?Sized,
    N: Notify + ?Sized,
{
    if let Ok(copy) = duplicate_form(api, notify, form).await {
        store_prepend_form(store, copy);
    }
}

/// Delete a confirmed target; the entry is dropped once the server accepts
pub async fn delete_from_store<A, N>(store: &DashboardStore, api: &A, notify: &N, form: &Form)
where
    A: FormsApi + ?Sized,
    N: Notify + ?Sized,
{
    if delete_form(api, notify, form).await.is_ok() {
        store_remove_form(store, &form.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::{make_form, FormId};
    use crate::store::{
        prepend_form, remove_form, store_request, store_take_delete, store_take_duplicate, view_state,
        DashboardState, DashboardStateStoreFields, LoadPhase, PendingAction, ViewState,
    };
    use async_trait::async_trait;
    use leptos::prelude::*;
    use crate::notify::Notify;
    use reactive_stores::Store;
    use std::cell::RefCell;

    /// In-memory forms service that records every call
    #[derive(Default)]
    struct FakeApi {
        forms: Vec<Form>,
        fail_with: Option<ApiError>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeApi {
        fn with_forms(forms: Vec<Form>) -> Self {
            Self { forms, ..Default::default() }
        }

        fn failing(message: &str) -> Self {
            Self { fail_with: Some(ApiError::Network(message.to_string())), ..Default::default() }
        }

        fn check(&self, call: String) -> ApiResult<()> {
            self.calls.borrow_mut().push(call);
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    #[async_trait(?Send)]
    impl FormsApi for FakeApi {
        async fn list_forms(&self) -> ApiResult<Vec<Form>> {
            self.check("list".into())?;
            Ok(self.forms.clone())
        }

        async fn duplicate_form(&self, id: &FormId) -> ApiResult<Form> {
            self.check(format!("duplicate {}", id))?;
            let original = self.forms.iter().find(|f| f.id == *id).cloned().unwrap_or_else(|| make_form(id.as_str(), "?"));
            Ok(Form {
                id: FormId(format!("{}-copy", id)),
                title: format!("{} (Copy)", original.title),
                ..original
            })
        }

        async fn delete_form(&self, id: &FormId) -> ApiResult<()> {
            self.check(format!("delete {}", id))
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Note {
        Loading(String, String),
        Success(String, String),
        Error(Option<String>, String),
    }

    #[derive(Default)]
    struct RecordingNotifier {
        notes: RefCell<Vec<Note>>,
    }

    impl Notify for RecordingNotifier {
        fn loading(&self, key: &str, message: &str) {
            self.notes.borrow_mut().push(Note::Loading(key.into(), message.into()));
        }

        fn success(&self, key: &str, message: &str) {
            self.notes.borrow_mut().push(Note::Success(key.into(), message.into()));
        }

        fn error(&self, key: Option<&str>, message: &str) {
            self.notes.borrow_mut().push(Note::Error(key.map(String::from), message.into()));
        }
    }

    fn sample_forms() -> Vec<Form> {
        vec![make_form("a", "Survey"), make_form("b", "Feedback"), make_form("c", "Signup")]
    }

    #[tokio::test]
    async fn test_load_replaces_collection() {
        let api = FakeApi::with_forms(sample_forms());
        let notifier = RecordingNotifier::default();
        let forms = load_forms(&api, &notifier).await.unwrap();

        assert_eq!(view_state(&LoadPhase::Ready, forms.len()), ViewState::Ready);
        assert_eq!(forms.len(), 3);
        assert_eq!(forms[0].title, "Survey");
        assert!(notifier.notes.borrow().is_empty());
    }

    fn loaded_store() -> DashboardStore {
        let store = Store::new(DashboardState::default());
        store_load_succeeded(&store, sample_forms());
        store
    }

    #[tokio::test]
    async fn test_load_failure_shows_error() {
        let api = FakeApi::failing("network down");
        let notifier = RecordingNotifier::default();
        let store = Store::new(DashboardState::default());

        load_into_store(&store, &api, &notifier).await;

        let state = view_state(&store.phase().get_untracked(), store.forms().with_untracked(Vec::len));
        assert_eq!(state, ViewState::Error("network down".into()));
        assert!(store.forms().get_untracked().is_empty());
        assert_eq!(
            *notifier.notes.borrow(),
            vec![Note::Error(None, "Failed to load forms: network down".into())]
        );
    }

    #[tokio::test]
    async fn test_retry_after_failure_loads() {
        let notifier = RecordingNotifier::default();
        let store = Store::new(DashboardState::default());

        load_into_store(&store, &FakeApi::failing("timeout"), &notifier).await;
        load_into_store(&store, &FakeApi::with_forms(sample_forms()), &notifier).await;

        assert_eq!(store.phase().get_untracked(), LoadPhase::Ready);
        assert_eq!(store.forms().get_untracked(), sample_forms());
    }

    #[tokio::test]
    async fn test_cancelled_dialogs_make_no_call() {
        let api = FakeApi::with_forms(sample_forms());
        let notifier = RecordingNotifier::default();
        let store = loaded_store();

        store_request(&store, PendingAction::Delete(sample_forms()[0].clone()));
        store_take_delete(&store);
        store_request(&store, PendingAction::Duplicate(sample_forms()[1].clone()));
        store_take_duplicate(&store);

        // A late confirm finds no target
        if let Some(form) = store_take_delete(&store) {
            delete_from_store(&store, &api, &notifier, &form).await;
        }
        if let Some(form) = store_take_duplicate(&store) {
            duplicate_into_store(&store, &api, &notifier, &form).await;
        }

        assert!(api.calls.borrow().is_empty());
        assert!(notifier.notes.borrow().is_empty());
        assert_eq!(store.forms().get_untracked(), sample_forms());
    }

    #[tokio::test]
    async fn test_confirmed_dialogs_update_store() {
        let api = FakeApi::with_forms(sample_forms());
        let notifier = RecordingNotifier::default();
        let store = loaded_store();

        store_request(&store, PendingAction::Duplicate(sample_forms()[0].clone()));
        let target = store_take_duplicate(&store).unwrap();
        duplicate_into_store(&store, &api, &notifier, &target).await;

        store_request(&store, PendingAction::Delete(sample_forms()[2].clone()));
        let target = store_take_delete(&store).unwrap();
        delete_from_store(&store, &api, &notifier, &target).await;

        let ids: Vec<String> = store.forms().get_untracked().iter().map(|f| f.id.to_string()).collect();
        assert_eq!(ids, vec!["a-copy", "a", "b"]);
        assert_eq!(*api.calls.borrow(), vec!["duplicate a".to_string(), "delete c".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_store_entry() {
        let api = FakeApi::failing("Form is locked");
        let notifier = RecordingNotifier::default();
        let store = loaded_store();

        delete_from_store(&store, &api, &notifier, &sample_forms()[1]).await;

        assert_eq!(store.forms().get_untracked(), sample_forms());
    }

    #[tokio::test]
    async fn test_duplicate_success_prepends_one() {
        let api = FakeApi::with_forms(sample_forms());
        let notifier = RecordingNotifier::default();
        let mut forms = sample_forms();
        let survey = forms[0].clone();

        let copy = duplicate_form(&api, &notifier, &survey).await.unwrap();
        prepend_form(&mut forms, copy);

        assert_eq!(forms.len(), 4);
        assert_eq!(forms[0].id.as_str(), "a-copy");
        assert_eq!(&forms[1..], &sample_forms()[..]);

        let notes = notifier.notes.borrow();
        assert_eq!(notes[0], Note::Loading("duplicate".into(), "Duplicating form...".into()));
        match &notes[1] {
            Note::Success(key, message) => {
                assert_eq!(key, "duplicate");
                assert!(message.contains("Survey"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_duplicate_failure_leaves_collection() {
        let api = FakeApi::failing("quota exceeded");
        let notifier = RecordingNotifier::default();
        let mut forms = sample_forms();
        let target = forms[1].clone();

        if let Ok(copy) = duplicate_form(&api, &notifier, &target).await {
            prepend_form(&mut forms, copy);
        }

        assert_eq!(forms, sample_forms());
        assert_eq!(
            notifier.notes.borrow().last(),
            Some(&Note::Error(Some("duplicate".into()), "Failed to duplicate form: quota exceeded".into()))
        );
    }

    #[tokio::test]
    async fn test_delete_removes_only_target() {
        let api = FakeApi::with_forms(sample_forms());
        let notifier = RecordingNotifier::default();
        let mut forms = sample_forms();
        // Reordered since the dialog opened
        forms.reverse();
        let target = make_form("b", "Feedback");

        delete_form(&api, &notifier, &target).await.unwrap();
        remove_form(&mut forms, &target.id);

        let ids: Vec<_> = forms.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);
        assert_eq!(*api.calls.borrow(), vec!["delete b".to_string()]);
        assert_eq!(
            notifier.notes.borrow().last(),
            Some(&Note::Success("delete".into(), "\"Feedback\" deleted successfully!".into()))
        );
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_entry() {
        let api = FakeApi::failing("Form is locked");
        let notifier = RecordingNotifier::default();
        let mut forms = sample_forms();
        let target = forms[2].clone();

        if delete_form(&api, &notifier, &target).await.is_ok() {
            remove_form(&mut forms, &target.id);
        }

        assert_eq!(forms, sample_forms());
        assert_eq!(
            notifier.notes.borrow().last(),
            Some(&Note::Error(Some("delete".into()), "Failed to delete form: Form is locked".into()))
        );
    }

    #[tokio::test]
    async fn test_independent_calls_overlap() {
        let api = FakeApi::with_forms(sample_forms());
        let notifier = RecordingNotifier::default();
        let forms = sample_forms();

        let (copy, deleted) = tokio::join!(
            duplicate_form(&api, &notifier, &forms[0]),
            delete_form(&api, &notifier, &forms[1]),
        );

        assert!(copy.is_ok());
        assert!(deleted.is_ok());
        assert_eq!(api.calls.borrow().len(), 2);
    }
}
