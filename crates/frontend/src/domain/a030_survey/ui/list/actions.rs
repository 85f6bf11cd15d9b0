//! Row actions that await parent callbacks.
//!
//! Written against `ListStateStore` so the flows do not depend on how the
//! component stores its state.

use super::state::SurveyListState;
use crate::shared::async_callback::AsyncCallback;
use contracts::domain::a030_survey::aggregate::SurveyStatus;
use leptos::prelude::*;

pub trait ListStateStore {
    /// Returns `None` when the store is gone (component unmounted).
    fn update_state<R>(&self, f: impl FnOnce(&mut SurveyListState) -> R) -> Option<R>;
}

impl ListStateStore for RwSignal<SurveyListState> {
    fn update_state<R>(&self, f: impl FnOnce(&mut SurveyListState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Trash icon clicked: marks the row, which opens the dialog. Nothing is
/// deleted until the dialog is confirmed.
pub fn request_delete<S: ListStateStore>(state: &S, id: String) {
    state.update_state(|s| s.request_delete(id));
}

/// Dialog closed without confirming.
pub fn cancel_delete<S: ListStateStore>(state: &S) {
    state.update_state(|s| s.cancel_delete());
}

/// Runs the delete for the pending row, if any.
pub async fn confirm_delete<S: ListStateStore>(state: S, on_delete: AsyncCallback<String>) {
    let Some(id) = state.update_state(|s| s.begin_confirm()).flatten() else {
        return;
    };

    let result = on_delete.call(id.clone()).await;
    match &result {
        Ok(()) => log::debug!("survey {} deleted", id),
        Err(e) => log::error!("Failed to delete survey {}: {}", id, e),
    }
    state.update_state(|s| s.finish_delete(&result));
}

/// Asks the parent to flip the status of one row. The callback receives the
/// status the row had when clicked.
pub async fn toggle_status<S: ListStateStore>(
    state: S,
    on_toggle_status: AsyncCallback<(String, SurveyStatus)>,
    id: String,
    current: SurveyStatus,
) {
    if state.update_state(|s| s.begin_toggle(&id)) != Some(true) {
        return;
    }

    if let Err(e) = on_toggle_status.call((id.clone(), current)).await {
        log::error!("Failed to toggle status of survey {}: {}", id, e);
    }
    state.update_state(|s| s.finish_toggle(&id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a030_survey::ui::list::state::{create_state, dialog_open_signal};
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    impl ListStateStore for Rc<RefCell<SurveyListState>> {
        fn update_state<R>(&self, f: impl FnOnce(&mut SurveyListState) -> R) -> Option<R> {
            Some(f(&mut *self.borrow_mut()))
        }
    }

    type Calls<T> = Rc<RefCell<Vec<T>>>;

    fn recording<T: Clone + 'static>(fail: bool) -> (AsyncCallback<T>, Calls<T>) {
        let calls: Calls<T> = Rc::new(RefCell::new(Vec::new()));
        let cb = {
            let calls = calls.clone();
            AsyncCallback::new(move |arg: T| {
                calls.borrow_mut().push(arg);
                async move {
                    if fail {
                        Err("rejected".to_string())
                    } else {
                        Ok(())
                    }
                }
            })
        };
        (cb, calls)
    }

    fn new_store() -> Rc<RefCell<SurveyListState>> {
        Rc::new(RefCell::new(SurveyListState::default()))
    }

    #[test]
    fn test_delete_click_does_not_invoke_callback() {
        let store = new_store();
        let (on_delete, calls) = recording::<String>(false);

        request_delete(&store, "X".into());
        assert!(store.borrow().is_dialog_open());
        assert!(calls.borrow().is_empty());

        // the same callback fires only once the dialog is confirmed
        block_on(confirm_delete(store.clone(), on_delete));
        assert_eq!(*calls.borrow(), vec!["X".to_string()]);
    }

    #[test]
    fn test_delete_click_on_signal_opens_dialog() {
        let owner = Owner::new();
        owner.with(|| {
            let state = create_state();
            let open = dialog_open_signal(state, Signal::derive(|| false));

            request_delete(&state, "1".into());
            assert!(open.get());
            assert_eq!(state.with(|s| s.pending_delete.clone()).as_deref(), Some("1"));
            assert!(!state.with(|s| s.delete_in_flight));

            cancel_delete(&state);
            assert!(!open.get());
        });
    }

    #[test]
    fn test_confirm_invokes_delete_once_and_clears_marker() {
        let store = new_store();
        let (on_delete, calls) = recording::<String>(false);

        request_delete(&store, "1".into());
        block_on(confirm_delete(store.clone(), on_delete.clone()));
        // dialog already closed; a stray confirm is a no-op
        block_on(confirm_delete(store.clone(), on_delete));

        assert_eq!(*calls.borrow(), vec!["1".to_string()]);
        assert_eq!(store.borrow().pending_delete, None);
    }

    #[test]
    fn test_cancel_never_invokes_delete() {
        let store = new_store();
        let (on_delete, calls) = recording::<String>(false);

        request_delete(&store, "1".into());
        cancel_delete(&store);
        block_on(confirm_delete(store.clone(), on_delete));

        assert!(calls.borrow().is_empty());
        assert_eq!(store.borrow().pending_delete, None);
    }

    #[test]
    fn test_failed_delete_keeps_marker() {
        let store = new_store();
        let (on_delete, calls) = recording::<String>(true);

        request_delete(&store, "1".into());
        block_on(confirm_delete(store.clone(), on_delete));

        assert_eq!(calls.borrow().len(), 1);
        assert_eq!(store.borrow().pending_delete.as_deref(), Some("1"));
        assert!(!store.borrow().delete_in_flight);
    }

    #[test]
    fn test_toggle_passes_current_status() {
        let store = new_store();
        let (on_toggle, calls) = recording::<(String, SurveyStatus)>(false);

        block_on(toggle_status(store.clone(), on_toggle.clone(), "1".into(), SurveyStatus::Active));
        block_on(toggle_status(store.clone(), on_toggle, "2".into(), SurveyStatus::Paused));

        assert_eq!(
            *calls.borrow(),
            vec![
                ("1".to_string(), SurveyStatus::Active),
                ("2".to_string(), SurveyStatus::Paused),
            ]
        );
        assert!(store.borrow().toggles_in_flight.is_empty());
    }

    #[test]
    fn test_toggle_skipped_while_in_flight() {
        let store = new_store();
        let (on_toggle, calls) = recording::<(String, SurveyStatus)>(false);

        store.borrow_mut().begin_toggle("1");
        block_on(toggle_status(store.clone(), on_toggle, "1".into(), SurveyStatus::Active));

        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_toggle_failure_releases_row() {
        let store = new_store();
        let (on_toggle, calls) = recording::<(String, SurveyStatus)>(true);

        block_on(toggle_status(store.clone(), on_toggle, "1".into(), SurveyStatus::Paused));

        assert_eq!(calls.borrow().len(), 1);
        assert!(!store.borrow().is_toggling("1"));
    }
}
