use leptos::prelude::*;
use std::collections::HashSet;

/// Local UI state of the survey list.
///
/// `pending_delete` is the row awaiting confirmation; the dialog is open while
/// it is set and the list is not loading. The in-flight fields keep a second click from re-invoking a
/// callback that has not resolved yet.
#[derive(Clone, Debug, Default)]
pub struct SurveyListState {
    pub pending_delete: Option<String>,
    pub delete_in_flight: bool,
    pub toggles_in_flight: HashSet<String>,
}

impl SurveyListState {
    /// Delete icon clicked. Ignored while a confirmed delete is running.
    pub fn request_delete(&mut self, id: String) {
        if self.delete_in_flight {
            return;
        }
        self.pending_delete = Some(id);
    }

    /// Dialog closed without confirming.
    pub fn cancel_delete(&mut self) {
        if self.delete_in_flight {
            return;
        }
        self.pending_delete = None;
    }

    /// Dialog confirmed. Returns the id to delete, or `None` when there is
    /// nothing pending or a delete is already running.
    pub fn begin_confirm(&mut self) -> Option<String> {
        if self.delete_in_flight {
            return None;
        }
        let id = self.pending_delete.clone()?;
        self.delete_in_flight = true;
        Some(id)
    }

    /// Delete callback resolved. The marker is cleared only on success so a
    /// failed delete leaves the dialog open for retry or cancel.
    pub fn finish_delete(&mut self, result: &Result<(), String>) {
        self.delete_in_flight = false;
        if result.is_ok() {
            self.pending_delete = None;
        }
    }

    pub fn is_dialog_open(&self) -> bool {
        self.pending_delete.is_some()
    }

    /// Returns `false` if a toggle for this row is already running.
    pub fn begin_toggle(&mut self, id: &str) -> bool {
        self.toggles_in_flight.insert(id.to_string())
    }

    pub fn finish_toggle(&mut self, id: &str) {
        self.toggles_in_flight.remove(id);
    }

    pub fn is_toggling(&self, id: &str) -> bool {
        self.toggles_in_flight.contains(id)
    }
}

pub fn create_state() -> RwSignal<SurveyListState> {
    RwSignal::new(SurveyListState::default())
}

/// Dialog visibility. While loading only the spinner is shown, so a pending
/// marker does not surface the dialog until the table is back.
pub fn dialog_open_signal(
    state: RwSignal<SurveyListState>,
    is_loading: Signal<bool>,
) -> Signal<bool> {
    Signal::derive(move || !is_loading.get() && state.with(|s| s.is_dialog_open()))
}

pub fn dialog_busy_signal(state: RwSignal<SurveyListState>) -> Signal<bool> {
    Signal::derive(move || state.with(|s| s.delete_in_flight))
}
