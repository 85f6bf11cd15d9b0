use crate::shared::modal::Modal;
use leptos::prelude::*;
use thaw::*;

/// Confirmation dialog for destructive actions.
///
/// Stateless: the owner decides when it is open and what confirm does.
#[component]
pub fn DeleteConfirmDialog(
    /// Whether the dialog is shown
    #[prop(into)]
    open: Signal<bool>,
    /// Cancel, close button, overlay click, Escape
    on_close: Callback<()>,
    /// "Delete" button
    on_confirm: Callback<()>,
    /// Disables both buttons while the confirmed action is running
    #[prop(optional, into)]
    busy: Signal<bool>,
    #[prop(into, default = "Delete survey".to_string())]
    title: String,
    #[prop(
        into,
        default = "Are you sure you want to delete this survey? This action cannot be undone.".to_string()
    )]
    message: String,
) -> impl IntoView {
    let title = StoredValue::new(title);
    let message = StoredValue::new(message);

    view! {
        <Show when=move || open.get()>
            <Modal title=title.get_value() on_close=on_close class="delete-confirm-dialog">
                <p class="delete-confirm-dialog__message">{message.get_value()}</p>
                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=busy
                        on_click=move |_| on_close.run(())
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=busy
                        on_click=move |_| on_confirm.run(())
                    >
                        "Delete"
                    </Button>
                </div>
            </Modal>
        </Show>
    }
}
