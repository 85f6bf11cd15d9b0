pub mod actions;
pub mod state;
pub mod styles;
pub mod view_model;

use self::actions::{cancel_delete, confirm_delete, request_delete, toggle_status};
use self::state::{create_state, dialog_busy_signal, dialog_open_signal};
use self::styles::SurveyListStyles;
use self::view_model::{build_rows, ListBody, SurveyRowView};
use crate::routes::paths::{edit_survey_path, new_survey_path};
use crate::shared::async_callback::AsyncCallback;
use crate::shared::components::delete_confirm_dialog::DeleteConfirmDialog;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::theme::Theme;
use contracts::domain::a030_survey::aggregate::{Survey, SurveyStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use thaw::*;

/// Table of surveys with edit, pause/resume and delete actions.
///
/// The parent owns the records; this component only reads them and asks for
/// changes through the callbacks. Delete is two-phase: the trash icon marks a
/// row, the confirmation dialog runs `on_delete`.
#[component]
#[allow(non_snake_case)]
pub fn SurveyList(
    #[prop(into)] surveys: Signal<Vec<Survey>>,
    on_delete: AsyncCallback<String>,
    /// Receives the row's current status; flipping it is up to the parent
    on_toggle_status: AsyncCallback<(String, SurveyStatus)>,
    #[prop(optional, into)] is_loading: Signal<bool>,
    #[prop(into)] theme: Signal<Theme>,
) -> impl IntoView {
    let state = create_state();
    let on_delete = StoredValue::new_local(on_delete);
    let on_toggle_status = StoredValue::new_local(on_toggle_status);
    let navigate = StoredValue::new_local(use_navigate());

    let go_to = move |path: String| {
        log::debug!("navigate to {}", path);
        navigate.with_value(|nav| nav(&path, NavigateOptions::default()));
    };

    let handle_toggle = move |id: String, current: SurveyStatus| {
        spawn_local(toggle_status(
            state,
            on_toggle_status.get_value(),
            id,
            current,
        ));
    };

    let handle_confirm = Callback::new(move |_| {
        spawn_local(confirm_delete(state, on_delete.get_value()));
    });

    let handle_close = Callback::new(move |_| cancel_delete(&state));

    let render_row = move |row: SurveyRowView, styles: SurveyListStyles| {
        let SurveyRowView {
            id,
            name,
            style,
            logo_path,
            created,
            status,
            status_label,
            status_class,
            toggle_icon,
            toggle_title,
        } = row;
        let id_for_edit = id.clone();
        let id_for_toggle = id.clone();
        let id_for_delete = id.clone();
        let id_for_busy = id.clone();

        view! {
            <tr class=styles.row>
                <td class="survey-list__cell">
                    <div class="survey-list__identity">
                        <div class="survey-list__logo">
                            <img src=logo_path alt=name.clone() loading="lazy" />
                        </div>
                        <div>
                            <div class=styles.name>{name}</div>
                            <div class=styles.style_tag>{style}</div>
                        </div>
                    </div>
                </td>
                <td class=format!("survey-list__cell {}", styles.date_cell)>{created}</td>
                <td class="survey-list__cell">
                    <span class=status_class>{status_label}</span>
                </td>
                <td class="survey-list__cell survey-list__cell--actions">
                    <div class="survey-list__actions">
                        <button
                            class=styles.edit_button
                            title="Edit survey"
                            on:click=move |_| go_to(edit_survey_path(&id_for_edit))
                        >
                            {icon("pencil")}
                        </button>
                        <button
                            class=styles.toggle_button
                            title=toggle_title
                            disabled=move || state.with(|s| s.is_toggling(&id_for_busy))
                            on:click=move |_| handle_toggle(id_for_toggle.clone(), status)
                        >
                            {icon(toggle_icon)}
                        </button>
                        <button
                            class=styles.delete_button
                            title="Delete survey"
                            on:click=move |_| request_delete(&state, id_for_delete.clone())
                        >
                            {icon("trash")}
                        </button>
                    </div>
                </td>
            </tr>
        }
    };

    view! {
        <div class="survey-list">
            {move || match ListBody::from_flags(is_loading.get()) {
                ListBody::Loading => view! {
                    <div class="survey-list__loading">
                        <Spinner />
                    </div>
                }.into_any(),
                ListBody::Table => {
                    let styles = SurveyListStyles::for_theme(theme.get());
                    view! {
                        <div class="survey-list__content">
                            <PageHeader title="Surveys" title_class=styles.title>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| go_to(new_survey_path())
                                >
                                    {icon("plus")}
                                    " Add Survey"
                                </Button>
                            </PageHeader>
                            <div class=styles.card>
                                <div class="survey-list__scroll">
                                    <table class="survey-list__table">
                                        <thead>
                                            <tr class=styles.header_row>
                                                <th class="survey-list__th">"Survey Name"</th>
                                                <th class="survey-list__th">"Created Date"</th>
                                                <th class="survey-list__th">"Status"</th>
                                                <th class="survey-list__th survey-list__th--right">"Actions"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {move || {
                                                build_rows(&surveys.get())
                                                    .into_iter()
                                                    .map(|row| render_row(row, styles))
                                                    .collect_view()
                                            }}
                                        </tbody>
                                    </table>
                                </div>
                            </div>
                        </div>
                    }.into_any()
                }
            }}

            <DeleteConfirmDialog
                open=dialog_open_signal(state, is_loading)
                busy=dialog_busy_signal(state)
                on_close=handle_close
                on_confirm=handle_confirm
            />
        </div>
    }
}
