//! Survey list page: owns the records and answers the list's callbacks.
//!
//! There is no backend behind this page; records live in a signal seeded with
//! sample data and every action waits a short delay to behave like a request.

use crate::domain::a030_survey::ui::list::SurveyList;
use crate::shared::async_callback::AsyncCallback;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::theme::{use_theme, ThemeToggle};
use chrono::{Duration, Utc};
use contracts::domain::a030_survey::aggregate::{Survey, SurveyStatus};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const LOAD_DELAY_MS: u32 = 400;
const ACTION_DELAY_MS: u32 = 250;

/// Removes one record by id.
pub fn remove_survey(surveys: &mut Vec<Survey>, id: &str) -> Result<(), String> {
    let before = surveys.len();
    surveys.retain(|s| s.id != id);
    if surveys.len() == before {
        return Err(format!("Survey {} not found", id));
    }
    Ok(())
}

/// Flips the status of one record. `current` must match what the record holds,
/// otherwise the click was made on a stale row.
pub fn apply_toggle(
    surveys: &mut [Survey],
    id: &str,
    current: SurveyStatus,
) -> Result<SurveyStatus, String> {
    let survey = surveys
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or_else(|| format!("Survey {} not found", id))?;
    if survey.survey_status != current {
        return Err(format!(
            "Survey {} is already {}",
            id, survey.survey_status
        ));
    }
    survey.survey_status = current.toggled();
    Ok(survey.survey_status)
}

pub fn sample_surveys() -> Vec<Survey> {
    let now = Utc::now();
    [
        ("Q1 Feedback", "modern", SurveyStatus::Active, 3),
        ("Customer Satisfaction", "classic", SurveyStatus::Active, 12),
        ("Onboarding Experience", "minimal", SurveyStatus::Paused, 30),
        ("Product Roadmap Poll", "modern", SurveyStatus::Paused, 45),
    ]
    .into_iter()
    .map(|(name, style, status, days_ago)| {
        let mut survey = Survey::new_for_insert(
            name.to_string(),
            style.to_string(),
            format!("/static/logos/{}.svg", style),
        );
        survey.created_at = now - Duration::days(days_ago);
        survey.survey_status = status;
        survey
    })
    .collect()
}

#[component]
#[allow(non_snake_case)]
pub fn SurveysPage() -> impl IntoView {
    let theme_ctx = use_theme();
    let surveys = RwSignal::new(Vec::<Survey>::new());
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        TimeoutFuture::new(LOAD_DELAY_MS).await;
        surveys.set(sample_surveys());
        set_loading.set(false);
    });

    let on_delete = AsyncCallback::new(move |id: String| async move {
        TimeoutFuture::new(ACTION_DELAY_MS).await;
        surveys
            .try_update(|list| remove_survey(list, &id))
            .unwrap_or_else(|| Err("Survey list is gone".to_string()))
    });

    let on_toggle_status = AsyncCallback::new(move |(id, current): (String, SurveyStatus)| async move {
        TimeoutFuture::new(ACTION_DELAY_MS).await;
        let next = surveys
            .try_update(|list| apply_toggle(list, &id, current))
            .unwrap_or_else(|| Err("Survey list is gone".to_string()))?;
        log::info!("survey {} is now {}", id, next);
        Ok::<(), String>(())
    });

    // AsyncCallback is !Send; PageFrame children must be Send.
    let on_delete = StoredValue::new_local(on_delete);
    let on_toggle_status = StoredValue::new_local(on_toggle_status);

    view! {
        <PageFrame page_id="a030_survey--list" category=PAGE_CAT_LIST theme=theme_ctx.theme>
            <div class="page__toolbar">
                <ThemeToggle />
            </div>
            <div class="page__content">
                <SurveyList
                    surveys=surveys
                    is_loading=loading
                    theme=theme_ctx.theme
                    on_delete=on_delete.get_value()
                    on_toggle_status=on_toggle_status.get_value()
                />
            </div>
        </PageFrame>
    }
}
