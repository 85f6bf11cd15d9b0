use crate::routes::paths::surveys_path;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::theme::use_theme;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;
use thaw::*;

/// Target page of the list's Add and Edit actions. The survey form itself is
/// not part of this app; the page shows which survey was requested.
#[component]
#[allow(non_snake_case)]
pub fn SurveyEditorPage() -> impl IntoView {
    let theme_ctx = use_theme();
    let params = use_params_map();
    let navigate = StoredValue::new_local(use_navigate());

    let survey_id = move || params.with(|p| p.get("id"));
    let title = move || match survey_id() {
        Some(id) => format!("Edit survey {}", id),
        None => "New survey".to_string(),
    };

    view! {
        <PageFrame page_id="a030_survey--detail" category=PAGE_CAT_DETAIL theme=theme_ctx.theme>
            <div class="page__header">
                <h1 class="page-header__title">{title}</h1>
            </div>
            <div class="page__content">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| {
                        navigate.with_value(|nav| nav(&surveys_path(), NavigateOptions::default()))
                    }
                >
                    {icon("arrow-left")}
                    " Back to surveys"
                </Button>
            </div>
        </PageFrame>
    }
}
