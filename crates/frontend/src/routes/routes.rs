use crate::domain::a030_survey::ui::editor::SurveyEditorPage;
use crate::domain::a030_survey::ui::page::SurveysPage;
use crate::routes::paths::SURVEYS_BASE;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <Redirect path=SURVEYS_BASE /> }>
                    <Route path=path!("/dashboard/surveys") view=SurveysPage />
                    <Route path=path!("/dashboard/surveys/new") view=SurveyEditorPage />
                    <Route path=path!("/dashboard/surveys/edit/:id") view=SurveyEditorPage />
                </Routes>
            </main>
        </Router>
    }
}
