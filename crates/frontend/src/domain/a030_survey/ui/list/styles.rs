//! Theme-dependent classes for the survey list.
//!
//! Rules for the `--light` / `--dark` modifiers live in the theme stylesheets.

use crate::shared::theme::Theme;
use contracts::domain::a030_survey::aggregate::SurveyStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyListStyles {
    pub title: &'static str,
    pub card: &'static str,
    pub header_row: &'static str,
    pub row: &'static str,
    pub name: &'static str,
    pub style_tag: &'static str,
    pub date_cell: &'static str,
    pub edit_button: &'static str,
    pub toggle_button: &'static str,
    pub delete_button: &'static str,
}

impl SurveyListStyles {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                title: "survey-list__title survey-list__title--light",
                card: "survey-list__card survey-list__card--light",
                header_row: "survey-list__head survey-list__head--light",
                row: "survey-list__row survey-list__row--light",
                name: "survey-list__name survey-list__name--light",
                style_tag: "survey-list__style survey-list__style--light",
                date_cell: "survey-list__date survey-list__date--light",
                edit_button: "survey-action survey-action--edit survey-action--light",
                toggle_button: "survey-action survey-action--toggle survey-action--light",
                delete_button: "survey-action survey-action--delete survey-action--light",
            },
            Theme::Dark => Self {
                title: "survey-list__title survey-list__title--dark",
                card: "survey-list__card survey-list__card--dark",
                header_row: "survey-list__head survey-list__head--dark",
                row: "survey-list__row survey-list__row--dark",
                name: "survey-list__name survey-list__name--dark",
                style_tag: "survey-list__style survey-list__style--dark",
                date_cell: "survey-list__date survey-list__date--dark",
                edit_button: "survey-action survey-action--edit survey-action--dark",
                toggle_button: "survey-action survey-action--toggle survey-action--dark",
                delete_button: "survey-action survey-action--delete survey-action--dark",
            },
        }
    }
}

/// Badge class; same in both themes.
pub fn status_badge_class(status: SurveyStatus) -> &'static str {
    if status.is_active() {
        "survey-status survey-status--active"
    } else {
        "survey-status survey-status--paused"
    }
}
