use super::styles::status_badge_class;
use crate::shared::date_utils::format_date;
use contracts::domain::a030_survey::aggregate::{Survey, SurveyStatus};

/// Everything a table row shows, derived from one record.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyRowView {
    pub id: String,
    pub name: String,
    pub style: String,
    pub logo_path: String,
    pub created: String,
    pub status: SurveyStatus,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub toggle_icon: &'static str,
    pub toggle_title: &'static str,
}

impl SurveyRowView {
    pub fn from_survey(survey: &Survey) -> Self {
        let status = survey.survey_status;
        Self {
            id: survey.id.clone(),
            name: survey.survey_name.clone(),
            style: survey.survey_style.clone(),
            logo_path: survey.logo_path.clone(),
            created: format_date(&survey.created_at),
            status,
            status_label: status.as_str(),
            status_class: status_badge_class(status),
            toggle_icon: toggle_icon(status),
            toggle_title: toggle_title(status),
        }
    }
}

/// Pause while running, play while paused.
pub fn toggle_icon(status: SurveyStatus) -> &'static str {
    if status.is_active() {
        "pause"
    } else {
        "play"
    }
}

pub fn toggle_title(status: SurveyStatus) -> &'static str {
    if status.is_active() {
        "Pause survey"
    } else {
        "Activate survey"
    }
}

/// One row per record, input order preserved.
pub fn build_rows(surveys: &[Survey]) -> Vec<SurveyRowView> {
    surveys.iter().map(SurveyRowView::from_survey).collect()
}

/// What the list area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListBody {
    Loading,
    Table,
}

impl ListBody {
    pub fn from_flags(is_loading: bool) -> Self {
        if is_loading {
            ListBody::Loading
        } else {
            ListBody::Table
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn survey(id: &str, name: &str, status: SurveyStatus) -> Survey {
        Survey {
            id: id.to_string(),
            survey_name: name.to_string(),
            survey_style: "modern".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap(),
            survey_status: status,
            logo_path: format!("/static/logos/{id}.png"),
        }
    }

    #[test]
    fn test_rows_match_input_order() {
        let surveys = vec![
            survey("3", "C", SurveyStatus::Active),
            survey("1", "A", SurveyStatus::Paused),
            survey("2", "B", SurveyStatus::Active),
        ];
        let rows = build_rows(&surveys);
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_empty_input_gives_no_rows() {
        assert!(build_rows(&[]).is_empty());
    }

    #[test]
    fn test_active_row() {
        let row = SurveyRowView::from_survey(&survey("1", "Q1 Feedback", SurveyStatus::Active));
        assert_eq!(row.name, "Q1 Feedback");
        assert_eq!(row.status_label, "ACTIVE");
        assert_eq!(row.toggle_icon, "pause");
        assert_eq!(row.toggle_title, "Pause survey");
        assert!(row.status_class.contains("--active"));
        assert_eq!(row.created, "Mar 15, 2024");
        assert_eq!(row.logo_path, "/static/logos/1.png");
    }

    #[test]
    fn test_paused_row() {
        let row = SurveyRowView::from_survey(&survey("2", "Beta", SurveyStatus::Paused));
        assert_eq!(row.status_label, "PAUSED");
        assert_eq!(row.toggle_icon, "play");
        assert_eq!(row.toggle_title, "Activate survey");
        assert!(row.status_class.contains("--paused"));
    }

    #[test]
    fn test_unknown_wire_status_renders_paused() {
        let json = r#"{"id":"9","survey_name":"X","survey_style":"s",
            "created_at":"2024-01-01T00:00:00Z","survey_status":"ARCHIVED","logo_path":""}"#;
        let s: Survey = serde_json::from_str(json).unwrap();
        let row = SurveyRowView::from_survey(&s);
        assert_eq!(row.toggle_icon, "play");
        assert!(row.status_class.contains("--paused"));
    }

    #[test]
    fn test_loading_hides_table() {
        assert_eq!(ListBody::from_flags(true), ListBody::Loading);
        assert_eq!(ListBody::from_flags(false), ListBody::Table);
    }
}
