use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a survey.
///
/// Wire form is `"ACTIVE"` / `"PAUSED"`. Any other incoming value is read as
/// `Paused`: only an explicit `"ACTIVE"` counts as running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SurveyStatus {
    Active,
    #[default]
    Paused,
}

impl SurveyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SurveyStatus::Active => "ACTIVE",
            SurveyStatus::Paused => "PAUSED",
        }
    }

    /// Strict parsing, for places where an unknown status is an input error.
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "ACTIVE" => Ok(SurveyStatus::Active),
            "PAUSED" => Ok(SurveyStatus::Paused),
            _ => Err(format!("Unknown survey status: {}", s)),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, SurveyStatus::Active)
    }

    /// Status after a pause/resume action.
    pub fn toggled(&self) -> Self {
        match self {
            SurveyStatus::Active => SurveyStatus::Paused,
            SurveyStatus::Paused => SurveyStatus::Active,
        }
    }
}

impl From<String> for SurveyStatus {
    fn from(value: String) -> Self {
        if value == "ACTIVE" {
            SurveyStatus::Active
        } else {
            SurveyStatus::Paused
        }
    }
}

impl From<SurveyStatus> for String {
    fn from(value: SurveyStatus) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for SurveyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Survey record as shown in the survey list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    pub id: String,
    pub survey_name: String,
    /// Visual style tag (e.g. "modern", "classic")
    pub survey_style: String,
    pub created_at: DateTime<Utc>,
    pub survey_status: SurveyStatus,
    /// Logo image URL
    pub logo_path: String,
}

impl Survey {
    pub fn new_for_insert(
        survey_name: String,
        survey_style: String,
        logo_path: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            survey_name,
            survey_style,
            created_at: Utc::now(),
            survey_status: SurveyStatus::Active,
            logo_path,
        }
    }
}
