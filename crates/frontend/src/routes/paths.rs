//! Client-side route table.

pub const SURVEYS_BASE: &str = "/dashboard/surveys";

/// Route pattern segments, relative to `SURVEYS_BASE`.
pub const NEW_SEGMENT: &str = "new";
pub const EDIT_SEGMENT: &str = "edit";

pub fn surveys_path() -> String {
    SURVEYS_BASE.to_string()
}

pub fn new_survey_path() -> String {
    format!("{}/{}", SURVEYS_BASE, NEW_SEGMENT)
}

/// Edit route for a survey; the id is percent-encoded as one path segment.
pub fn edit_survey_path(id: &str) -> String {
    format!("{}/{}/{}", SURVEYS_BASE, EDIT_SEGMENT, urlencoding::encode(id))
}
