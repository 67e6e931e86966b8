//! Resonant survey JSON writing

use super::document::Survey;
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Write a survey document to disk as pretty-printed JSON.
///
/// Serialization happens fully in memory before the single write, so a
/// serialization failure leaves no partial output file behind.
///
/// # Errors
/// Returns an error if serialization or file writing fails.
pub fn write_survey<P: AsRef<Path>>(survey: &Survey, path: P) -> Result<()> {
    let json = serialize_survey(survey)?;
    fs::write(path, json)?;
    Ok(())
}

/// Serialize a survey document to a pretty-printed JSON string.
///
/// Keys follow struct declaration order and non-ASCII text is emitted
/// literally, unescaped.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn serialize_survey(survey: &Survey) -> Result<String> {
    let mut json = serde_json::to_string_pretty(survey)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::resonant::{SurveySettings, SurveyStatus};

    #[test]
    fn test_top_level_key_order() {
        let survey = Survey {
            title: "T".to_string(),
            description: String::new(),
            status: SurveyStatus::Draft,
            settings: SurveySettings::default(),
            question_groups: Vec::new(),
        };
        let json = serialize_survey(&survey).unwrap();
        let title_pos = json.find("\"title\"").unwrap();
        let status_pos = json.find("\"status\"").unwrap();
        let settings_pos = json.find("\"settings\"").unwrap();
        let groups_pos = json.find("\"question_groups\"").unwrap();
        assert!(title_pos < status_pos && status_pos < settings_pos && settings_pos < groups_pos);
        assert!(json.contains("\"status\": \"draft\""));
        assert!(json.ends_with('\n'));
    }

    #[test]
    fn test_non_ascii_is_not_escaped() {
        let survey = Survey {
            title: "Umfrage über KI — 調査".to_string(),
            description: String::new(),
            status: SurveyStatus::Draft,
            settings: SurveySettings::default(),
            question_groups: Vec::new(),
        };
        let json = serialize_survey(&survey).unwrap();
        assert!(json.contains("Umfrage über KI — 調査"));
        assert!(!json.contains("\\u"));
    }
}
