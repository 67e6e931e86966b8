//! Resonant survey document structures
//!
//! Field declaration order matters: serde_json emits struct fields in the
//! order written here, and the output contract requires stable key order.

use super::question_type::QuestionType;
use serde::{Deserialize, Serialize};

/// A complete Resonant survey document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    pub title: String,
    pub description: String,
    pub status: SurveyStatus,
    pub settings: SurveySettings,
    pub question_groups: Vec<QuestionGroup>,
}

/// Survey lifecycle status. Imports always produce a draft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyStatus {
    #[default]
    Draft,
    Active,
    Closed,
    Archived,
}

/// Survey presentation format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyFormat {
    /// One page per question group.
    #[default]
    GroupByGroup,
    /// One page per question.
    QuestionByQuestion,
    /// The whole survey on a single page.
    AllInOne,
}

/// Survey-level settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveySettings {
    pub format: SurveyFormat,
    pub theme: String,
    pub show_progress_bar: bool,
    pub allow_backward_navigation: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prolific_integration: Option<ProlificIntegration>,
}

impl Default for SurveySettings {
    fn default() -> Self {
        Self {
            format: SurveyFormat::GroupByGroup,
            theme: "editorial_academic".to_string(),
            show_progress_bar: true,
            allow_backward_navigation: false,
            prolific_integration: None,
        }
    }
}

/// Prolific recruitment integration settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProlificIntegration {
    pub enabled: bool,
    pub completion_code: String,
    pub screenout_code: String,
}

/// An ordered group of questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionGroup {
    pub title: String,
    pub description: String,
    pub order_index: i64,
    /// Conditional-logic expression controlling group visibility. Opaque
    /// free text, never evaluated here.
    pub relevance_logic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub randomization_group: Option<String>,
    pub questions: Vec<Question>,
}

/// One survey question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub code: String,
    pub question_text: String,
    pub help_text: String,
    pub question_type: QuestionType,
    pub settings: QuestionSettings,
    pub relevance_logic: String,
    pub order_index: i64,
    pub subquestions: Vec<Subquestion>,
    pub answer_options: Vec<AnswerOption>,
}

/// Question-level settings.
///
/// The flattened attribute block is only present for LSS imports; the
/// tabular export carries no attribute table, so those fields are
/// omitted entirely rather than emitted as null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionSettings {
    pub mandatory: bool,
    pub other_option: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub randomization_group: Option<String>,
    #[serde(flatten)]
    pub attributes: Option<QuestionAttributes>,
}

/// Display and validation attributes threaded through from the LSS
/// `question_attributes` table.
///
/// Every field serializes as `null` when the source attribute was absent,
/// so "not specified" stays distinguishable from "specified as falsy".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionAttributes {
    pub array_filter: Option<String>,
    pub array_filter_exclude: Option<String>,
    pub array_filter_style: Option<String>,
    pub display_columns: Option<String>,
    pub max_answers: Option<String>,
    pub min_answers: Option<String>,
    pub random_order: Option<String>,
    pub other_replace_text: Option<String>,
    pub em_validation_q: Option<String>,
    pub em_validation_q_tip: Option<String>,
    pub cssclass: Option<String>,
    pub exclude_all_others: Option<String>,
    pub exclude_all_others_auto: Option<String>,
    pub hidden: Option<String>,
    pub time_limit: Option<String>,
    pub time_limit_action: Option<String>,
    pub time_limit_message: Option<String>,
    pub time_limit_countdown_message: Option<String>,
}

/// One subquestion (array row, multiple-choice item).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subquestion {
    pub code: String,
    pub label: String,
    pub order_index: i64,
}

/// One answer option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub code: String,
    pub label: String,
    pub order_index: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_id: Option<i64>,
}
