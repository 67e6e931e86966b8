//! LSS archive table structures
//!
//! Typed rows for the survey tables this crate consumes. Newer LimeSurvey
//! exports split display text into `*_l10ns` tables; older exports carry
//! it inline on the main rows. Both shapes are kept here and reconciled
//! during the join step.

use indexmap::IndexMap;

/// Column name → text content for one `row` element.
pub type RowFields = IndexMap<String, String>;

fn text(fields: &RowFields, key: &str) -> String {
    fields.get(key).cloned().unwrap_or_default()
}

fn int(fields: &RowFields, key: &str) -> i64 {
    fields.get(key).and_then(|v| v.parse().ok()).unwrap_or(0)
}

fn flag(fields: &RowFields, key: &str) -> bool {
    fields.get(key).is_some_and(|v| v == "Y")
}

/// An expression column that LimeSurvey defaults to `"1"` (always shown).
fn relevance(fields: &RowFields, key: &str) -> String {
    match fields.get(key) {
        Some(v) if !v.is_empty() => v.clone(),
        _ => "1".to_string(),
    }
}

/// The collected tables of one LSS archive, in document order.
#[derive(Debug, Clone, Default)]
pub struct LssDocument {
    pub language_settings: Vec<LanguageSettingsRow>,
    pub groups: Vec<LssGroupRow>,
    pub group_l10ns: Vec<GroupL10nRow>,
    pub questions: Vec<LssQuestionRow>,
    pub question_l10ns: Vec<QuestionL10nRow>,
    pub question_attributes: Vec<QuestionAttributeRow>,
    pub subquestions: Vec<LssSubquestionRow>,
    pub answers: Vec<LssAnswerRow>,
    pub answer_l10ns: Vec<AnswerL10nRow>,
}

/// One `surveys_languagesettings` row (survey title and description).
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageSettingsRow {
    pub title: String,
    pub description: String,
}

impl LanguageSettingsRow {
    pub fn from_fields(fields: &RowFields) -> Option<Self> {
        Some(Self {
            title: text(fields, "surveyls_title"),
            description: text(fields, "surveyls_description"),
        })
    }
}

/// One `groups` row.
#[derive(Debug, Clone, PartialEq)]
pub struct LssGroupRow {
    pub gid: String,
    /// Inline group name (older exports only).
    pub group_name: String,
    pub group_order: i64,
    pub grelevance: String,
    pub randomization_group: String,
}

impl LssGroupRow {
    pub fn from_fields(fields: &RowFields) -> Option<Self> {
        let gid = text(fields, "gid");
        if gid.is_empty() {
            return None;
        }
        Some(Self {
            gid,
            group_name: text(fields, "group_name"),
            group_order: int(fields, "group_order"),
            grelevance: relevance(fields, "grelevance"),
            randomization_group: text(fields, "randomization_group"),
        })
    }
}

/// One `group_l10ns` row.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupL10nRow {
    pub gid: String,
    pub group_name: String,
    pub description: String,
}

impl GroupL10nRow {
    pub fn from_fields(fields: &RowFields) -> Option<Self> {
        let gid = text(fields, "gid");
        if gid.is_empty() {
            return None;
        }
        Some(Self {
            gid,
            group_name: text(fields, "group_name"),
            description: text(fields, "description"),
        })
    }
}

/// One `questions` row.
#[derive(Debug, Clone, PartialEq)]
pub struct LssQuestionRow {
    pub qid: String,
    pub gid: String,
    pub type_code: String,
    /// Short question code.
    pub title: String,
    /// Inline question text (older exports only).
    pub question: String,
    /// Inline help text (older exports only).
    pub help: String,
    pub question_order: i64,
    pub relevance: String,
    pub mandatory: bool,
    pub other: bool,
}

impl LssQuestionRow {
    pub fn from_fields(fields: &RowFields) -> Option<Self> {
        let qid = text(fields, "qid");
        if qid.is_empty() {
            return None;
        }
        Some(Self {
            qid,
            gid: text(fields, "gid"),
            type_code: text(fields, "type"),
            title: text(fields, "title"),
            question: text(fields, "question"),
            help: text(fields, "help"),
            question_order: int(fields, "question_order"),
            relevance: relevance(fields, "relevance"),
            mandatory: flag(fields, "mandatory"),
            other: flag(fields, "other"),
        })
    }
}

/// One `question_l10ns` row.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionL10nRow {
    pub qid: String,
    pub question: String,
    pub help: String,
}

impl QuestionL10nRow {
    pub fn from_fields(fields: &RowFields) -> Option<Self> {
        let qid = text(fields, "qid");
        if qid.is_empty() {
            return None;
        }
        Some(Self {
            qid,
            question: text(fields, "question"),
            help: text(fields, "help"),
        })
    }
}

/// One `question_attributes` row.
///
/// `value` is `None` when the element was empty, so downstream mapping
/// can distinguish "not specified" from "specified as falsy".
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionAttributeRow {
    pub qid: String,
    pub attribute: String,
    pub value: Option<String>,
}

impl QuestionAttributeRow {
    pub fn from_fields(fields: &RowFields) -> Option<Self> {
        let qid = text(fields, "qid");
        let attribute = text(fields, "attribute");
        if qid.is_empty() || attribute.is_empty() {
            return None;
        }
        let value = fields.get("value").filter(|v| !v.is_empty()).cloned();
        Some(Self {
            qid,
            attribute,
            value,
        })
    }
}

/// One `subquestions` row.
#[derive(Debug, Clone, PartialEq)]
pub struct LssSubquestionRow {
    /// The subquestion's own qid (used for its l10n lookup).
    pub qid: String,
    /// Foreign key to the parent question.
    pub parent_qid: String,
    /// Short subquestion code.
    pub title: String,
    /// Inline label (older exports only).
    pub question: String,
    pub question_order: i64,
}

impl LssSubquestionRow {
    pub fn from_fields(fields: &RowFields) -> Option<Self> {
        let qid = text(fields, "qid");
        let parent_qid = text(fields, "parent_qid");
        if qid.is_empty() || parent_qid.is_empty() {
            return None;
        }
        Some(Self {
            qid,
            parent_qid,
            title: text(fields, "title"),
            question: text(fields, "question"),
            question_order: int(fields, "question_order"),
        })
    }
}

/// One `answers` row.
#[derive(Debug, Clone, PartialEq)]
pub struct LssAnswerRow {
    /// The answer's own id (used for its l10n lookup).
    pub aid: String,
    /// Foreign key to the parent question.
    pub qid: String,
    pub code: String,
    /// Inline answer text (older exports only).
    pub answer: String,
    pub sortorder: i64,
}

impl LssAnswerRow {
    pub fn from_fields(fields: &RowFields) -> Option<Self> {
        let qid = text(fields, "qid");
        if qid.is_empty() {
            return None;
        }
        Some(Self {
            aid: text(fields, "aid"),
            qid,
            code: text(fields, "code"),
            answer: text(fields, "answer"),
            sortorder: int(fields, "sortorder"),
        })
    }
}

/// One `answer_l10ns` row.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerL10nRow {
    pub aid: String,
    pub answer: String,
}

impl AnswerL10nRow {
    pub fn from_fields(fields: &RowFields) -> Option<Self> {
        let aid = text(fields, "aid");
        if aid.is_empty() {
            return None;
        }
        Some(Self {
            aid,
            answer: text(fields, "answer"),
        })
    }
}
