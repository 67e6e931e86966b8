//! Record types for the shared relational tables

use indexmap::IndexMap;
use std::collections::HashMap;

/// Open-ended key/value metadata attached to one question id.
///
/// Values are `None` when the export carried the key with an empty body,
/// which downstream mapping treats the same as an absent key. Insertion
/// order is preserved so repeated conversions stay byte-identical.
pub type AttributeBag = IndexMap<String, Option<String>>;

/// Flat tables keyed by the export's own identifiers, in source order.
///
/// This is the output of ingestion and the input to tree reconstruction.
/// Records are stored in order of appearance; the `order` field on each
/// record is the source-declared order index used for sibling sorting.
#[derive(Debug, Clone, Default)]
pub struct SurveyTables {
    /// Survey title, when the export carried one.
    pub title: Option<String>,
    /// Survey description, when the export carried one.
    pub description: Option<String>,
    /// Question groups in source order.
    pub groups: Vec<GroupRecord>,
    /// Questions in source order, each referencing its group by id.
    pub questions: Vec<QuestionRecord>,
    /// Subquestions in source order, each referencing its parent question.
    pub subquestions: Vec<SubquestionRecord>,
    /// Answer options in source order, each referencing its parent question.
    pub answers: Vec<AnswerRecord>,
    /// Per-question attribute bags (LSS `question_attributes` table).
    pub attributes: HashMap<String, AttributeBag>,
}

/// One question group row.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupRecord {
    /// Primary id (`gid` in LSS, the `id` column in the tabular export).
    pub id: String,
    pub title: String,
    pub description: String,
    /// Source-declared order index. Not necessarily contiguous.
    pub order: i64,
    /// Conditional-logic expression, opaque to this crate.
    pub relevance: String,
    /// Randomization group name, empty when not set.
    pub randomization_group: String,
}

/// One question row.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionRecord {
    /// Primary id (`qid` in LSS).
    pub id: String,
    /// Foreign key to the owning group.
    pub group_id: String,
    /// Short question code, unique within the survey.
    pub code: String,
    pub text: String,
    pub help: String,
    /// Raw LimeSurvey type code (`T`, `S`, `L`, `M`, ...).
    pub type_code: String,
    pub order: i64,
    pub relevance: String,
    pub mandatory: bool,
    /// Whether the question offers an explicit "other" option.
    pub other: bool,
}

/// One subquestion row.
#[derive(Debug, Clone, PartialEq)]
pub struct SubquestionRecord {
    /// Foreign key to the parent question.
    pub parent_id: String,
    pub code: String,
    pub label: String,
    pub order: i64,
}

/// One answer-option row.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerRecord {
    /// Foreign key to the parent question.
    pub parent_id: String,
    pub code: String,
    pub label: String,
    pub order: i64,
    /// Scale identifier; only the tabular export carries this.
    pub scale_id: Option<i64>,
}
