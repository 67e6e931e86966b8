//! LSS survey archive (XML)
//!
//! An LSS file is a single XML document whose children are named tables
//! (`groups`, `questions`, `question_l10ns`, ...), each holding `row`
//! elements whose child elements are the columns. Ids are plain-text
//! integers in element bodies; text payloads are usually CDATA.
//!
//! Reading happens in two steps: [`read_lss`]/[`parse_lss`] collect the
//! raw table rows into an [`LssDocument`], then [`to_tables`] performs
//! the localization joins and produces the shared
//! [`SurveyTables`](crate::formats::common::SurveyTables).

mod document;
mod join;
mod reader;

pub use document::{
    AnswerL10nRow, GroupL10nRow, LanguageSettingsRow, LssAnswerRow, LssDocument, LssGroupRow,
    LssQuestionRow, LssSubquestionRow, QuestionAttributeRow, QuestionL10nRow, RowFields,
};
pub use join::to_tables;
pub use reader::{parse_lss, read_lss};
