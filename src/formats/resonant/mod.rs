//! Resonant survey JSON schema (conversion target)

mod document;
mod question_type;
mod writer;

pub use document::{
    AnswerOption, ProlificIntegration, Question, QuestionAttributes, QuestionGroup,
    QuestionSettings, Subquestion, Survey, SurveyFormat, SurveySettings, SurveyStatus,
};
pub use question_type::QuestionType;
pub use writer::{serialize_survey, write_survey};
