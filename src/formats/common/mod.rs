//! Shared relational form produced by the format adapters
//!
//! Both input formats (tab-separated rows and the LSS XML archive) are
//! reduced to the same set of flat record tables before any tree assembly
//! happens. Foreign keys are kept as plain strings here; resolution is a
//! separate pass in [`crate::converter::assemble`].

mod types;

pub use types::{
    AnswerRecord, AttributeBag, GroupRecord, QuestionRecord, SubquestionRecord, SurveyTables,
};
