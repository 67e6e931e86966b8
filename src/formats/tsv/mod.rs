//! Tab-separated survey-structure export
//!
//! A flat sequence of rows discriminated by the one-character `class`
//! column: `S` (survey setting), `G` (group), `Q` (question), `SQ`
//! (subquestion), `A` (answer option). The header is
//! `class, id, name, text, help, relevance, mandatory, other, related_id, scale_id, type`.
//!
//! Rows are decoded once into the [`TsvRow`] sum type, then folded into
//! the shared [`SurveyTables`](crate::formats::common::SurveyTables).

mod reader;
mod row;

pub use reader::{parse_tsv, read_tsv};
pub use row::{RawRow, TsvRow};
