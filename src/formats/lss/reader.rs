//! LSS archive reading
//!
//! Event-loop parser over the XML document. Only the survey tables this
//! crate consumes are collected; everything else (`conditions`,
//! `defaultvalues`, plugin tables) is skipped. The parser tolerates the
//! `<rows>` wrapper element, `<fields>` metadata blocks, CDATA bodies,
//! and self-closing column elements.

use super::document::{
    AnswerL10nRow, GroupL10nRow, LanguageSettingsRow, LssAnswerRow, LssDocument, LssGroupRow,
    LssQuestionRow, LssSubquestionRow, QuestionAttributeRow, QuestionL10nRow, RowFields,
};
use crate::error::Result;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::fs;
use std::path::Path;

/// The survey tables recognized in an LSS archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableKind {
    LanguageSettings,
    Groups,
    GroupL10ns,
    Questions,
    QuestionL10ns,
    QuestionAttributes,
    Subquestions,
    Answers,
    AnswerL10ns,
}

impl TableKind {
    fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            b"surveys_languagesettings" => Some(Self::LanguageSettings),
            b"groups" => Some(Self::Groups),
            b"group_l10ns" => Some(Self::GroupL10ns),
            b"questions" => Some(Self::Questions),
            b"question_l10ns" => Some(Self::QuestionL10ns),
            b"question_attributes" => Some(Self::QuestionAttributes),
            b"subquestions" => Some(Self::Subquestions),
            b"answers" => Some(Self::Answers),
            b"answer_l10ns" => Some(Self::AnswerL10ns),
            _ => None,
        }
    }

    fn name(self) -> &'static [u8] {
        match self {
            Self::LanguageSettings => b"surveys_languagesettings",
            Self::Groups => b"groups",
            Self::GroupL10ns => b"group_l10ns",
            Self::Questions => b"questions",
            Self::QuestionL10ns => b"question_l10ns",
            Self::QuestionAttributes => b"question_attributes",
            Self::Subquestions => b"subquestions",
            Self::Answers => b"answers",
            Self::AnswerL10ns => b"answer_l10ns",
        }
    }
}

/// Read an LSS archive from disk.
///
/// # Errors
/// Returns an error if the file cannot be read or the XML is malformed.
pub fn read_lss<P: AsRef<Path>>(path: P) -> Result<LssDocument> {
    let content = fs::read_to_string(path)?;
    parse_lss(&content)
}

/// Parse an LSS archive from an XML string.
///
/// Tables absent from the archive simply stay empty; a partially
/// populated export never fails the parse.
///
/// # Errors
/// Returns an error if the XML is malformed.
pub fn parse_lss(content: &str) -> Result<LssDocument> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut doc = LssDocument::default();
    let mut buf = Vec::new();

    let mut current_table: Option<TableKind> = None;
    let mut in_row = false;
    let mut fields = RowFields::new();
    let mut current_field: Option<String> = None;
    let mut value = String::new();
    // Depth of ignored elements nested inside a column element.
    let mut nested_depth = 0usize;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if in_row {
                    if current_field.is_none() {
                        current_field =
                            Some(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                        value.clear();
                    } else {
                        nested_depth += 1;
                    }
                } else if current_table.is_some() {
                    if e.name().as_ref() == b"row" {
                        in_row = true;
                        fields.clear();
                    }
                } else if let Some(table) = TableKind::from_name(e.name().as_ref()) {
                    current_table = Some(table);
                }
            }
            Ok(Event::Empty(e)) => {
                if in_row && current_field.is_none() {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    fields.insert(name, String::new());
                }
            }
            Ok(Event::Text(e)) => {
                if current_field.is_some() {
                    value.push_str(&e.unescape()?);
                }
            }
            Ok(Event::CData(e)) => {
                if current_field.is_some() {
                    value.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::End(e)) => {
                if nested_depth > 0 {
                    nested_depth -= 1;
                } else if let Some(field) = current_field.take_if(|f| f.as_bytes() == e.name().as_ref()) {
                    fields.insert(field, value.trim().to_string());
                    value.clear();
                } else if in_row && e.name().as_ref() == b"row" {
                    in_row = false;
                    if let Some(table) = current_table {
                        push_row(&mut doc, table, &fields);
                    }
                } else if current_table.is_some_and(|t| t.name() == e.name().as_ref()) && !in_row {
                    current_table = None;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        buf.clear();
    }

    tracing::debug!(
        groups = doc.groups.len(),
        questions = doc.questions.len(),
        subquestions = doc.subquestions.len(),
        answers = doc.answers.len(),
        attributes = doc.question_attributes.len(),
        "ingested LSS archive"
    );
    Ok(doc)
}

/// Dispatch one completed row to its table. Rows missing their primary id
/// are skipped without error.
fn push_row(doc: &mut LssDocument, table: TableKind, fields: &RowFields) {
    match table {
        TableKind::LanguageSettings => {
            if let Some(row) = LanguageSettingsRow::from_fields(fields) {
                doc.language_settings.push(row);
            }
        }
        TableKind::Groups => {
            if let Some(row) = LssGroupRow::from_fields(fields) {
                doc.groups.push(row);
            }
        }
        TableKind::GroupL10ns => {
            if let Some(row) = GroupL10nRow::from_fields(fields) {
                doc.group_l10ns.push(row);
            }
        }
        TableKind::Questions => {
            if let Some(row) = LssQuestionRow::from_fields(fields) {
                doc.questions.push(row);
            }
        }
        TableKind::QuestionL10ns => {
            if let Some(row) = QuestionL10nRow::from_fields(fields) {
                doc.question_l10ns.push(row);
            }
        }
        TableKind::QuestionAttributes => {
            if let Some(row) = QuestionAttributeRow::from_fields(fields) {
                doc.question_attributes.push(row);
            }
        }
        TableKind::Subquestions => {
            if let Some(row) = LssSubquestionRow::from_fields(fields) {
                doc.subquestions.push(row);
            }
        }
        TableKind::Answers => {
            if let Some(row) = LssAnswerRow::from_fields(fields) {
                doc.answers.push(row);
            }
        }
        TableKind::AnswerL10ns => {
            if let Some(row) = AnswerL10nRow::from_fields(fields) {
                doc.answer_l10ns.push(row);
            }
        }
    }
}
