//! Tabular export reading

use super::row::{RawRow, TsvRow};
use crate::error::{Error, Result};
use crate::formats::common::{
    AnswerRecord, GroupRecord, QuestionRecord, SubquestionRecord, SurveyTables,
};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Read a tab-separated survey-structure export from disk.
///
/// # Errors
/// Returns an error if the file cannot be read or the header is missing
/// the `class` column.
pub fn read_tsv<P: AsRef<Path>>(path: P) -> Result<SurveyTables> {
    let content = fs::read_to_string(path)?;
    parse_tsv(&content)
}

/// Parse a tab-separated survey-structure export.
///
/// The tabular export carries no explicit order column, so order indexes
/// are assigned by appearance: groups and questions get a running index,
/// subquestions and answer options a running index per parent question.
///
/// # Errors
/// Returns an error if the header is missing the `class` column or a row
/// is structurally unparseable.
pub fn parse_tsv(content: &str) -> Result<SurveyTables> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_reader(content.as_bytes());

    let columns: HashMap<String, usize> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.to_string(), idx))
        .collect();
    if !columns.contains_key("class") {
        return Err(Error::MissingColumn("class"));
    }

    let mut tables = SurveyTables::default();
    // Running order-index counters for rows grouped under a parent.
    let mut subquestion_counts: HashMap<String, i64> = HashMap::new();
    let mut answer_counts: HashMap<String, i64> = HashMap::new();

    for record in reader.records() {
        let record = record?;
        let raw = RawRow::new(&columns, &record);
        let Some(row) = TsvRow::decode(&raw) else {
            continue;
        };

        match row {
            TsvRow::Setting { name, text } => match name.as_str() {
                "surveyls_title" => tables.title = Some(text),
                "surveyls_description" => tables.description = Some(text),
                _ => {}
            },
            TsvRow::Group {
                id,
                text,
                help,
                relevance,
            } => {
                let order = tables.groups.len() as i64;
                tables.groups.push(GroupRecord {
                    id,
                    title: text,
                    description: help,
                    order,
                    relevance,
                    randomization_group: String::new(),
                });
            }
            TsvRow::Question {
                id,
                name,
                text,
                help,
                relevance,
                mandatory,
                other,
                related_id,
                type_code,
            } => {
                let order = tables.questions.len() as i64;
                tables.questions.push(QuestionRecord {
                    id,
                    group_id: related_id,
                    code: name,
                    text,
                    help,
                    type_code,
                    order,
                    relevance,
                    mandatory,
                    other,
                });
            }
            TsvRow::Subquestion {
                name,
                text,
                related_id,
            } => {
                let counter = subquestion_counts.entry(related_id.clone()).or_insert(0);
                let order = *counter;
                *counter += 1;
                tables.subquestions.push(SubquestionRecord {
                    parent_id: related_id,
                    code: name,
                    label: text,
                    order,
                });
            }
            TsvRow::Answer {
                name,
                text,
                related_id,
                scale_id,
            } => {
                let counter = answer_counts.entry(related_id.clone()).or_insert(0);
                let order = *counter;
                *counter += 1;
                tables.answers.push(AnswerRecord {
                    parent_id: related_id,
                    code: name,
                    label: text,
                    order,
                    scale_id: Some(scale_id),
                });
            }
        }
    }

    tracing::debug!(
        groups = tables.groups.len(),
        questions = tables.questions.len(),
        subquestions = tables.subquestions.len(),
        answers = tables.answers.len(),
        "ingested tabular export"
    );
    Ok(tables)
}
