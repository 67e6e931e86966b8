//! Localization joins for the LSS archive
//!
//! Newer LimeSurvey exports keep display text in `*_l10ns` tables joined
//! by gid/qid/aid; older exports carry it inline. The join prefers the
//! l10n text and falls back to the inline column.

use super::document::LssDocument;
use crate::formats::common::{
    AnswerRecord, GroupRecord, QuestionRecord, SubquestionRecord, SurveyTables,
};
use std::collections::HashMap;

fn pick(l10n: Option<&String>, inline: &str) -> String {
    match l10n {
        Some(text) if !text.is_empty() => text.clone(),
        _ => inline.to_string(),
    }
}

/// Join the raw LSS tables into the shared relational form.
///
/// All lookup tables are built before any row is dereferenced, so row
/// order across tables does not matter. Rows referencing ids that never
/// appear are carried through unchanged; unresolved references are
/// handled later, during tree assembly.
pub fn to_tables(doc: &LssDocument) -> SurveyTables {
    let mut tables = SurveyTables::default();

    if let Some(settings) = doc.language_settings.first() {
        if !settings.title.is_empty() {
            tables.title = Some(settings.title.clone());
        }
        if !settings.description.is_empty() {
            tables.description = Some(settings.description.clone());
        }
    }

    // Lookup tables first (ingest-then-link).
    let group_names: HashMap<&str, (&String, &String)> = doc
        .group_l10ns
        .iter()
        .map(|row| (row.gid.as_str(), (&row.group_name, &row.description)))
        .collect();
    let question_texts: HashMap<&str, (&String, &String)> = doc
        .question_l10ns
        .iter()
        .map(|row| (row.qid.as_str(), (&row.question, &row.help)))
        .collect();
    let answer_texts: HashMap<&str, &String> = doc
        .answer_l10ns
        .iter()
        .map(|row| (row.aid.as_str(), &row.answer))
        .collect();

    for group in &doc.groups {
        let l10n = group_names.get(group.gid.as_str());
        let title = pick(l10n.map(|(name, _)| *name), &group.group_name);
        let title = if title.is_empty() {
            format!("Group {}", group.gid)
        } else {
            title
        };
        tables.groups.push(GroupRecord {
            id: group.gid.clone(),
            title,
            description: pick(l10n.map(|(_, description)| *description), ""),
            order: group.group_order,
            relevance: group.grelevance.clone(),
            randomization_group: group.randomization_group.clone(),
        });
    }

    for question in &doc.questions {
        let l10n = question_texts.get(question.qid.as_str());
        tables.questions.push(QuestionRecord {
            id: question.qid.clone(),
            group_id: question.gid.clone(),
            code: question.title.clone(),
            text: pick(l10n.map(|(text, _)| *text), &question.question),
            help: pick(l10n.map(|(_, help)| *help), &question.help),
            type_code: question.type_code.clone(),
            order: question.question_order,
            relevance: question.relevance.clone(),
            mandatory: question.mandatory,
            other: question.other,
        });
    }

    for subquestion in &doc.subquestions {
        // A subquestion's display label lives in question_l10ns under its
        // own qid; the short code is the fallback.
        let l10n = question_texts.get(subquestion.qid.as_str());
        let label = pick(l10n.map(|(text, _)| *text), &subquestion.question);
        let label = if label.is_empty() {
            subquestion.title.clone()
        } else {
            label
        };
        tables.subquestions.push(SubquestionRecord {
            parent_id: subquestion.parent_qid.clone(),
            code: subquestion.title.clone(),
            label,
            order: subquestion.question_order,
        });
    }

    for answer in &doc.answers {
        let label = pick(answer_texts.get(answer.aid.as_str()).copied(), &answer.answer);
        let label = if label.is_empty() {
            answer.code.clone()
        } else {
            label
        };
        tables.answers.push(AnswerRecord {
            parent_id: answer.qid.clone(),
            code: answer.code.clone(),
            label,
            order: answer.sortorder,
            scale_id: None,
        });
    }

    for row in &doc.question_attributes {
        tables
            .attributes
            .entry(row.qid.clone())
            .or_default()
            .insert(row.attribute.clone(), row.value.clone());
    }

    tables
}
