//! Tree reconstruction
//!
//! Turns the flat relational tables into the nested survey document:
//! groups → questions → {subquestions, answer options}. Runs strictly
//! after ingestion so every lookup table is complete before any foreign
//! key is dereferenced.

use super::SourceFormat;
use super::attributes::map_attributes;
use crate::formats::common::{AttributeBag, SurveyTables};
use crate::formats::resonant::{
    AnswerOption, Question, QuestionGroup, QuestionSettings, QuestionType, Subquestion, Survey,
    SurveyFormat, SurveySettings, SurveyStatus,
};
use std::collections::{HashMap, HashSet};

/// Order index assigned to the synthesized "other" subquestion; sorts
/// after anything a real export declares.
const OTHER_ORDER_INDEX: i64 = 999;

/// Counts of rows excluded because their foreign-key reference never
/// resolved. The conversion still succeeds; callers decide whether to
/// surface the counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssemblyReport {
    /// Questions whose group id matched no ingested group.
    pub dropped_questions: usize,
    /// Subquestions whose parent question id matched no ingested question.
    pub dropped_subquestions: usize,
    /// Answer options whose parent question id matched no ingested question.
    pub dropped_answers: usize,
}

impl AssemblyReport {
    pub fn has_drops(&self) -> bool {
        self.dropped_questions > 0 || self.dropped_subquestions > 0 || self.dropped_answers > 0
    }
}

/// Assemble the ordered survey tree from the shared relational tables.
///
/// Sibling ordering is a stable ascending sort on the source-declared
/// order index, so ties keep their first-encountered order and repeated
/// runs produce identical output.
pub fn assemble(tables: &SurveyTables, source: SourceFormat) -> (Survey, AssemblyReport) {
    let mut report = AssemblyReport::default();
    let empty_bag = AttributeBag::new();

    // Phase 1: lookup tables, before any reference is resolved.
    let mut groups: Vec<QuestionGroup> = Vec::with_capacity(tables.groups.len());
    let mut group_slots: HashMap<&str, usize> = HashMap::with_capacity(tables.groups.len());
    let mut sorted_groups: Vec<_> = tables.groups.iter().collect();
    sorted_groups.sort_by_key(|group| group.order);
    for record in sorted_groups {
        group_slots.insert(record.id.as_str(), groups.len());
        groups.push(QuestionGroup {
            title: record.title.clone(),
            description: record.description.clone(),
            order_index: record.order,
            relevance_logic: record.relevance.clone(),
            randomization_group: Some(record.randomization_group.clone())
                .filter(|name| !name.is_empty()),
            questions: Vec::new(),
        });
    }

    let question_ids: HashSet<&str> = tables
        .questions
        .iter()
        .map(|question| question.id.as_str())
        .collect();

    let mut subquestions_by_parent: HashMap<&str, Vec<&crate::formats::common::SubquestionRecord>> =
        HashMap::new();
    for record in &tables.subquestions {
        if question_ids.contains(record.parent_id.as_str()) {
            subquestions_by_parent
                .entry(record.parent_id.as_str())
                .or_default()
                .push(record);
        } else {
            report.dropped_subquestions += 1;
        }
    }

    let mut answers_by_parent: HashMap<&str, Vec<&crate::formats::common::AnswerRecord>> =
        HashMap::new();
    for record in &tables.answers {
        if question_ids.contains(record.parent_id.as_str()) {
            answers_by_parent
                .entry(record.parent_id.as_str())
                .or_default()
                .push(record);
        } else {
            report.dropped_answers += 1;
        }
    }

    // Phase 2: dereference foreign keys into owned child lists.
    let mut sorted_questions: Vec<_> = tables.questions.iter().collect();
    sorted_questions.sort_by_key(|question| question.order);

    for record in sorted_questions {
        let Some(&slot) = group_slots.get(record.group_id.as_str()) else {
            report.dropped_questions += 1;
            continue;
        };

        let bag = tables.attributes.get(&record.id).unwrap_or(&empty_bag);
        let attributes = match source {
            SourceFormat::Tsv => None,
            SourceFormat::Lss => Some(map_attributes(bag)),
        };

        let mut subquestions: Vec<Subquestion> = {
            let mut records = subquestions_by_parent
                .get(record.id.as_str())
                .cloned()
                .unwrap_or_default();
            records.sort_by_key(|subquestion| subquestion.order);
            records
                .into_iter()
                .map(|subquestion| Subquestion {
                    code: subquestion.code.clone(),
                    label: subquestion.label.clone(),
                    order_index: subquestion.order,
                })
                .collect()
        };

        // The explicit "other" choice always goes last, whatever order
        // indexes the source declared.
        if record.other {
            let label = attributes
                .as_ref()
                .and_then(|attrs| attrs.other_replace_text.clone())
                .filter(|text| !text.is_empty())
                .unwrap_or_else(|| "Other".to_string());
            subquestions.push(Subquestion {
                code: "other".to_string(),
                label,
                order_index: OTHER_ORDER_INDEX,
            });
        }

        let answer_options: Vec<AnswerOption> = {
            let mut records = answers_by_parent
                .get(record.id.as_str())
                .cloned()
                .unwrap_or_default();
            records.sort_by_key(|answer| answer.order);
            records
                .into_iter()
                .map(|answer| AnswerOption {
                    code: answer.code.clone(),
                    label: answer.label.clone(),
                    order_index: answer.order,
                    scale_id: answer.scale_id,
                })
                .collect()
        };

        let randomization_group = bag
            .get("random_group")
            .and_then(Clone::clone)
            .filter(|name| !name.is_empty());

        groups[slot].questions.push(Question {
            code: record.code.clone(),
            question_text: record.text.clone(),
            help_text: record.help.clone(),
            question_type: QuestionType::from_code(&record.type_code),
            settings: QuestionSettings {
                mandatory: record.mandatory,
                other_option: record.other,
                randomization_group,
                attributes,
            },
            relevance_logic: record.relevance.clone(),
            order_index: record.order,
            subquestions,
            answer_options,
        });
    }

    if report.dropped_questions > 0 {
        tracing::warn!(
            count = report.dropped_questions,
            "dropped questions referencing unknown groups"
        );
    }
    if report.dropped_subquestions > 0 {
        tracing::warn!(
            count = report.dropped_subquestions,
            "dropped subquestions referencing unknown questions"
        );
    }
    if report.dropped_answers > 0 {
        tracing::warn!(
            count = report.dropped_answers,
            "dropped answer options referencing unknown questions"
        );
    }

    let survey = Survey {
        title: tables
            .title
            .clone()
            .unwrap_or_else(|| "Imported Survey".to_string()),
        description: tables.description.clone().unwrap_or_default(),
        status: SurveyStatus::Draft,
        settings: SurveySettings {
            format: match source {
                SourceFormat::Tsv => SurveyFormat::GroupByGroup,
                SourceFormat::Lss => SurveyFormat::QuestionByQuestion,
            },
            ..SurveySettings::default()
        },
        question_groups: groups,
    };

    (survey, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::common::{
        AnswerRecord, GroupRecord, QuestionRecord, SubquestionRecord,
    };
    use pretty_assertions::assert_eq;

    fn group(id: &str, order: i64) -> GroupRecord {
        GroupRecord {
            id: id.to_string(),
            title: format!("Group {id}"),
            description: String::new(),
            order,
            relevance: "1".to_string(),
            randomization_group: String::new(),
        }
    }

    fn question(id: &str, group_id: &str, order: i64, type_code: &str) -> QuestionRecord {
        QuestionRecord {
            id: id.to_string(),
            group_id: group_id.to_string(),
            code: format!("Q{id}"),
            text: String::new(),
            help: String::new(),
            type_code: type_code.to_string(),
            order,
            relevance: "1".to_string(),
            mandatory: false,
            other: false,
        }
    }

    #[test]
    fn test_groups_and_questions_sorted_by_order_index() {
        let tables = SurveyTables {
            groups: vec![group("B", 5), group("A", 2)],
            questions: vec![
                question("3", "B", 9, "S"),
                question("1", "A", 1, "S"),
                question("2", "B", 4, "S"),
            ],
            ..SurveyTables::default()
        };
        let (survey, report) = assemble(&tables, SourceFormat::Tsv);
        assert_eq!(report, AssemblyReport::default());
        let orders: Vec<i64> = survey
            .question_groups
            .iter()
            .map(|g| g.order_index)
            .collect();
        assert_eq!(orders, vec![2, 5]);
        let second_group: Vec<i64> = survey.question_groups[1]
            .questions
            .iter()
            .map(|q| q.order_index)
            .collect();
        assert_eq!(second_group, vec![4, 9]);
    }

    #[test]
    fn test_stable_order_for_ties() {
        let tables = SurveyTables {
            groups: vec![group("first", 0), group("second", 0)],
            ..SurveyTables::default()
        };
        let (survey, _) = assemble(&tables, SourceFormat::Tsv);
        assert_eq!(survey.question_groups[0].title, "Group first");
        assert_eq!(survey.question_groups[1].title, "Group second");
    }

    #[test]
    fn test_orphans_are_dropped_and_counted() {
        let tables = SurveyTables {
            groups: vec![group("G1", 0)],
            questions: vec![question("1", "G1", 0, "L"), question("2", "missing", 1, "L")],
            subquestions: vec![SubquestionRecord {
                parent_id: "nobody".to_string(),
                code: "SQ1".to_string(),
                label: "orphan".to_string(),
                order: 0,
            }],
            answers: vec![AnswerRecord {
                parent_id: "nobody".to_string(),
                code: "A1".to_string(),
                label: "orphan".to_string(),
                order: 0,
                scale_id: None,
            }],
            ..SurveyTables::default()
        };
        let (survey, report) = assemble(&tables, SourceFormat::Tsv);
        assert_eq!(survey.question_groups[0].questions.len(), 1);
        assert_eq!(
            report,
            AssemblyReport {
                dropped_questions: 1,
                dropped_subquestions: 1,
                dropped_answers: 1,
            }
        );
        assert!(report.has_drops());
    }

    #[test]
    fn test_other_subquestion_appended_last() {
        let mut q = question("1", "G1", 0, "M");
        q.other = true;
        let tables = SurveyTables {
            groups: vec![group("G1", 0)],
            questions: vec![q],
            subquestions: vec![
                SubquestionRecord {
                    parent_id: "1".to_string(),
                    code: "SQ2".to_string(),
                    label: "Second".to_string(),
                    order: 2000,
                },
                SubquestionRecord {
                    parent_id: "1".to_string(),
                    code: "SQ1".to_string(),
                    label: "First".to_string(),
                    order: 1,
                },
            ],
            ..SurveyTables::default()
        };
        let (survey, _) = assemble(&tables, SourceFormat::Tsv);
        let codes: Vec<&str> = survey.question_groups[0].questions[0]
            .subquestions
            .iter()
            .map(|s| s.code.as_str())
            .collect();
        // "other" goes last even though a source row has a larger index.
        assert_eq!(codes, vec!["SQ1", "SQ2", "other"]);
    }

    #[test]
    fn test_other_label_from_replace_text_attribute() {
        let mut q = question("1", "G1", 0, "L");
        q.other = true;
        let mut bag = AttributeBag::new();
        bag.insert(
            "other_replace_text".to_string(),
            Some("None of these".to_string()),
        );
        let mut tables = SurveyTables {
            groups: vec![group("G1", 0)],
            questions: vec![q],
            ..SurveyTables::default()
        };
        tables.attributes.insert("1".to_string(), bag);

        let (survey, _) = assemble(&tables, SourceFormat::Lss);
        let subs = &survey.question_groups[0].questions[0].subquestions;
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].code, "other");
        assert_eq!(subs[0].label, "None of these");
        assert_eq!(subs[0].order_index, OTHER_ORDER_INDEX);
    }

    #[test]
    fn test_attribute_block_only_for_lss() {
        let tables = SurveyTables {
            groups: vec![group("G1", 0)],
            questions: vec![question("1", "G1", 0, "L")],
            ..SurveyTables::default()
        };
        let (tsv_survey, _) = assemble(&tables, SourceFormat::Tsv);
        assert!(tsv_survey.question_groups[0].questions[0]
            .settings
            .attributes
            .is_none());

        let (lss_survey, _) = assemble(&tables, SourceFormat::Lss);
        assert!(lss_survey.question_groups[0].questions[0]
            .settings
            .attributes
            .is_some());
        assert_eq!(lss_survey.settings.format, SurveyFormat::QuestionByQuestion);
        assert_eq!(tsv_survey.settings.format, SurveyFormat::GroupByGroup);
    }

    #[test]
    fn test_default_title_when_export_has_none() {
        let (survey, _) = assemble(&SurveyTables::default(), SourceFormat::Tsv);
        assert_eq!(survey.title, "Imported Survey");
        assert_eq!(survey.status, SurveyStatus::Draft);
    }
}
