//! Tagged row decoding for the tabular export

use std::collections::HashMap;

/// Column-addressed view over one raw record.
///
/// Missing columns and missing cells both read as the empty string; a
/// partially-populated export never fails a row.
pub struct RawRow<'a> {
    columns: &'a HashMap<String, usize>,
    record: &'a csv::StringRecord,
}

impl<'a> RawRow<'a> {
    pub fn new(columns: &'a HashMap<String, usize>, record: &'a csv::StringRecord) -> Self {
        Self { columns, record }
    }

    /// Get a cell by column name, defaulting to the empty string.
    pub fn get(&self, column: &str) -> &str {
        self.columns
            .get(column)
            .and_then(|&idx| self.record.get(idx))
            .unwrap_or("")
    }

    /// Read a `Y`/`N` flag column. Anything but `Y` is false.
    pub fn flag(&self, column: &str) -> bool {
        self.get(column) == "Y"
    }

    /// Read an integer column, defaulting to zero.
    pub fn int(&self, column: &str) -> i64 {
        self.get(column).trim().parse().unwrap_or(0)
    }

    fn owned(&self, column: &str) -> String {
        self.get(column).to_string()
    }
}

/// One decoded export row, discriminated by the `class` column.
#[derive(Debug, Clone, PartialEq)]
pub enum TsvRow {
    /// `S` - a survey-level setting (named value).
    Setting {
        name: String,
        text: String,
    },
    /// `G` - a question group.
    Group {
        id: String,
        text: String,
        help: String,
        relevance: String,
    },
    /// `Q` - a question, referencing its group via `related_id`.
    Question {
        id: String,
        name: String,
        text: String,
        help: String,
        relevance: String,
        mandatory: bool,
        other: bool,
        related_id: String,
        type_code: String,
    },
    /// `SQ` - a subquestion, referencing its parent question.
    Subquestion {
        name: String,
        text: String,
        related_id: String,
    },
    /// `A` - an answer option, referencing its parent question.
    Answer {
        name: String,
        text: String,
        related_id: String,
        scale_id: i64,
    },
}

impl TsvRow {
    /// Decode one record.
    ///
    /// Returns `None` when the class code is missing or unrecognized, or
    /// when a `G`/`Q` row carries no primary id. Such rows are skipped
    /// without error.
    pub fn decode(raw: &RawRow<'_>) -> Option<Self> {
        match raw.get("class") {
            "S" => Some(Self::Setting {
                name: raw.owned("name"),
                text: raw.owned("text"),
            }),
            "G" => {
                let id = raw.owned("id");
                if id.is_empty() {
                    return None;
                }
                Some(Self::Group {
                    id,
                    text: raw.owned("text"),
                    help: raw.owned("help"),
                    relevance: raw.owned("relevance"),
                })
            }
            "Q" => {
                let id = raw.owned("id");
                if id.is_empty() {
                    return None;
                }
                Some(Self::Question {
                    id,
                    name: raw.owned("name"),
                    text: raw.owned("text"),
                    help: raw.owned("help"),
                    relevance: raw.owned("relevance"),
                    mandatory: raw.flag("mandatory"),
                    other: raw.flag("other"),
                    related_id: raw.owned("related_id"),
                    type_code: raw.owned("type"),
                })
            }
            "SQ" => Some(Self::Subquestion {
                name: raw.owned("name"),
                text: raw.owned("text"),
                related_id: raw.owned("related_id"),
            }),
            "A" => Some(Self::Answer {
                name: raw.owned("name"),
                text: raw.owned("text"),
                related_id: raw.owned("related_id"),
                scale_id: raw.int("scale_id"),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn columns(names: &[&str]) -> HashMap<String, usize> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| ((*n).to_string(), i))
            .collect()
    }

    #[test]
    fn test_decode_question_row() {
        let cols = columns(&[
            "class",
            "id",
            "name",
            "text",
            "help",
            "relevance",
            "mandatory",
            "other",
            "related_id",
            "scale_id",
            "type",
        ]);
        let record = csv::StringRecord::from(vec![
            "Q", "42", "Q1", "How are you?", "", "1", "Y", "N", "7", "", "L",
        ]);
        let row = TsvRow::decode(&RawRow::new(&cols, &record));
        assert_eq!(
            row,
            Some(TsvRow::Question {
                id: "42".to_string(),
                name: "Q1".to_string(),
                text: "How are you?".to_string(),
                help: String::new(),
                relevance: "1".to_string(),
                mandatory: true,
                other: false,
                related_id: "7".to_string(),
                type_code: "L".to_string(),
            })
        );
    }

    #[test]
    fn test_unknown_class_is_skipped() {
        let cols = columns(&["class", "id"]);
        let record = csv::StringRecord::from(vec!["Z", "1"]);
        assert_eq!(TsvRow::decode(&RawRow::new(&cols, &record)), None);

        let record = csv::StringRecord::from(vec!["", "1"]);
        assert_eq!(TsvRow::decode(&RawRow::new(&cols, &record)), None);
    }

    #[test]
    fn test_group_without_id_is_skipped() {
        let cols = columns(&["class", "id", "text"]);
        let record = csv::StringRecord::from(vec!["G", "", "Orphan group"]);
        assert_eq!(TsvRow::decode(&RawRow::new(&cols, &record)), None);
    }

    #[test]
    fn test_missing_columns_default() {
        // Export with a shortened header still decodes.
        let cols = columns(&["class", "id", "name", "text"]);
        let record = csv::StringRecord::from(vec!["Q", "1", "Q1", "Text"]);
        let row = TsvRow::decode(&RawRow::new(&cols, &record)).unwrap();
        match row {
            TsvRow::Question {
                mandatory,
                other,
                type_code,
                related_id,
                ..
            } => {
                assert!(!mandatory);
                assert!(!other);
                assert_eq!(type_code, "");
                assert_eq!(related_id, "");
            }
            other_row => panic!("expected question row, got {other_row:?}"),
        }
    }

    #[test]
    fn test_short_record_defaults() {
        // Record with fewer cells than the header has columns.
        let cols = columns(&["class", "id", "name", "text", "help"]);
        let record = csv::StringRecord::from(vec!["G", "3"]);
        let row = TsvRow::decode(&RawRow::new(&cols, &record)).unwrap();
        assert_eq!(
            row,
            TsvRow::Group {
                id: "3".to_string(),
                text: String::new(),
                help: String::new(),
                relevance: String::new(),
            }
        );
    }
}
