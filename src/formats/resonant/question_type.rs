//! Question type mapping
//!
//! The code table below is the compatibility contract with the Resonant
//! schema and must not drift.

use serde::{Deserialize, Serialize};

/// A Resonant question type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    LongText,
    Text,
    MultipleChoiceSingle,
    MultipleChoiceMultiple,
    Array,
    Ranking,
    Date,
    YesNo,
    TextDisplay,
    Equation,
    Dropdown,
}

impl QuestionType {
    /// Map a LimeSurvey question type code to the Resonant type.
    ///
    /// `T` long text, `S` short text, `L` list (radio), `M` multiple
    /// choice, `F` array, `R` ranking, `5` five-point choice, `D` date,
    /// `Y` yes/no, `X` text display, `*` equation, `!` dropdown list.
    /// Any other code falls back to [`QuestionType::Text`].
    pub fn from_code(code: &str) -> Self {
        match code {
            "T" => Self::LongText,
            "S" => Self::Text,
            "L" => Self::MultipleChoiceSingle,
            "M" => Self::MultipleChoiceMultiple,
            "F" => Self::Array,
            "R" => Self::Ranking,
            "5" => Self::MultipleChoiceSingle,
            "D" => Self::Date,
            "Y" => Self::YesNo,
            "X" => Self::TextDisplay,
            "*" => Self::Equation,
            "!" => Self::Dropdown,
            _ => Self::Text,
        }
    }

    /// The schema name for this type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LongText => "long_text",
            Self::Text => "text",
            Self::MultipleChoiceSingle => "multiple_choice_single",
            Self::MultipleChoiceMultiple => "multiple_choice_multiple",
            Self::Array => "array",
            Self::Ranking => "ranking",
            Self::Date => "date",
            Self::YesNo => "yes_no",
            Self::TextDisplay => "text_display",
            Self::Equation => "equation",
            Self::Dropdown => "dropdown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_code_table_is_exact() {
        let table = [
            ("T", QuestionType::LongText),
            ("S", QuestionType::Text),
            ("L", QuestionType::MultipleChoiceSingle),
            ("M", QuestionType::MultipleChoiceMultiple),
            ("F", QuestionType::Array),
            ("R", QuestionType::Ranking),
            ("5", QuestionType::MultipleChoiceSingle),
            ("D", QuestionType::Date),
            ("Y", QuestionType::YesNo),
            ("X", QuestionType::TextDisplay),
            ("*", QuestionType::Equation),
            ("!", QuestionType::Dropdown),
        ];
        for (code, expected) in table {
            assert_eq!(QuestionType::from_code(code), expected, "code {code}");
        }
    }

    #[test]
    fn test_unknown_codes_fall_back_to_text() {
        for code in ["Z", "", "q", "LL", "?"] {
            assert_eq!(QuestionType::from_code(code), QuestionType::Text);
        }
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(
            serde_json::to_string(&QuestionType::MultipleChoiceSingle).unwrap(),
            "\"multiple_choice_single\""
        );
        assert_eq!(
            serde_json::to_string(&QuestionType::YesNo).unwrap(),
            "\"yes_no\""
        );
        assert_eq!(QuestionType::Equation.as_str(), "equation");
    }
}
