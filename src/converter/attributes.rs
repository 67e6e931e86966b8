//! Attribute bag mapping
//!
//! Translates the open-ended `question_attributes` key/value bag into the
//! fixed optional fields of [`QuestionAttributes`]. Keys absent from the
//! bag stay `None`; unknown keys are ignored.

use crate::formats::common::AttributeBag;
use crate::formats::resonant::QuestionAttributes;

/// Map one question's attribute bag onto the fixed settings fields.
pub fn map_attributes(bag: &AttributeBag) -> QuestionAttributes {
    let get = |key: &str| bag.get(key).and_then(Clone::clone);

    QuestionAttributes {
        array_filter: get("array_filter"),
        array_filter_exclude: get("array_filter_exclude"),
        array_filter_style: get("array_filter_style"),
        display_columns: get("display_columns"),
        max_answers: get("max_answers"),
        min_answers: get("min_answers"),
        random_order: get("random_order"),
        other_replace_text: get("other_replace_text"),
        em_validation_q: get("em_validation_q"),
        em_validation_q_tip: get("em_validation_q_tip"),
        cssclass: get("cssclass"),
        exclude_all_others: get("exclude_all_others"),
        exclude_all_others_auto: get("exclude_all_others_auto"),
        hidden: get("hidden"),
        time_limit: get("time_limit"),
        time_limit_action: get("time_limit_action"),
        time_limit_message: get("time_limit_message"),
        time_limit_countdown_message: get("time_limit_countdown_message"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_absent_keys_stay_none() {
        let attrs = map_attributes(&AttributeBag::new());
        assert_eq!(attrs, QuestionAttributes::default());
        assert_eq!(attrs.display_columns, None);
    }

    #[test]
    fn test_present_keys_are_carried() {
        let mut bag = AttributeBag::new();
        bag.insert("display_columns".to_string(), Some("2".to_string()));
        bag.insert("random_order".to_string(), Some("1".to_string()));
        bag.insert("hidden".to_string(), Some("0".to_string()));
        let attrs = map_attributes(&bag);
        assert_eq!(attrs.display_columns, Some("2".to_string()));
        assert_eq!(attrs.random_order, Some("1".to_string()));
        // Falsy but specified stays distinguishable from absent.
        assert_eq!(attrs.hidden, Some("0".to_string()));
        assert_eq!(attrs.max_answers, None);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut bag = AttributeBag::new();
        bag.insert("not_a_real_attribute".to_string(), Some("x".to_string()));
        assert_eq!(map_attributes(&bag), QuestionAttributes::default());
    }

    #[test]
    fn test_null_json_for_absent_attributes() {
        let json = serde_json::to_string(&map_attributes(&AttributeBag::new())).unwrap();
        assert!(json.contains("\"array_filter\":null"));
        assert!(json.contains("\"time_limit_countdown_message\":null"));
    }
}
