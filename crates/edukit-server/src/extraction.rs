//! Recovers the question array from free-form model text.
//!
//! Models often wrap JSON in markdown fences or surround it with prose, so
//! extraction strips one layer of fences and then tries an ordered list of
//! parse strategies, returning the first that yields an array.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

/// First `[` through the last `]`, across newlines.
static ARRAY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\[.*\]").expect("array pattern is a valid regex"));

type Strategy = fn(&str) -> Option<Vec<Value>>;

const STRATEGIES: &[(&str, Strategy)] = &[
    ("direct", parse_direct as Strategy),
    ("embedded_array", parse_embedded_array as Strategy),
];

#[derive(Debug, Error)]
#[error("no JSON question array found in model output")]
pub struct ExtractionError {
    /// The model text exactly as received.
    pub raw: String,
}

/// Parse `text` into a list of question values.
pub fn extract_questions(text: &str) -> Result<Vec<Value>, ExtractionError> {
    let stripped = strip_code_fence(text);

    for (name, strategy) in STRATEGIES {
        if let Some(questions) = strategy(stripped) {
            tracing::debug!(
                "Extracted {} question(s) with '{}' strategy",
                questions.len(),
                name
            );
            return Ok(questions);
        }
    }

    Err(ExtractionError {
        raw: text.to_string(),
    })
}

/// Remove a single layer of ``` fencing, including a language tag such as
/// `json` on the opening line.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Everything up to the first newline is the language tag.
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
    };

    body.strip_suffix("```").unwrap_or(body).trim()
}

fn parse_direct(text: &str) -> Option<Vec<Value>> {
    match serde_json::from_str::<Value>(text).ok()? {
        Value::Array(items) => Some(items),
        Value::Object(map) => Some(unwrap_envelope(map)),
        _ => None,
    }
}

/// `{"questions": [...]}` and similar single-key envelopes yield the inner
/// array; any other object is one question.
fn unwrap_envelope(map: serde_json::Map<String, Value>) -> Vec<Value> {
    if map.len() == 1 {
        if let Some(Value::Array(items)) = map.values().next() {
            return items.clone();
        }
    }
    vec![Value::Object(map)]
}

fn parse_embedded_array(text: &str) -> Option<Vec<Value>> {
    let found = ARRAY_PATTERN.find(text)?;
    serde_json::from_str::<Vec<Value>>(found.as_str()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_array_is_returned_unchanged() {
        let text = r#"[{"question":"2+2?","options":["3","4","5","6"],"correct":1}]"#;
        let questions = extract_questions(text).unwrap();
        assert_eq!(
            Value::Array(questions),
            serde_json::from_str::<Value>(text).unwrap()
        );
    }

    #[test]
    fn test_fenced_array_with_language_tag() {
        let text = "```json\n[{\"question\":\"2+2?\",\"options\":[\"3\",\"4\",\"5\",\"6\"],\"correct\":1}]\n```";
        let questions = extract_questions(text).unwrap();
        assert_eq!(
            questions,
            vec![json!({"question": "2+2?", "options": ["3", "4", "5", "6"], "correct": 1})]
        );
    }

    #[test]
    fn test_fence_without_language_tag() {
        assert_eq!(strip_code_fence("```\n[1, 2]\n```"), "[1, 2]");
        assert_eq!(strip_code_fence("  ```json [1]```  "), "[1]");
        assert_eq!(strip_code_fence("[1]"), "[1]");
    }

    #[test]
    fn test_only_one_fence_layer_is_stripped() {
        assert_eq!(strip_code_fence("```\n```json\n[]\n```\n```"), "```json\n[]\n```");
    }

    #[test]
    fn test_array_embedded_in_prose() {
        let text = r#"Here you go: [{"question":"A?","options":[1,2,3,4],"correct":0}] thanks"#;
        let questions = extract_questions(text).unwrap();
        assert_eq!(
            questions,
            vec![json!({"question": "A?", "options": [1, 2, 3, 4], "correct": 0})]
        );
    }

    #[test]
    fn test_single_object_is_wrapped() {
        let text = r#"{"question":"B?","options":["a","b","c","d"],"correct":1}"#;
        let questions = extract_questions(text).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0]["question"], "B?");
    }

    #[test]
    fn test_single_key_envelope_is_unwrapped() {
        let text = r#"{"questions":[{"question":"D?","options":[1,2,3,4],"correct":2}]}"#;
        let questions = extract_questions(text).unwrap();
        assert_eq!(
            questions,
            vec![json!({"question": "D?", "options": [1, 2, 3, 4], "correct": 2})]
        );
    }

    #[test]
    fn test_object_with_array_field_among_others_stays_whole() {
        let text = r#"{"question":"E?","options":["a","b","c","d"],"correct":3}"#;
        let questions = extract_questions(text).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0]["options"], json!(["a", "b", "c", "d"]));
    }

    #[test]
    fn test_content_is_not_validated() {
        let text = r#"[{"question":"C?","options":["x"],"correct":9}]"#;
        let questions = extract_questions(text).unwrap();
        assert_eq!(questions[0]["correct"], 9);
    }

    #[test]
    fn test_no_array_keeps_raw_text() {
        let text = "Sorry, I cannot help with that.";
        let err = extract_questions(text).unwrap_err();
        assert_eq!(err.raw, text);
    }

    #[test]
    fn test_unparsable_brackets_fail() {
        let text = "```json\n[question: what?]\n```";
        let err = extract_questions(text).unwrap_err();
        assert_eq!(err.raw, text);
    }

    #[test]
    fn test_scalar_json_is_not_a_question_list() {
        assert!(extract_questions("42").is_err());
        assert!(extract_questions("\"[not an array]\"").is_err());
    }
}
