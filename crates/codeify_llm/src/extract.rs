//! Response extractor: best-effort recovery of a JSON object from raw model text.
//!
//! Models asked for "a single JSON object ONLY" still wrap it in prose or
//! markdown fences often enough that a strict parse alone is not usable.
//! Two attempts, nothing fancier:
//!
//! 1. Parse the whole input; accept it if it is a JSON object.
//! 2. Parse the substring from the first `{` through the last `}`.
//!
//! Anything else is a miss. No brace balancing, no lenient repair of trailing
//! commas or single quotes: the model is trusted to emit one well-formed
//! object somewhere in its output, and a truncated or malformed object is
//! reported to the caller as `None` rather than guessed at.

use serde_json::Value;

/// Recover a JSON object from `text`, or `None` if neither attempt yields one.
///
/// Pure and infallible: parse failures never escape, and the returned object
/// is whatever the model sent — field validation is the caller's job.
pub fn extract_json(text: &str) -> Option<Value> {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        if value.is_object() {
            return Some(value);
        }
    }

    // `{` and `}` are ASCII, so the byte offsets from find/rfind are safe
    // slice boundaries even in multibyte text.
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    match serde_json::from_str::<Value>(&text[start..=end]) {
        Ok(value) if value.is_object() => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_object_is_returned_unchanged() {
        let input = r#"{"correctedCode":"print(1)","explanation":"fixed syntax"}"#;
        assert_eq!(
            extract_json(input),
            Some(json!({"correctedCode": "print(1)", "explanation": "fixed syntax"}))
        );
    }

    #[test]
    fn fenced_object_is_salvaged() {
        let input = "Sure! Here is the fix:\n```json\n{\"correctedCode\":\"x=1\",\"explanation\":\"added missing init\"}\n```\nLet me know if you need more.";
        assert_eq!(
            extract_json(input),
            Some(json!({"correctedCode": "x=1", "explanation": "added missing init"}))
        );
    }

    #[test]
    fn prose_without_braces_is_a_miss() {
        assert_eq!(extract_json("I could not find any issues."), None);
        assert_eq!(extract_json(""), None);
    }

    #[test]
    fn truncated_object_is_a_miss() {
        // Strict parse fails; the salvage substring is also unbalanced.
        assert_eq!(extract_json(r#"{"correctedCode": "a=1"#), None);
    }

    #[test]
    fn closing_brace_before_opening_brace_is_a_miss() {
        assert_eq!(extract_json("} nothing here {"), None);
    }

    #[test]
    fn malformed_json_between_braces_is_a_miss() {
        assert_eq!(extract_json("see { not json at all } done"), None);
    }

    #[test]
    fn non_object_json_does_not_count() {
        assert_eq!(extract_json("42"), None);
        assert_eq!(extract_json("[1, 2, 3]"), None);
        assert_eq!(extract_json("\"just a string\""), None);
    }

    #[test]
    fn object_inside_an_array_is_salvaged() {
        // The strict parse yields an array; the salvage span is the inner object.
        assert_eq!(extract_json(r#"[{"a": 1}]"#), Some(json!({"a": 1})));
    }

    #[test]
    fn extra_fields_pass_through_unvalidated() {
        let input = r#"{"rating": "Good", "notes": [1, 2]}"#;
        assert_eq!(
            extract_json(input),
            Some(json!({"rating": "Good", "notes": [1, 2]}))
        );
    }

    #[test]
    fn extraction_is_idempotent() {
        let inputs = [
            r#"{"correctedCode":"x=1"}"#,
            "prose only",
            "wrapped {\"k\":\"v\"} wrapped",
        ];
        for input in inputs {
            assert_eq!(extract_json(input), extract_json(input));
        }
    }

    #[test]
    fn multibyte_text_around_the_object_is_handled() {
        let input = "voilà → {\"k\": \"é\"} ← c'est tout";
        assert_eq!(extract_json(input), Some(json!({"k": "é"})));
    }
}
