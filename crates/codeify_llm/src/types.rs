//! Fix-request payload: the structured result a fix prompt asks the model for.

use serde::Deserialize;
use serde_json::Value;

/// Placeholder shown when the model omits (or empties) the explanation field.
pub const NO_EXPLANATION: &str = "No explanation provided.";

/// The two-field object the fix prompt requests.
///
/// `corrected_code` must be a non-empty string for the payload to count as
/// usable; `explanation` falls back to [`NO_EXPLANATION`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FixPayload {
    #[serde(rename = "correctedCode")]
    pub corrected_code: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub explanation: String,
}

/// Absent, `null`, and `""` all mean "no explanation"; models emit each.
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

impl FixPayload {
    /// Validate an extracted JSON object into a usable payload.
    ///
    /// `None` when `correctedCode` is missing, not a string, or empty.
    pub fn from_value(value: Value) -> Option<FixPayload> {
        let mut payload: FixPayload = serde_json::from_value(value).ok()?;
        if payload.corrected_code.is_empty() {
            return None;
        }
        if payload.explanation.is_empty() {
            payload.explanation = NO_EXPLANATION.to_string();
        }
        Some(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_payload_is_accepted() {
        let payload = FixPayload::from_value(json!({
            "correctedCode": "print(1)",
            "explanation": "fixed syntax"
        }))
        .unwrap();
        assert_eq!(payload.corrected_code, "print(1)");
        assert_eq!(payload.explanation, "fixed syntax");
    }

    #[test]
    fn missing_explanation_gets_the_placeholder() {
        let payload = FixPayload::from_value(json!({"correctedCode": "x=1"})).unwrap();
        assert_eq!(payload.explanation, NO_EXPLANATION);
    }

    #[test]
    fn empty_explanation_gets_the_placeholder() {
        let payload =
            FixPayload::from_value(json!({"correctedCode": "x=1", "explanation": ""})).unwrap();
        assert_eq!(payload.explanation, NO_EXPLANATION);
    }

    #[test]
    fn null_explanation_keeps_the_fix_and_gets_the_placeholder() {
        let payload =
            FixPayload::from_value(json!({"correctedCode": "x=1", "explanation": null})).unwrap();
        assert_eq!(payload.corrected_code, "x=1");
        assert_eq!(payload.explanation, NO_EXPLANATION);
    }

    #[test]
    fn null_corrected_code_is_still_rejected() {
        assert_eq!(
            FixPayload::from_value(json!({"correctedCode": null, "explanation": "hm"})),
            None
        );
    }

    #[test]
    fn missing_or_empty_corrected_code_is_rejected() {
        assert_eq!(FixPayload::from_value(json!({"explanation": "hm"})), None);
        assert_eq!(FixPayload::from_value(json!({"correctedCode": ""})), None);
    }

    #[test]
    fn non_string_corrected_code_is_rejected() {
        assert_eq!(FixPayload::from_value(json!({"correctedCode": 42})), None);
        assert_eq!(
            FixPayload::from_value(json!({"correctedCode": ["a", "b"]})),
            None
        );
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let payload = FixPayload::from_value(json!({
            "correctedCode": "x=1",
            "confidence": 0.9
        }))
        .unwrap();
        assert_eq!(payload.corrected_code, "x=1");
    }
}
