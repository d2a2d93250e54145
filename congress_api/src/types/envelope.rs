//! Response envelope inspection and unwrapping.

use serde_json::Value;

/// Error text the APIs use for missing records.
pub const RECORD_NOT_FOUND: &str = "Record not found";

/// The status and pagination fields of a decoded response envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Envelope {
    /// Top-level `status` (`"OK"` on success).
    pub status: Option<String>,
    /// Messages from the `errors` array, in order.
    pub errors: Vec<String>,
    /// Top-level `num_results`, when present.
    pub num_results: Option<u64>,
    /// Top-level `offset`, when present.
    pub offset: Option<u64>,
}

impl Envelope {
    /// Reads the envelope fields out of a decoded body. Missing or oddly typed
    /// fields are left empty.
    pub fn inspect(value: &Value) -> Self {
        let status = value
            .get("status")
            .and_then(Value::as_str)
            .map(str::to_string);
        let errors = value
            .get("errors")
            .and_then(Value::as_array)
            .map(|errors| errors.iter().filter_map(error_message).collect())
            .unwrap_or_default();
        Self {
            status,
            errors,
            num_results: value.get("num_results").and_then(as_count),
            offset: value.get("offset").and_then(as_count),
        }
    }

    /// The first error message, if any.
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    pub fn is_record_not_found(&self) -> bool {
        self.first_error() == Some(RECORD_NOT_FOUND)
    }

    pub fn is_ok(&self) -> bool {
        self.status.as_deref() == Some("OK")
    }
}

fn error_message(entry: &Value) -> Option<String> {
    match entry {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map
            .get("error")
            .or_else(|| map.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

// Counts arrive as numbers from one API and as strings from the other.
fn as_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// How a successful envelope is reduced before it is handed to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub enum Unwrap {
    /// The first element of the `results` array.
    #[default]
    FirstResult,
    /// The whole `results` value.
    FullResults,
    /// The decoded envelope, untouched.
    RawEnvelope,
    /// A caller-supplied projection; `None` means the envelope had no usable payload.
    Custom(fn(Value) -> Option<Value>),
}

impl Unwrap {
    /// Applies the policy. The error is a description of what was missing.
    pub fn apply(self, value: Value) -> Result<Value, String> {
        match self {
            Unwrap::RawEnvelope => Ok(value),
            Unwrap::FullResults => take_results(value),
            Unwrap::FirstResult => match take_results(value)? {
                Value::Array(items) => items
                    .into_iter()
                    .next()
                    .ok_or_else(|| "response `results` is empty".to_string()),
                other => Err(format!(
                    "expected `results` to be an array, got {}",
                    kind(&other)
                )),
            },
            Unwrap::Custom(project) => {
                project(value).ok_or_else(|| "custom unwrap found no payload".to_string())
            }
        }
    }
}

fn take_results(value: Value) -> Result<Value, String> {
    match value {
        Value::Object(mut map) => map
            .remove("results")
            .ok_or_else(|| "response has no `results` field".to_string()),
        other => Err(format!(
            "expected a JSON object envelope, got {}",
            kind(&other)
        )),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_result_unwraps_single_member() {
        let payload = json!({"results": [{"id": "P000197"}]});
        assert_eq!(
            Unwrap::FirstResult.apply(payload).unwrap(),
            json!({"id": "P000197"})
        );
    }

    #[test]
    fn full_results_keeps_list() {
        let payload = json!({"results": [{"id": "P000197"}]});
        assert_eq!(
            Unwrap::FullResults.apply(payload).unwrap(),
            json!([{"id": "P000197"}])
        );
    }

    #[test]
    fn raw_envelope_is_untouched() {
        let payload = json!({"status": "OK", "results": [{"id": "P000197"}]});
        assert_eq!(Unwrap::RawEnvelope.apply(payload.clone()).unwrap(), payload);
    }

    #[test]
    fn custom_projection() {
        fn copyright(value: Value) -> Option<Value> {
            value.get("copyright").cloned()
        }
        let payload = json!({"copyright": "(c) ProPublica", "results": []});
        assert_eq!(
            Unwrap::Custom(copyright).apply(payload).unwrap(),
            json!("(c) ProPublica")
        );
        assert!(Unwrap::Custom(copyright).apply(json!({})).is_err());
    }

    #[test]
    fn first_result_on_bad_shapes() {
        assert!(Unwrap::FirstResult.apply(json!({"results": []})).is_err());
        assert!(Unwrap::FirstResult.apply(json!({"results": {"a": 1}})).is_err());
        assert!(Unwrap::FirstResult.apply(json!({"status": "OK"})).is_err());
        assert!(Unwrap::FullResults.apply(json!([1, 2])).is_err());
    }

    #[test]
    fn inspects_envelope_fields() {
        let env = Envelope::inspect(&json!({
            "status": "ERROR",
            "errors": [{"error": "Record not found"}, "second"],
            "num_results": "20",
            "offset": 40
        }));
        assert_eq!(env.status.as_deref(), Some("ERROR"));
        assert_eq!(env.errors, vec!["Record not found", "second"]);
        assert!(env.is_record_not_found());
        assert!(!env.is_ok());
        assert_eq!(env.num_results, Some(20));
        assert_eq!(env.offset, Some(40));
    }

    #[test]
    fn inspects_bare_results() {
        let env = Envelope::inspect(&json!({"results": []}));
        assert_eq!(env, Envelope::default());
        assert_eq!(env.first_error(), None);
    }
}
