use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Successful backend response. `segments` is kept as raw JSON since the
/// backend owns its shape; it is only ever pretty-printed for display.
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptionResult {
    pub language: String,
    pub duration: f64,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_raw: Option<String>,
    #[serde(default)]
    pub segments: Value,
}

/// Error body the backend (and this relay) returns on failure.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_result() {
        let body = r#"{
            "language": "mn",
            "duration": 10.0,
            "text": "сайн байна уу",
            "text_raw": "сайн байна уу.",
            "segments": [{"start": 0.0, "end": 10.0, "text": "сайн байна уу"}]
        }"#;
        let result: TranscriptionResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.language, "mn");
        assert_eq!(result.duration, 10.0);
        assert_eq!(result.text, "сайн байна уу");
        assert_eq!(result.text_raw.as_deref(), Some("сайн байна уу."));
        assert!(result.segments.is_array());
    }

    #[test]
    fn parses_result_without_raw_text() {
        let body = r#"{"language":"mn","duration":3.5,"text":"за","segments":[]}"#;
        let result: TranscriptionResult = serde_json::from_str(body).unwrap();
        assert!(result.text_raw.is_none());
    }

    #[test]
    fn parses_error_body() {
        let body: ErrorBody = serde_json::from_str(r#"{"error":"decode failed"}"#).unwrap();
        assert_eq!(body.error, "decode failed");
    }
}
