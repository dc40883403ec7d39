use serde::{Deserialize, Serialize};

/// Failure body of the report endpoint. Only `error` is surfaced; the
/// server may attach extra detail fields that the UI ignores.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_error_body() {
        let body: ApiError = serde_json::from_str(r#"{ "error": "Title required" }"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("Title required"));
    }

    #[test]
    fn tolerates_missing_and_extra_fields() {
        let body: ApiError =
            serde_json::from_str(r#"{ "missing": ["title"], "detail": 1 }"#).unwrap();
        assert!(body.error.is_none());
    }
}
