//! API response types
//!
//! The backend does not use a uniform envelope: most endpoints return the
//! payload directly, a few wrap it in `{"data": ...}`. [`Envelope`] absorbs
//! that difference at the gateway boundary so callers never unwrap anything.

use serde::{Deserialize, Serialize};

/// Transport envelope: either a `{"data": ...}` wrapper or the bare payload.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    /// Unwrap to the inner payload regardless of shape.
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(inner) => inner,
        }
    }
}

/// Error body returned by the backend on 4xx/5xx (`{"detail": ...}`).
///
/// `detail` may be a string or a structured validation report, so it is kept
/// as a raw JSON value and rendered on demand.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Human-readable message, or `None` when the body carried no detail.
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
            None => None,
        }
    }
}

/// Simple acknowledgement (`{"message": ..., "count": ...}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(default)]
    pub count: Option<u64>,
}

/// Result of a batch operation.
///
/// Partial success is a completed operation, not a failure: both counts are
/// always reported, even when they diverge from the selection size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub success_count: u64,
    pub error_count: u64,
    #[serde(default)]
    pub success_ids: Vec<i64>,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl BatchOutcome {
    /// User-facing summary carrying both counts verbatim.
    pub fn summary(&self) -> String {
        format!(
            "completed: {} succeeded, {} failed",
            self.success_count, self.error_count
        )
    }

    pub fn is_partial(&self) -> bool {
        self.error_count > 0 && self.success_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_unwraps_both_shapes() {
        let wrapped: Envelope<Vec<i64>> = serde_json::from_str(r#"{"data":[1,2]}"#).unwrap();
        assert_eq!(wrapped.into_inner(), vec![1, 2]);

        let bare: Envelope<Vec<i64>> = serde_json::from_str("[3]").unwrap();
        assert_eq!(bare.into_inner(), vec![3]);
    }

    #[test]
    fn error_body_renders_string_and_structured_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail":"场景不存在"}"#).unwrap();
        assert_eq!(body.message().unwrap(), "场景不存在");

        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":[{"loc":["body","name"],"msg":"required"}]}"#)
                .unwrap();
        assert!(body.message().unwrap().contains("required"));

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.message().is_none());
    }

    #[test]
    fn batch_summary_contains_both_counts() {
        let outcome = BatchOutcome {
            success_count: 3,
            error_count: 2,
            success_ids: vec![1, 2, 3],
            errors: vec!["场景 9 不存在".into(), "场景 10 不存在".into()],
        };
        let summary = outcome.summary();
        assert!(summary.contains('3'));
        assert!(summary.contains('2'));
        assert!(outcome.is_partial());
    }
}
