//! Request and response payloads for the check/solve calls.
//!
//! Requests model the JSON bodies of the reference deployment; `Option`
//! fields distinguish an absent field from a present one. Responses
//! serialize untagged so the payloads come out as plain objects:
//! `{"solution": ...}`, `{"valid": true}`, `{"valid": false, "conflict":
//! [...]}` or `{"error": ...}`.

use crate::ApiError;
use serde::{Deserialize, Serialize};
use sudoku_engine::Axis;

/// Body of a solve call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveRequest {
    /// 81-character puzzle string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub puzzle: Option<String>,
}

/// Body of a placement-check call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    /// 81-character puzzle string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub puzzle: Option<String>,
    /// Target cell, row letter plus column digit ("A1" through "I9")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<String>,
    /// Candidate digit, "1" through "9"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Outcome of a solve call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SolveResponse {
    /// The completed 81-character grid
    Solution { solution: String },
    /// A user-input error, reported as payload data
    Error { error: String },
}

impl SolveResponse {
    pub(crate) fn error(err: ApiError) -> Self {
        SolveResponse::Error {
            error: err.to_string(),
        }
    }
}

/// Outcome of a placement-check call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CheckResponse {
    /// The placement violates no axis
    Valid { valid: bool },
    /// The placement conflicts on the listed axes
    Invalid { valid: bool, conflict: Vec<Axis> },
    /// A user-input error, reported as payload data
    Error { error: String },
}

impl CheckResponse {
    pub(crate) fn valid() -> Self {
        CheckResponse::Valid { valid: true }
    }

    pub(crate) fn invalid(conflict: Vec<Axis>) -> Self {
        CheckResponse::Invalid {
            valid: false,
            conflict,
        }
    }

    pub(crate) fn error(err: ApiError) -> Self {
        CheckResponse::Error {
            error: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_fields_deserialize_to_none() {
        let req: CheckRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(req, CheckRequest::default());

        let req: CheckRequest =
            serde_json::from_value(json!({ "coordinate": "A1", "value": "5" })).unwrap();
        assert_eq!(req.puzzle, None);
        assert_eq!(req.coordinate.as_deref(), Some("A1"));
        assert_eq!(req.value.as_deref(), Some("5"));
    }

    #[test]
    fn test_response_payload_shapes() {
        assert_eq!(
            serde_json::to_value(CheckResponse::valid()).unwrap(),
            json!({ "valid": true })
        );
        assert_eq!(
            serde_json::to_value(CheckResponse::invalid(vec![Axis::Row, Axis::Region])).unwrap(),
            json!({ "valid": false, "conflict": ["row", "region"] })
        );
        assert_eq!(
            serde_json::to_value(CheckResponse::error(ApiError::InvalidValue)).unwrap(),
            json!({ "error": "Invalid value" })
        );
        assert_eq!(
            serde_json::to_value(SolveResponse::Solution {
                solution: "1".repeat(81),
            })
            .unwrap(),
            json!({ "solution": "1".repeat(81) })
        );
    }
}
