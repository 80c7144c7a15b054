use schemars::JsonSchema;
use serde::Serialize;

use crate::arithmetic::ArithmeticError;

/// Result record returned by the `divide` tool.
///
/// Exactly one of `result` and `error` is present, matching `success`.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct DivisionOutcome {
    #[schemars(description = "true when the division was performed")]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "the quotient, present on success")]
    pub result: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "why the division was refused, present on failure")]
    pub error: Option<String>,
}

impl DivisionOutcome {
    pub fn success(result: f64) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(error.into()),
        }
    }
}

impl From<Result<f64, ArithmeticError>> for DivisionOutcome {
    fn from(value: Result<f64, ArithmeticError>) -> Self {
        match value {
            Ok(result) => Self::success(result),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}
