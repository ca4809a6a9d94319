//! AI summary report types.
//!
//! The summary endpoint answers with either `{"error": "..."}` (nothing to
//! summarize) or a full report. That duck-typed split is resolved here, at
//! the client boundary, into [`SummaryOutcome`] so callers never probe
//! optional fields. List fields coming out of the LLM pipeline are decoded
//! leniently: a missing or malformed array becomes an empty one.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// Highlighted winner of the comparison.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BestApplication {
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub price: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub verdict: String,
    #[serde(default)]
    pub brief: String,
}

/// Per-applicant comparison row.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ComparisonEntry {
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub price: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub strengths: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub weaknesses: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SummaryReport {
    pub best_application: BestApplication,
    #[serde(default, deserialize_with = "lenient_list")]
    pub comparison: Vec<ComparisonEntry>,
}

/// Discriminated result of a summary run.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryOutcome {
    Report(SummaryReport),
    /// Server-provided reason, e.g. "No applications to summarize".
    Unavailable(String),
}

impl SummaryOutcome {
    /// Classify a raw summary payload. An `error` field wins over everything
    /// else; otherwise the payload must carry a `best_application`.
    pub fn from_wire(value: Value) -> ApiResult<Self> {
        if let Some(error) = value.get("error") {
            let message = match error {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Ok(Self::Unavailable(message));
        }

        let report: SummaryReport = serde_json::from_value(value)
            .map_err(|e| ApiError::Decode(format!("malformed summary report: {e}")))?;
        Ok(Self::Report(report))
    }
}

/// Accept a string or a bare number for price-like fields.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Decode a list, treating anything that is not a list of strings as empty.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}
