//! Summary statistics

use crate::error::Result;
use crate::types::JsonObject;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Summary payload as returned (after the `data` envelope)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryData {
    pub summary: Summary,
}

impl SummaryData {
    /// Parse an output record
    pub fn from_record(record: &JsonObject) -> Result<Self> {
        Ok(serde_json::from_value(Value::Object(record.clone()))?)
    }
}

/// Aggregate statistics across evaluations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Summary {
    pub total_evaluations: u64,
    pub avg_performance: Option<Average>,
    pub avg_potential: Option<Average>,
    pub iterations: Vec<IterationSummary>,
}

/// Per-iteration breakdown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IterationSummary {
    pub iteration: i64,
    pub count: u64,
    pub avg_performance: Option<f64>,
    pub avg_potential: Option<f64>,
}

/// An average the service sends either as a number or as a formatted string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Average {
    Number(f64),
    Text(String),
}

impl Average {
    /// Numeric value, if the text form parses
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl std::fmt::Display for Average {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}
