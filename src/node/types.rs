//! Node parameter and output types

use crate::error::{Error, Result};
use crate::fetcher::{EvaluationOptions, DEFAULT_LIMIT};
use crate::types::{JsonObject, JsonValue};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Resource the node operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Evaluation,
}

impl Resource {
    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Evaluation => "evaluation",
        }
    }
}

impl FromStr for Resource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "evaluation" => Ok(Self::Evaluation),
            other => Err(Error::UnknownResource {
                resource: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operation on the evaluation resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// List evaluations, one page or all of them
    GetAll,
    /// Aggregate statistics
    GetSummary,
}

impl Operation {
    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetAll => "getAll",
            Self::GetSummary => "getSummary",
        }
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "getAll" => Ok(Self::GetAll),
            "getSummary" => Ok(Self::GetSummary),
            other => Err(Error::UnknownOperation {
                operation: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of one node invocation, as configured in the host.
///
/// `resource` and `operation` stay strings so that unknown values surface as
/// per-item validation errors rather than deserialization failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeParameters {
    pub resource: String,
    pub operation: String,
    /// Fetch every page instead of one bounded page
    pub return_all: bool,
    /// Page size when `return_all` is false
    pub limit: u32,
    pub options: EvaluationOptions,
}

impl Default for NodeParameters {
    fn default() -> Self {
        Self {
            resource: Resource::Evaluation.as_str().to_string(),
            operation: Operation::GetAll.as_str().to_string(),
            return_all: false,
            limit: DEFAULT_LIMIT,
            options: EvaluationOptions::default(),
        }
    }
}

impl NodeParameters {
    /// Parameters for the getAll operation
    pub fn get_all(return_all: bool, limit: u32, options: EvaluationOptions) -> Self {
        Self {
            return_all,
            limit,
            options,
            ..Default::default()
        }
    }

    /// Parameters for the getSummary operation
    pub fn get_summary() -> Self {
        Self {
            operation: Operation::GetSummary.as_str().to_string(),
            ..Default::default()
        }
    }

    /// Parse the resource
    pub fn resource(&self) -> Result<Resource> {
        self.resource.parse()
    }

    /// Parse the operation
    pub fn operation(&self) -> Result<Operation> {
        self.operation.parse()
    }

    /// The page size, which must be at least 1
    pub fn validated_limit(&self) -> Result<u32> {
        if self.limit == 0 {
            return Err(Error::invalid_parameter("limit", "must be at least 1"));
        }
        Ok(self.limit)
    }
}

/// One output record of the node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeItem {
    pub json: JsonObject,
    /// Index of the input item this record came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paired_item: Option<usize>,
}

impl NodeItem {
    /// Create an output record paired with an input item
    pub fn new(json: JsonObject, item_index: usize) -> Self {
        Self {
            json,
            paired_item: Some(item_index),
        }
    }

    /// Create the `{error, itemIndex}` record emitted under continue-on-failure
    pub fn error(error: &Error, item_index: usize) -> Self {
        let mut json = JsonObject::new();
        json.insert("error".to_string(), JsonValue::String(error.to_string()));
        json.insert("itemIndex".to_string(), JsonValue::from(item_index));
        Self::new(json, item_index)
    }

    /// Check if this is an error record
    pub fn is_error(&self) -> bool {
        self.json.contains_key("error") && self.json.contains_key("itemIndex")
    }
}
