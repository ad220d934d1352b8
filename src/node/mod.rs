//! WeValu workflow node
//!
//! Runs a batch of input items through the configured operation, one item at
//! a time, the way a workflow host drives a node.
//!
//! # Example
//!
//! ```rust,ignore
//! use wevalu_node::node::{NodeParameters, StaticContext, WeValuNode};
//!
//! let node = WeValuNode::new(fetcher);
//! let ctx = StaticContext::new(NodeParameters::get_summary());
//! let items = node.execute(&ctx).await?;
//! ```

mod types;

pub use types::{NodeItem, NodeParameters, Operation, Resource};

use crate::error::Result;
use crate::fetcher::EvaluationFetcher;
use crate::normalize::normalize;
use crate::types::{into_object, JsonObject, JsonValue};
use tracing::{debug, info, warn};

/// What the host provides to a node run
pub trait ExecuteContext: Send + Sync {
    /// Number of input items
    fn item_count(&self) -> usize;

    /// Parameters resolved for input item `item_index`
    fn parameters(&self, item_index: usize) -> Result<NodeParameters>;

    /// Whether per-item failures become error records instead of aborting
    fn continue_on_fail(&self) -> bool;
}

/// A context applying the same parameters to every item
#[derive(Debug, Clone)]
pub struct StaticContext {
    parameters: NodeParameters,
    items: usize,
    continue_on_fail: bool,
}

impl StaticContext {
    /// A single-item context
    pub fn new(parameters: NodeParameters) -> Self {
        Self {
            parameters,
            items: 1,
            continue_on_fail: false,
        }
    }

    /// Set the number of input items
    #[must_use]
    pub fn with_items(mut self, items: usize) -> Self {
        self.items = items;
        self
    }

    /// Enable or disable continue-on-failure
    #[must_use]
    pub fn with_continue_on_fail(mut self, enabled: bool) -> Self {
        self.continue_on_fail = enabled;
        self
    }
}

impl ExecuteContext for StaticContext {
    fn item_count(&self) -> usize {
        self.items
    }

    fn parameters(&self, _item_index: usize) -> Result<NodeParameters> {
        Ok(self.parameters.clone())
    }

    fn continue_on_fail(&self) -> bool {
        self.continue_on_fail
    }
}

/// The WeValu node
#[derive(Debug)]
pub struct WeValuNode {
    fetcher: EvaluationFetcher,
}

impl WeValuNode {
    /// Create a node backed by a fetcher
    pub fn new(fetcher: EvaluationFetcher) -> Self {
        Self { fetcher }
    }

    /// Run every input item in order.
    ///
    /// Without continue-on-failure the first failing item aborts the run and
    /// no output is returned.
    pub async fn execute(&self, ctx: &dyn ExecuteContext) -> Result<Vec<NodeItem>> {
        let mut output = Vec::new();

        for item_index in 0..ctx.item_count() {
            match self.execute_item(ctx, item_index).await {
                Ok(records) => {
                    debug!(item_index, records = records.len(), "Item processed");
                    output.extend(
                        records
                            .into_iter()
                            .map(|json| NodeItem::new(json, item_index)),
                    );
                }
                Err(e) if ctx.continue_on_fail() => {
                    warn!(item_index, error = %e, "Item failed, continuing");
                    output.push(NodeItem::error(&e, item_index));
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            items = ctx.item_count(),
            records = output.len(),
            "Node execution finished"
        );
        Ok(output)
    }

    async fn execute_item(
        &self,
        ctx: &dyn ExecuteContext,
        item_index: usize,
    ) -> Result<Vec<JsonObject>> {
        let params = ctx.parameters(item_index)?;
        let resource = params.resource()?;
        let operation = params.operation()?;
        debug!(item_index, %resource, %operation, "Executing item");

        match (resource, operation) {
            (Resource::Evaluation, Operation::GetAll) => {
                let raw = if params.return_all {
                    JsonValue::Array(self.fetcher.fetch_all(&params.options).await?)
                } else {
                    let limit = params.validated_limit()?;
                    self.fetcher.fetch_page(&params.options, limit).await?
                };
                Ok(normalize(raw))
            }
            (Resource::Evaluation, Operation::GetSummary) => {
                let summary = self.fetcher.fetch_summary().await?;
                Ok(vec![into_object(summary)])
            }
        }
    }
}

#[cfg(test)]
mod tests;
