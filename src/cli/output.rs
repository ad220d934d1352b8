//! Output rendering for node records

use crate::cli::commands::OutputFormat;
use crate::error::Result;
use crate::model::{Average, Evaluation, SummaryData};
use crate::node::NodeItem;
use serde_json::Value;
use std::fmt::Write as _;

/// Render one record
pub fn format_item(item: &NodeItem, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&item.json)?),
        OutputFormat::Pretty => Ok(format_pretty(item)),
    }
}

/// Print records to stdout, one per line
pub fn print_items(items: &[NodeItem], format: OutputFormat) -> Result<()> {
    for item in items {
        println!("{}", format_item(item, format)?);
    }
    Ok(())
}

fn format_pretty(item: &NodeItem) -> String {
    if item.is_error() {
        let message = item.json.get("error").and_then(Value::as_str).unwrap_or("");
        return format!("item {}: error: {message}", item.paired_item.unwrap_or(0));
    }

    if item.json.contains_key("summary") {
        if let Ok(data) = SummaryData::from_record(&item.json) {
            return format_summary(&data);
        }
    }

    match Evaluation::from_record(&item.json) {
        Ok(evaluation) => format_evaluation(&evaluation),
        Err(_) => Value::Object(item.json.clone()).to_string(),
    }
}

fn format_evaluation(evaluation: &Evaluation) -> String {
    let or_dash = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());

    format!(
        "{}  {} (by {})  {}/{}  performance={} potential={}",
        or_dash(evaluation.id.clone()),
        or_dash(evaluation.evaluated_name.clone()),
        or_dash(evaluation.evaluator_name.clone()),
        or_dash(evaluation.year.map(|y| y.to_string())),
        or_dash(evaluation.iteration.map(|i| i.to_string())),
        or_dash(evaluation.performance().map(|p| p.to_string())),
        or_dash(evaluation.potential().map(|p| p.to_string())),
    )
}

fn format_summary(data: &SummaryData) -> String {
    let summary = &data.summary;
    let average = |a: Option<&Average>| {
        a.map_or_else(|| "-".to_string(), ToString::to_string)
    };

    let mut out = format!(
        "Total evaluations: {}  avg performance: {}  avg potential: {}",
        summary.total_evaluations,
        average(summary.avg_performance.as_ref()),
        average(summary.avg_potential.as_ref()),
    );

    for iteration in &summary.iterations {
        let _ = write!(
            out,
            "\n  iteration {}: {} evaluations",
            iteration.iteration, iteration.count
        );
        if let Some(p) = iteration.avg_performance {
            let _ = write!(out, ", performance {p:.2}");
        }
        if let Some(p) = iteration.avg_potential {
            let _ = write!(out, ", potential {p:.2}");
        }
    }

    out
}
