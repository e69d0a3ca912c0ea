//! Axis tick listing

use crate::error::CliError;
use crate::output::{single_line, Output};
use rtdist_core::{ticks_result, ResponseTimeDistributionGraph};

/// Print the four bucket ticks
pub fn execute(graph: &ResponseTimeDistributionGraph, json: bool) -> Result<(), CliError> {
    let ticks = graph.ticks();
    let message = ticks
        .iter()
        .map(|t| format!("{}  {}", t.index, single_line(&t.label)))
        .collect::<Vec<_>>()
        .join("\n");

    Output::new(json)
        .field_value("ticks", serde_json::to_value(ticks_result(&ticks))?)
        .message(&message)
        .print();
    Ok(())
}
