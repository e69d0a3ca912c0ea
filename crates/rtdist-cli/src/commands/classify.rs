//! Single sample classification

use crate::error::CliError;
use crate::output::{single_line, Output};
use clap::Args;
use rtdist_core::{ResponseTimeDistributionGraph, Sample};

/// Classify one sample given on the command line
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Elapsed time in milliseconds
    #[arg(long)]
    pub elapsed: u64,

    /// Mark the sample as unsuccessful
    #[arg(long)]
    pub failed: bool,
}

impl ClassifyArgs {
    /// Execute the classify command
    pub fn execute(&self, graph: &ResponseTimeDistributionGraph, json: bool) -> Result<(), CliError> {
        let sample = Sample::new(self.elapsed, !self.failed);
        let (bucket, label) = graph.labeler().classify(&sample);
        tracing::debug!(elapsed = self.elapsed, success = sample.success, %bucket, "classified");

        Output::new(json)
            .field("bucket", &bucket.to_string())
            .field_i64("index", bucket.index() as i64)
            .field("label", &label)
            .message(&format!("{} ({})  {}", bucket.index(), bucket, single_line(&label)))
            .print();
        Ok(())
    }
}
