//! Result export and snapshot functionality

use crate::collector::DEFAULT_GROUP;
use crate::result::MapResult;
use crate::ticks::Tick;
use crate::{Bucket, DistributionAggregator};
use serde::Serialize;

/// Count observed for one bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketCount {
    /// Bucket
    pub bucket: Bucket,
    /// Bucket label
    pub label: String,
    /// Number of counted samples
    pub count: u64,
}

/// Snapshot of a distribution run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSnapshot {
    /// Satisfied threshold in use
    pub satisfied_threshold: i64,
    /// Tolerated threshold in use
    pub tolerated_threshold: i64,
    /// Samples offered to the aggregator, counted or not
    pub consumed: u64,
    /// Counts of observed buckets, in index order
    pub buckets: Vec<BucketCount>,
    /// Axis ticks
    pub ticks: Vec<Tick>,
    /// Full result tree
    pub result: MapResult,
}

impl ResultSnapshot {
    /// Create a snapshot from a distribution aggregator
    pub fn from_aggregator(aggregator: &DistributionAggregator) -> Self {
        let graph = aggregator.definition();
        let labeler = graph.labeler();
        let thresholds = graph.thresholds();

        let buckets = Bucket::ALL
            .iter()
            .filter_map(|&bucket| {
                let label = labeler.label(bucket);
                aggregator
                    .point(DEFAULT_GROUP, &label, bucket.index() as f64)
                    .map(|count| BucketCount {
                        bucket,
                        label,
                        count: count as u64,
                    })
            })
            .collect();

        Self {
            satisfied_threshold: thresholds.satisfied,
            tolerated_threshold: thresholds.tolerated,
            consumed: aggregator.consumed_count(),
            buckets,
            ticks: graph.ticks().to_vec(),
            result: aggregator.finish(),
        }
    }

    /// Export snapshot as JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export snapshot as compact JSON string
    pub fn to_json_compact(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
