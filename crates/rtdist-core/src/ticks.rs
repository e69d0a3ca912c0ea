//! Axis ticks describing every bucket

use crate::result::ResultData;
use crate::{Bucket, LabelFormatter};
use serde::{Deserialize, Serialize};

/// Result key under which the tick list is published
pub const TICKS_KEY: &str = "ticks";

/// Static descriptor of one bucket on the chart axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tick {
    /// Bucket index
    pub index: usize,
    /// Bucket label
    pub label: String,
}

impl Tick {
    /// Two-element `[index, label]` record
    pub fn to_result(&self) -> ResultData {
        ResultData::list([
            ResultData::value(self.index),
            ResultData::value(self.label.as_str()),
        ])
    }
}

/// Ticks for all four buckets, in index order
pub fn ticks(formatter: &LabelFormatter, satisfied: i64, tolerated: i64) -> [Tick; 4] {
    Bucket::ALL.map(|bucket| Tick {
        index: bucket.index(),
        label: formatter.label(bucket, satisfied, tolerated),
    })
}

/// Tick list as published in the result tree
pub fn ticks_result(ticks: &[Tick]) -> ResultData {
    ResultData::list(ticks.iter().map(Tick::to_result))
}
