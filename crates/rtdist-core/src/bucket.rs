//! Latency bucket classification

use crate::Sample;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Response time bucket, with a fixed numeric identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    /// Successful, within the satisfied threshold
    Satisfied = 0,
    /// Successful, above satisfied but within the tolerated threshold
    Tolerated = 1,
    /// Successful, above the tolerated threshold
    Untolerated = 2,
    /// Unsuccessful, whatever the elapsed time
    Failed = 3,
}

impl Bucket {
    /// All buckets in index order
    pub const ALL: [Bucket; 4] = [
        Bucket::Satisfied,
        Bucket::Tolerated,
        Bucket::Untolerated,
        Bucket::Failed,
    ];

    /// Numeric identity of the bucket
    pub fn index(self) -> usize {
        self as usize
    }

    /// Bucket for a numeric identity
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Bucket::Satisfied => "satisfied",
            Bucket::Tolerated => "tolerated",
            Bucket::Untolerated => "untolerated",
            Bucket::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Threshold pair bounding the successful buckets (milliseconds)
///
/// Neither ordering nor sign is checked. An inverted pair leaves
/// [`Bucket::Tolerated`] unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Upper bound (inclusive) of the satisfied bucket
    pub satisfied: i64,
    /// Upper bound (inclusive) of the tolerated bucket
    pub tolerated: i64,
}

impl Thresholds {
    /// Create a threshold pair
    pub fn new(satisfied: i64, tolerated: i64) -> Self {
        Self {
            satisfied,
            tolerated,
        }
    }

    /// Whether the pair leaves the tolerated bucket unreachable
    pub fn is_inverted(&self) -> bool {
        self.satisfied > self.tolerated
    }

    /// Log configurations that silently change bucket reachability
    pub fn warn_if_degenerate(&self) {
        if self.is_inverted() {
            tracing::warn!(
                satisfied = self.satisfied,
                tolerated = self.tolerated,
                "satisfied threshold exceeds tolerated threshold, tolerated bucket is unreachable"
            );
        }
        if self.satisfied < 0 || self.tolerated < 0 {
            tracing::warn!(
                satisfied = self.satisfied,
                tolerated = self.tolerated,
                "negative threshold configured"
            );
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new(500, 1500)
    }
}

/// Maps samples to buckets against a fixed threshold pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketClassifier {
    thresholds: Thresholds,
}

impl BucketClassifier {
    /// Create a classifier
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds in use
    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Classify a sample
    pub fn classify(&self, sample: &Sample) -> Bucket {
        self.classify_raw(sample.elapsed_time, sample.success)
    }

    /// Classify an elapsed time and outcome
    pub fn classify_raw(&self, elapsed_time: u64, success: bool) -> Bucket {
        if !success {
            return Bucket::Failed;
        }
        // i128 holds every u64 and i64 value
        let elapsed = i128::from(elapsed_time);
        if elapsed <= i128::from(self.thresholds.satisfied) {
            Bucket::Satisfied
        } else if elapsed <= i128::from(self.thresholds.tolerated) {
            Bucket::Tolerated
        } else {
            Bucket::Untolerated
        }
    }
}

impl Default for BucketClassifier {
    fn default() -> Self {
        Self::new(Thresholds::default())
    }
}
