//! Response time distribution graph
//!
//! Samples are split into four buckets against the satisfied and tolerated
//! thresholds. Each consumed sample adds one to the series named after its
//! bucket label, keyed by the bucket index; controller samples are left out.
//! The `ticks` result lists all four buckets whatever was consumed.

use crate::aggregator::SumAggregatorFactory;
use crate::collector::{GraphConsumer, GraphDefinition, DEFAULT_GROUP};
use crate::config::DistributionConfig;
use crate::error::ConfigResult;
use crate::result::MapResult;
use crate::selector::{CountValueSelector, GroupInfo, KeysSelector, SeriesSelector};
use crate::ticks::{ticks, ticks_result, Tick, TICKS_KEY};
use crate::{Bucket, BucketClassifier, LabelFormatter, LabelTemplates, Sample, Thresholds};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Consumer aggregating sample counts per bucket
pub type DistributionAggregator = GraphConsumer<ResponseTimeDistributionGraph>;

/// Classifies a sample and names its bucket from the same decision
#[derive(Debug, Clone)]
pub struct BucketLabeler {
    classifier: BucketClassifier,
    formatter: Arc<LabelFormatter>,
}

impl BucketLabeler {
    /// Create a labeler
    pub fn new(thresholds: Thresholds, formatter: Arc<LabelFormatter>) -> Self {
        Self {
            classifier: BucketClassifier::new(thresholds),
            formatter,
        }
    }

    /// Bucket and label for a sample
    pub fn classify(&self, sample: &Sample) -> (Bucket, String) {
        let bucket = self.classifier.classify(sample);
        (bucket, self.label(bucket))
    }

    /// Label of a bucket
    pub fn label(&self, bucket: Bucket) -> String {
        self.formatter.label_for(bucket, self.classifier.thresholds())
    }
}

struct BucketKeysSelector(BucketLabeler);

impl KeysSelector for BucketKeysSelector {
    fn select(&self, sample: &Sample) -> f64 {
        self.0.classifier.classify(sample).index() as f64
    }
}

struct BucketSeriesSelector(BucketLabeler);

impl SeriesSelector for BucketSeriesSelector {
    fn select(&self, sample: &Sample) -> Vec<String> {
        let (_, label) = self.0.classify(sample);
        vec![label]
    }
}

/// Distribution of response times over the four buckets
#[derive(Debug, Clone)]
pub struct ResponseTimeDistributionGraph {
    thresholds: Thresholds,
    formatter: Arc<LabelFormatter>,
}

impl ResponseTimeDistributionGraph {
    /// Create a graph
    pub fn new(thresholds: Thresholds, templates: LabelTemplates) -> Self {
        Self {
            thresholds,
            formatter: Arc::new(LabelFormatter::new(templates)),
        }
    }

    /// Create a graph from configuration
    pub fn from_config(config: &DistributionConfig) -> ConfigResult<Self> {
        Ok(Self::new(config.thresholds(), config.label_templates()?))
    }

    /// Satisfied threshold
    pub fn satisfied_threshold(&self) -> i64 {
        self.thresholds.satisfied
    }

    /// Set the satisfied threshold
    pub fn set_satisfied_threshold(&mut self, threshold: i64) {
        self.thresholds.satisfied = threshold;
    }

    /// Tolerated threshold
    pub fn tolerated_threshold(&self) -> i64 {
        self.thresholds.tolerated
    }

    /// Set the tolerated threshold
    pub fn set_tolerated_threshold(&mut self, threshold: i64) {
        self.thresholds.tolerated = threshold;
    }

    /// Threshold pair
    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Label formatter
    pub fn formatter(&self) -> &LabelFormatter {
        &self.formatter
    }

    /// Labeler bound to the current thresholds
    pub fn labeler(&self) -> BucketLabeler {
        BucketLabeler::new(self.thresholds, Arc::clone(&self.formatter))
    }

    /// Ticks for all four buckets
    pub fn ticks(&self) -> [Tick; 4] {
        ticks(
            &self.formatter,
            self.thresholds.satisfied,
            self.thresholds.tolerated,
        )
    }

    /// Freeze the configuration into a consumer
    pub fn into_aggregator(self) -> DistributionAggregator {
        GraphConsumer::new(self)
    }
}

impl Default for ResponseTimeDistributionGraph {
    fn default() -> Self {
        Self::new(Thresholds::default(), LabelTemplates::default())
    }
}

impl GraphDefinition for ResponseTimeDistributionGraph {
    fn keys_selector(&self) -> Box<dyn KeysSelector> {
        self.thresholds.warn_if_degenerate();
        Box::new(BucketKeysSelector(self.labeler()))
    }

    fn group_infos(&self) -> BTreeMap<String, GroupInfo> {
        let mut groups = BTreeMap::new();
        groups.insert(
            DEFAULT_GROUP.to_string(),
            GroupInfo::new(
                SumAggregatorFactory,
                BucketSeriesSelector(self.labeler()),
                // Transaction controller samples are not counted
                CountValueSelector::new(true),
                false,
                false,
            ),
        );
        groups
    }

    fn initialize_extra_results(&self, parent: &mut MapResult) {
        let ticks = self.ticks();
        tracing::debug!(
            satisfied = self.thresholds.satisfied,
            tolerated = self.thresholds.tolerated,
            "publishing distribution ticks"
        );
        parent.set_result(TICKS_KEY, ticks_result(&ticks));
    }
}
