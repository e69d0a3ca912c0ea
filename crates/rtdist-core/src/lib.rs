//! # rtdist-core
//!
//! Response time distribution for performance test reports.
//!
//! Features:
//! - Bucket classification against satisfied/tolerated thresholds
//! - Localized bucket labels from positional message templates
//! - Axis ticks covering every bucket
//! - Thread-safe graph consumer with pluggable selectors and aggregators
//! - JSON export
//!
//! ## Usage
//!
//! ```
//! use rtdist_core::{LabelTemplates, ResponseTimeDistributionGraph, Sample, Thresholds};
//!
//! let graph = ResponseTimeDistributionGraph::new(Thresholds::new(100, 500), LabelTemplates::english());
//! let aggregator = graph.into_aggregator();
//! aggregator.consume(&Sample::new(50, true));
//! aggregator.consume(&Sample::new(10, false));
//! let result = aggregator.finish();
//! assert!(result.get("ticks").is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod aggregator;
mod bucket;
mod collector;
mod config;
mod distribution;
mod error;
mod export;
mod label;
mod result;
mod sample;
mod selector;
mod template;
mod ticks;

pub use aggregator::{
    Aggregator, AggregatorFactory, MaxAggregator, MaxAggregatorFactory, MeanAggregator,
    MeanAggregatorFactory, MinAggregator, MinAggregatorFactory, SumAggregator,
    SumAggregatorFactory,
};
pub use bucket::{Bucket, BucketClassifier, Thresholds};
pub use collector::{
    GraphConsumer, GraphDefinition, CONTROLLER_SUFFIX, DEFAULT_GROUP, OVERALL_SERIES, SERIES_KEY,
};
pub use config::{DistributionConfig, TemplateConfig};
pub use distribution::{BucketLabeler, DistributionAggregator, ResponseTimeDistributionGraph};
pub use error::{ConfigError, ConfigResult, TemplateError, TemplateResult};
pub use export::{BucketCount, ResultSnapshot};
pub use label::{LabelFormatter, LabelTemplates};
pub use result::{MapResult, ResultData};
pub use sample::Sample;
pub use selector::{
    CountValueSelector, ElapsedTimeValueSelector, GroupInfo, KeysSelector, SeriesSelector,
    ValueSelector,
};
pub use template::{MessageTemplate, NumberFormat, MAX_ARGUMENT_INDEX};
pub use ticks::{ticks, ticks_result, Tick, TICKS_KEY};
