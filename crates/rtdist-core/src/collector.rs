//! Graph consumer: folds samples into per-series aggregates

use crate::aggregator::Aggregator;
use crate::result::{MapResult, ResultData};
use crate::selector::{GroupInfo, KeysSelector};
use crate::Sample;
use parking_lot::{Mutex, RwLock};
use std::cmp::Ordering as CmpOrdering;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Name of the group used by single-group graphs
pub const DEFAULT_GROUP: &str = "Generic group";

/// Result key holding the series list
pub const SERIES_KEY: &str = "series";

/// Series folding every series of a group that enables it
pub const OVERALL_SERIES: &str = "Overall";

/// Suffix of series receiving controller samples
pub const CONTROLLER_SUFFIX: &str = "-Controller";

/// What a graph plots: its keys, its groups of series, and any static results
pub trait GraphDefinition: Send + Sync {
    /// Selector for the x-axis key
    fn keys_selector(&self) -> Box<dyn KeysSelector>;

    /// Groups of series, by group name
    fn group_infos(&self) -> BTreeMap<String, GroupInfo>;

    /// Publish results that do not depend on consumed samples
    fn initialize_extra_results(&self, _parent: &mut MapResult) {}
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct SeriesId {
    group: String,
    series: String,
}

/// Total-ordered axis key
#[derive(Debug, Clone, Copy)]
struct AxisKey(f64);

impl PartialEq for AxisKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == CmpOrdering::Equal
    }
}

impl Eq for AxisKey {}

impl PartialOrd for AxisKey {
    fn partial_cmp(&self, other: &Self) -> Option<CmpOrdering> {
        Some(self.cmp(other))
    }
}

impl Ord for AxisKey {
    fn cmp(&self, other: &Self) -> CmpOrdering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Default)]
struct SeriesData {
    points: BTreeMap<AxisKey, Box<dyn Aggregator>>,
}

/// Thread-safe consumer driving a [`GraphDefinition`]
pub struct GraphConsumer<D> {
    definition: D,
    keys_selector: Box<dyn KeysSelector>,
    groups: BTreeMap<String, GroupInfo>,
    series: RwLock<BTreeMap<SeriesId, Arc<Mutex<SeriesData>>>>,
    consumed: AtomicU64,
    // Held shared by consume and finish, exclusively by reset
    reset_gate: RwLock<()>,
}

impl<D: GraphDefinition> GraphConsumer<D> {
    /// Create a consumer; selectors and groups are resolved once here
    pub fn new(definition: D) -> Self {
        let keys_selector = definition.keys_selector();
        let groups = definition.group_infos();
        tracing::debug!(groups = groups.len(), "graph consumer initialized");
        Self {
            definition,
            keys_selector,
            groups,
            series: RwLock::new(BTreeMap::new()),
            consumed: AtomicU64::new(0),
            reset_gate: RwLock::new(()),
        }
    }

    /// Graph being consumed
    pub fn definition(&self) -> &D {
        &self.definition
    }

    /// Groups resolved from the definition
    pub fn groups(&self) -> &BTreeMap<String, GroupInfo> {
        &self.groups
    }

    /// Number of samples consumed since creation or last reset
    pub fn consumed_count(&self) -> u64 {
        self.consumed.load(Ordering::Relaxed)
    }

    /// Fold one sample into every group
    pub fn consume(&self, sample: &Sample) {
        let _gate = self.reset_gate.read();
        self.consumed.fetch_add(1, Ordering::Relaxed);
        let key = self.keys_selector.select(sample);

        for (group_name, group) in &self.groups {
            for series_name in group.series_selector.select(sample) {
                let Some(value) = group.value_selector.select(&series_name, sample) else {
                    tracing::trace!(
                        group = %group_name,
                        series = %series_name,
                        controller = sample.controller,
                        "sample excluded from series"
                    );
                    continue;
                };
                let series_name = if group.enables_controllers_series && sample.controller {
                    format!("{series_name}{CONTROLLER_SUFFIX}")
                } else {
                    series_name
                };
                self.aggregate(group_name, group, series_name, key, value);
                if group.enables_overall_series {
                    self.aggregate(group_name, group, OVERALL_SERIES.to_string(), key, value);
                }
            }
        }
    }

    /// Fold a batch of samples
    pub fn consume_all<'a>(&self, samples: impl IntoIterator<Item = &'a Sample>) {
        for sample in samples {
            self.consume(sample);
        }
    }

    fn aggregate(&self, group_name: &str, group: &GroupInfo, series: String, key: f64, value: f64) {
        let id = SeriesId {
            group: group_name.to_string(),
            series,
        };

        let existing = self.series.read().get(&id).cloned();
        let data = match existing {
            Some(data) => data,
            None => {
                let mut series = self.series.write();
                Arc::clone(series.entry(id).or_default())
            }
        };

        data.lock()
            .points
            .entry(AxisKey(key))
            .or_insert_with(|| group.aggregator_factory.create())
            .add_value(value);
    }

    /// Aggregated value at one point, if any value reached it
    pub fn point(&self, group: &str, series: &str, key: f64) -> Option<f64> {
        let id = SeriesId {
            group: group.to_string(),
            series: series.to_string(),
        };
        let data = self.series.read().get(&id).cloned()?;
        let data = data.lock();
        data.points.get(&AxisKey(key)).and_then(|agg| agg.result())
    }

    /// Names of series that received at least one value, per group
    pub fn series_names(&self) -> Vec<(String, String)> {
        self.series
            .read()
            .keys()
            .map(|id| (id.group.clone(), id.series.clone()))
            .collect()
    }

    /// Build the result tree
    ///
    /// Series are listed by group, then name; points by key. Extra results
    /// from the definition are published alongside.
    pub fn finish(&self) -> MapResult {
        let gate = self.reset_gate.read();
        let series = self.series.read();
        let entries: Vec<ResultData> = series
            .iter()
            .filter_map(|(id, data)| {
                let data = data.lock();
                let points: Vec<ResultData> = data
                    .points
                    .iter()
                    .filter_map(|(key, agg)| {
                        agg.result().map(|value| {
                            ResultData::list([ResultData::value(key.0), ResultData::value(value)])
                        })
                    })
                    .collect();
                if points.is_empty() {
                    return None;
                }
                let mut entry = MapResult::new();
                entry.set_result("group", ResultData::value(id.group.as_str()));
                entry.set_result("label", ResultData::value(id.series.as_str()));
                entry.set_result("data", ResultData::List(points));
                Some(ResultData::from(entry))
            })
            .collect();
        drop(series);

        let mut result = MapResult::new();
        let series_count = entries.len();
        result.set_result(SERIES_KEY, ResultData::List(entries));
        self.definition.initialize_extra_results(&mut result);

        tracing::debug!(
            consumed = self.consumed_count(),
            series = series_count,
            "graph result built"
        );
        drop(gate);
        result
    }

    /// Drop all aggregated data
    ///
    /// Waits for in-flight `consume` calls, so the counter and the series
    /// are cleared together.
    pub fn reset(&self) {
        let _gate = self.reset_gate.write();
        self.series.write().clear();
        self.consumed.store(0, Ordering::Relaxed);
    }
}
