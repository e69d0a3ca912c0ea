//! Selectors wiring samples into graph series

use crate::aggregator::AggregatorFactory;
use crate::Sample;

/// Maps a sample to its x-axis key
pub trait KeysSelector: Send + Sync {
    /// Key for the sample
    fn select(&self, sample: &Sample) -> f64;
}

/// Maps a sample to the series it contributes to
pub trait SeriesSelector: Send + Sync {
    /// Series names for the sample
    fn select(&self, sample: &Sample) -> Vec<String>;
}

/// Maps a sample to the value folded into its series point
pub trait ValueSelector: Send + Sync {
    /// Value for the sample, `None` to leave it out
    fn select(&self, series: &str, sample: &Sample) -> Option<f64>;
}

/// Counts one unit per sample
#[derive(Debug, Clone, Copy, Default)]
pub struct CountValueSelector {
    ignore_controllers: bool,
}

impl CountValueSelector {
    /// Create a counting selector
    ///
    /// With `ignore_controllers`, transaction controller samples yield no value.
    pub fn new(ignore_controllers: bool) -> Self {
        Self { ignore_controllers }
    }
}

impl ValueSelector for CountValueSelector {
    fn select(&self, _series: &str, sample: &Sample) -> Option<f64> {
        if self.ignore_controllers && sample.controller {
            None
        } else {
            Some(1.0)
        }
    }
}

/// Elapsed time of the sample
#[derive(Debug, Clone, Copy, Default)]
pub struct ElapsedTimeValueSelector {
    ignore_controllers: bool,
}

impl ElapsedTimeValueSelector {
    /// Create an elapsed time selector
    pub fn new(ignore_controllers: bool) -> Self {
        Self { ignore_controllers }
    }
}

impl ValueSelector for ElapsedTimeValueSelector {
    fn select(&self, _series: &str, sample: &Sample) -> Option<f64> {
        if self.ignore_controllers && sample.controller {
            None
        } else {
            Some(sample.elapsed_time as f64)
        }
    }
}

/// How one group of series is selected, valued and aggregated
pub struct GroupInfo {
    /// Aggregator for each series point
    pub aggregator_factory: Box<dyn AggregatorFactory>,
    /// Series names per sample
    pub series_selector: Box<dyn SeriesSelector>,
    /// Value per sample
    pub value_selector: Box<dyn ValueSelector>,
    /// Also render an overall series folding every series of the group
    pub enables_overall_series: bool,
    /// Route controller samples to dedicated `-Controller` series
    pub enables_controllers_series: bool,
}

impl GroupInfo {
    /// Create a group description
    pub fn new(
        aggregator_factory: impl AggregatorFactory + 'static,
        series_selector: impl SeriesSelector + 'static,
        value_selector: impl ValueSelector + 'static,
        enables_overall_series: bool,
        enables_controllers_series: bool,
    ) -> Self {
        Self {
            aggregator_factory: Box::new(aggregator_factory),
            series_selector: Box::new(series_selector),
            value_selector: Box::new(value_selector),
            enables_overall_series,
            enables_controllers_series,
        }
    }
}

impl std::fmt::Debug for GroupInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupInfo")
            .field("enables_overall_series", &self.enables_overall_series)
            .field("enables_controllers_series", &self.enables_controllers_series)
            .finish_non_exhaustive()
    }
}
