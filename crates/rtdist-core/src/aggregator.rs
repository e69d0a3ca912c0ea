//! Value aggregators for graph series

/// Folds the values of one series point into a single result
pub trait Aggregator: Send {
    /// Add a value
    fn add_value(&mut self, value: f64);
    /// Aggregated result, `None` while empty
    fn result(&self) -> Option<f64>;
    /// Number of values added
    fn count(&self) -> u64;
    /// Forget all values
    fn reset(&mut self);
}

/// Creates fresh aggregators for new series points
pub trait AggregatorFactory: Send + Sync {
    /// Create an empty aggregator
    fn create(&self) -> Box<dyn Aggregator>;
}

/// Sum of values
#[derive(Debug, Clone, Default)]
pub struct SumAggregator {
    sum: f64,
    count: u64,
}

impl Aggregator for SumAggregator {
    fn add_value(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn result(&self) -> Option<f64> {
        (self.count > 0).then_some(self.sum)
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Arithmetic mean of values
#[derive(Debug, Clone, Default)]
pub struct MeanAggregator {
    sum: f64,
    count: u64,
}

impl Aggregator for MeanAggregator {
    fn add_value(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn result(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        Some(self.sum / self.count as f64)
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Largest value
#[derive(Debug, Clone, Default)]
pub struct MaxAggregator {
    max: Option<f64>,
    count: u64,
}

impl Aggregator for MaxAggregator {
    fn add_value(&mut self, value: f64) {
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
        self.count += 1;
    }

    fn result(&self) -> Option<f64> {
        self.max
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Smallest value
#[derive(Debug, Clone, Default)]
pub struct MinAggregator {
    min: Option<f64>,
    count: u64,
}

impl Aggregator for MinAggregator {
    fn add_value(&mut self, value: f64) {
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.count += 1;
    }

    fn result(&self) -> Option<f64> {
        self.min
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

macro_rules! aggregator_factory {
    ($(#[$doc:meta])* $factory:ident => $aggregator:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $factory;

        impl AggregatorFactory for $factory {
            fn create(&self) -> Box<dyn Aggregator> {
                Box::<$aggregator>::default()
            }
        }
    };
}

aggregator_factory!(
    /// Creates [`SumAggregator`]s
    SumAggregatorFactory => SumAggregator
);
aggregator_factory!(
    /// Creates [`MeanAggregator`]s
    MeanAggregatorFactory => MeanAggregator
);
aggregator_factory!(
    /// Creates [`MaxAggregator`]s
    MaxAggregatorFactory => MaxAggregator
);
aggregator_factory!(
    /// Creates [`MinAggregator`]s
    MinAggregatorFactory => MinAggregator
);
