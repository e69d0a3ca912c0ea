//! Sample records consumed by the distribution graph

use serde::{Deserialize, Serialize};

/// A single recorded test execution
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sample {
    /// Sampler label
    #[serde(default)]
    pub name: String,
    /// Elapsed time in milliseconds
    pub elapsed_time: u64,
    /// Whether the execution succeeded
    pub success: bool,
    /// Whether this record summarizes child samples (transaction controller)
    #[serde(default)]
    pub controller: bool,
}

impl Sample {
    /// Create an unnamed, non-controller sample
    pub fn new(elapsed_time: u64, success: bool) -> Self {
        Self {
            name: String::new(),
            elapsed_time,
            success,
            controller: false,
        }
    }

    /// Set the sampler label
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Mark this sample as a transaction controller record
    pub fn as_controller(mut self) -> Self {
        self.controller = true;
        self
    }
}
