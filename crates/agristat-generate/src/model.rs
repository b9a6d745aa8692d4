use serde::{Deserialize, Serialize};

/// Half-open range a metric is drawn from, `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricRange {
    pub min: u32,
    pub max: u32,
}

impl MetricRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

/// Draw ranges for the three synthetic metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRanges {
    /// Production in tons.
    pub production: MetricRange,
    /// Cultivated area in hectares. Must stay strictly positive, yield is
    /// derived by dividing through it.
    pub area: MetricRange,
    /// Number of farmers involved.
    pub farmers: MetricRange,
}

impl Default for ValueRanges {
    fn default() -> Self {
        Self {
            production: MetricRange::new(500, 5000),
            area: MetricRange::new(100, 1000),
            farmers: MetricRange::new(50, 500),
        }
    }
}

/// Options for the generation engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateOptions {
    pub ranges: ValueRanges,
}

/// Summary of a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub seed: u64,
    pub years: usize,
    pub quarters: usize,
    pub crops: usize,
    pub records_generated: u64,
}
