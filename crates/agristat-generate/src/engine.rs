use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use agristat_core::{Dataset, Domain, Record, round2, validate_dataset};

use crate::errors::GenerationError;
use crate::model::{GenerateOptions, GenerationReport, MetricRange, ValueRanges};

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub dataset: Dataset,
    pub report: GenerationReport,
}

/// Entry point for synthesizing datasets from a domain and a seed.
#[derive(Debug, Clone, Default)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Generate one record per (year, quarter, crop) combination.
    ///
    /// The same seed and domain always produce a byte-identical dataset:
    /// every record draws from its own rng, seeded by a hash of the dataset
    /// seed and the combination key, so record values do not depend on how
    /// many combinations precede them.
    pub fn run(&self, domain: &Domain, seed: u64) -> Result<GenerationOutcome, GenerationError> {
        validate_ranges(&self.options.ranges)?;
        if domain.years.is_empty() || domain.quarters.is_empty() || domain.crops.is_empty() {
            return Err(GenerationError::InvalidDomain(
                "every domain axis must be non-empty".to_string(),
            ));
        }

        info!(
            seed,
            years = domain.years.len(),
            quarters = domain.quarters.len(),
            crops = domain.crops.len(),
            "generation started"
        );

        let ranges = &self.options.ranges;
        let mut records = Vec::with_capacity(domain.combination_count());
        for (year, quarter, crop) in domain.combinations() {
            let key = format!("{year}.{quarter}.{crop}");
            let mut rng = ChaCha8Rng::seed_from_u64(hash_seed(seed, &key));

            let production = draw(&mut rng, ranges.production);
            let area = draw(&mut rng, ranges.area);
            let farmers = draw(&mut rng, ranges.farmers);

            records.push(Record {
                year,
                quarter,
                crop: crop.to_string(),
                production,
                area,
                yield_rate: round2(f64::from(production) / f64::from(area)),
                farmers,
            });
        }

        let dataset = Dataset::new(records);
        validate_dataset(&dataset, domain)?;

        let report = GenerationReport {
            seed,
            years: domain.years.len(),
            quarters: domain.quarters.len(),
            crops: domain.crops.len(),
            records_generated: dataset.len() as u64,
        };

        info!(records = report.records_generated, "generation finished");

        Ok(GenerationOutcome { dataset, report })
    }
}

fn draw(rng: &mut impl Rng, range: MetricRange) -> u32 {
    rng.random_range(range.min..range.max)
}

fn validate_ranges(ranges: &ValueRanges) -> Result<(), GenerationError> {
    for (name, range) in [
        ("production", ranges.production),
        ("area", ranges.area),
        ("farmers", ranges.farmers),
    ] {
        if range.min >= range.max {
            return Err(GenerationError::InvalidRange(format!(
                "{name} min must be < max"
            )));
        }
    }
    if ranges.area.min == 0 {
        return Err(GenerationError::InvalidRange(
            "area min must be positive".to_string(),
        ));
    }
    Ok(())
}

fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
