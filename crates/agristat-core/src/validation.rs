use std::collections::BTreeSet;

use crate::dataset::Dataset;
use crate::domain::Domain;
use crate::error::{Error, Result};
use crate::record::round2;

/// Validate a dataset against its domain contract.
///
/// This checks:
/// - exactly one record per (year, quarter, crop) combination
/// - no duplicate or out-of-domain combinations
/// - quarters in 1..=4 and positive area
/// - the derived yield invariant on every record
pub fn validate_dataset(dataset: &Dataset, domain: &Domain) -> Result<()> {
    if domain.years.is_empty() || domain.quarters.is_empty() || domain.crops.is_empty() {
        return Err(Error::InvalidDomain(
            "every domain axis must be non-empty".to_string(),
        ));
    }

    let expected = domain.combination_count();
    if dataset.len() != expected {
        return Err(Error::InvalidDataset(format!(
            "expected {} records, found {}",
            expected,
            dataset.len()
        )));
    }

    let mut seen: BTreeSet<(u16, u8, String)> = BTreeSet::new();
    for record in dataset {
        if !(1..=4).contains(&record.quarter) {
            return Err(Error::InvalidDataset(format!(
                "quarter out of range: {}",
                record.quarter
            )));
        }
        if record.area == 0 {
            return Err(Error::InvalidDataset(format!(
                "zero area for {} {} Q{}",
                record.crop, record.year, record.quarter
            )));
        }
        if !domain.contains(record.year, record.quarter, &record.crop) {
            return Err(Error::InvalidDataset(format!(
                "combination outside domain: {} {} Q{}",
                record.crop, record.year, record.quarter
            )));
        }
        if !seen.insert((record.year, record.quarter, record.crop.clone())) {
            return Err(Error::InvalidDataset(format!(
                "duplicate combination: {} {} Q{}",
                record.crop, record.year, record.quarter
            )));
        }

        let expected_yield = round2(f64::from(record.production) / f64::from(record.area));
        if record.yield_rate != expected_yield {
            return Err(Error::InvalidDataset(format!(
                "yield {} does not match round2({}/{}) for {} {} Q{}",
                record.yield_rate,
                record.production,
                record.area,
                record.crop,
                record.year,
                record.quarter
            )));
        }
    }

    // seen.len() == dataset.len() == expected here, so every combination in
    // the domain is covered.
    Ok(())
}
