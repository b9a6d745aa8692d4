use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use agristat_core::Record;

/// Aggregate totals and averages over a (possibly filtered) dataset.
///
/// With no records the sums are zero and `avg_yield` is `None`, which
/// serializes as JSON `null`; a NaN mean never leaves this module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub records: usize,
    /// Sum of production in tons.
    pub total_production: u64,
    /// Sum of cultivated area in hectares.
    pub total_area: u64,
    /// Mean of the per-record yield, tons per hectare.
    pub avg_yield: Option<f64>,
    pub total_farmers: u64,
}

pub fn summarize(records: &[Record]) -> KpiSummary {
    let mut total_production = 0_u64;
    let mut total_area = 0_u64;
    let mut total_farmers = 0_u64;
    let mut yield_sum = 0.0_f64;

    for record in records {
        total_production += u64::from(record.production);
        total_area += u64::from(record.area);
        total_farmers += u64::from(record.farmers);
        yield_sum += record.yield_rate;
    }

    let avg_yield = if records.is_empty() {
        None
    } else {
        Some(yield_sum / records.len() as f64)
    };

    KpiSummary {
        records: records.len(),
        total_production,
        total_area,
        avg_yield,
        total_farmers,
    }
}

/// One point of the quarterly production trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub year: u16,
    pub quarter: u8,
    pub production: u64,
}

/// Sum production per (year, quarter) group, ordered by year then quarter.
pub fn group_by_year_quarter(records: &[Record]) -> Vec<TrendPoint> {
    let mut groups: BTreeMap<(u16, u8), u64> = BTreeMap::new();
    for record in records {
        *groups.entry((record.year, record.quarter)).or_insert(0) +=
            u64::from(record.production);
    }

    groups
        .into_iter()
        .map(|((year, quarter), production)| TrendPoint {
            year,
            quarter,
            production,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{group_by_year_quarter, summarize};
    use agristat_core::{Record, round2};

    fn record(year: u16, quarter: u8, crop: &str, production: u32) -> Record {
        Record {
            year,
            quarter,
            crop: crop.to_string(),
            production,
            area: 500,
            yield_rate: round2(f64::from(production) / 500.0),
            farmers: 100,
        }
    }

    #[test]
    fn empty_input_yields_zero_sums_and_no_average() {
        let summary = summarize(&[]);
        assert_eq!(summary.records, 0);
        assert_eq!(summary.total_production, 0);
        assert_eq!(summary.avg_yield, None);
    }

    #[test]
    fn averages_use_the_rounded_yield() {
        let records = vec![
            record(2022, 1, "Maize", 1000),
            record(2022, 2, "Maize", 2000),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.total_production, 3000);
        assert_eq!(summary.avg_yield, Some((2.0 + 4.0) / 2.0));
    }

    #[test]
    fn groups_are_ordered_year_then_quarter() {
        let records = vec![
            record(2023, 2, "Maize", 10),
            record(2022, 4, "Rice", 20),
            record(2023, 2, "Rice", 30),
            record(2022, 1, "Maize", 40),
        ];
        let trend = group_by_year_quarter(&records);
        let keys: Vec<_> = trend.iter().map(|p| (p.year, p.quarter)).collect();
        assert_eq!(keys, vec![(2022, 1), (2022, 4), (2023, 2)]);
        assert_eq!(trend[2].production, 40);
    }
}
