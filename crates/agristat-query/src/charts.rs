use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use agristat_core::Record;

use crate::summary::{TrendPoint, group_by_year_quarter};

/// Per-crop production total, bar chart data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropTotal {
    pub crop: String,
    pub production: u64,
}

/// One year of the quarterly production trend, line chart data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub year: u16,
    pub points: Vec<TrendPoint>,
}

/// Five-number summary of the yield distribution for one crop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStats {
    pub crop: String,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Per-crop farmers count and its share of the filtered total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropShare {
    pub crop: String,
    pub farmers: u64,
    /// Fraction of the overall farmers count, 0 when the total is 0.
    pub share: f64,
}

/// The four chart payloads the dashboard renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBundle {
    pub production_by_crop: Vec<CropTotal>,
    pub quarterly_trend: Vec<TrendSeries>,
    pub yield_distribution: Vec<BoxStats>,
    pub farmers_share: Vec<CropShare>,
}

pub fn build_charts(records: &[Record]) -> ChartBundle {
    ChartBundle {
        production_by_crop: production_by_crop(records),
        quarterly_trend: quarterly_trend(records),
        yield_distribution: yield_distribution(records),
        farmers_share: farmers_share(records),
    }
}

/// Sum production per crop, ordered by crop name.
pub fn production_by_crop(records: &[Record]) -> Vec<CropTotal> {
    let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
    for record in records {
        *totals.entry(record.crop.as_str()).or_insert(0) += u64::from(record.production);
    }
    totals
        .into_iter()
        .map(|(crop, production)| CropTotal {
            crop: crop.to_string(),
            production,
        })
        .collect()
}

/// Quarterly production, one series per year.
pub fn quarterly_trend(records: &[Record]) -> Vec<TrendSeries> {
    let mut series: Vec<TrendSeries> = Vec::new();
    for point in group_by_year_quarter(records) {
        match series.last_mut() {
            Some(current) if current.year == point.year => current.points.push(point),
            _ => series.push(TrendSeries {
                year: point.year,
                points: vec![point],
            }),
        }
    }
    series
}

/// Box-plot statistics of the per-record yield, one entry per crop with at
/// least one record, ordered by crop name.
pub fn yield_distribution(records: &[Record]) -> Vec<BoxStats> {
    let mut by_crop: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for record in records {
        by_crop
            .entry(record.crop.as_str())
            .or_default()
            .push(record.yield_rate);
    }

    by_crop
        .into_iter()
        .map(|(crop, mut yields)| {
            yields.sort_by(f64::total_cmp);
            BoxStats {
                crop: crop.to_string(),
                min: yields[0],
                q1: quantile(&yields, 0.25),
                median: quantile(&yields, 0.5),
                q3: quantile(&yields, 0.75),
                max: yields[yields.len() - 1],
            }
        })
        .collect()
}

/// Farmers per crop and each crop's share of the filtered total, ordered by
/// crop name.
pub fn farmers_share(records: &[Record]) -> Vec<CropShare> {
    let mut per_crop: BTreeMap<&str, u64> = BTreeMap::new();
    let mut total = 0_u64;
    for record in records {
        *per_crop.entry(record.crop.as_str()).or_insert(0) += u64::from(record.farmers);
        total += u64::from(record.farmers);
    }

    per_crop
        .into_iter()
        .map(|(crop, farmers)| CropShare {
            crop: crop.to_string(),
            farmers,
            share: if total == 0 {
                0.0
            } else {
                farmers as f64 / total as f64
            },
        })
        .collect()
}

/// Linear-interpolation quantile over sorted values. `sorted` must be
/// non-empty.
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let position = p * (sorted.len() - 1) as f64;
    let low = position.floor() as usize;
    let high = position.ceil() as usize;
    if low == high {
        sorted[low]
    } else {
        let weight = position - low as f64;
        sorted[low] * (1.0 - weight) + sorted[high] * weight
    }
}

#[cfg(test)]
mod tests {
    use super::{farmers_share, quantile, quarterly_trend, yield_distribution};
    use agristat_core::Record;

    fn record(year: u16, quarter: u8, crop: &str, yield_rate: f64, farmers: u32) -> Record {
        Record {
            year,
            quarter,
            crop: crop.to_string(),
            production: 1000,
            area: 500,
            yield_rate,
            farmers,
        }
    }

    #[test]
    fn quantile_interpolates_between_values() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&values, 0.0), 1.0);
        assert_eq!(quantile(&values, 0.5), 2.5);
        assert_eq!(quantile(&values, 1.0), 4.0);
    }

    #[test]
    fn box_stats_on_a_known_distribution() {
        let records: Vec<_> = [1.0, 2.0, 3.0, 4.0, 5.0]
            .into_iter()
            .map(|y| record(2022, 1, "Maize", y, 10))
            .collect();
        let stats = yield_distribution(&records);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].min, 1.0);
        assert_eq!(stats[0].q1, 2.0);
        assert_eq!(stats[0].median, 3.0);
        assert_eq!(stats[0].q3, 4.0);
        assert_eq!(stats[0].max, 5.0);
    }

    #[test]
    fn trend_series_split_per_year() {
        let records = vec![
            record(2022, 1, "Maize", 2.0, 10),
            record(2022, 2, "Maize", 2.0, 10),
            record(2023, 1, "Maize", 2.0, 10),
        ];
        let series = quarterly_trend(&records);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].year, 2022);
        assert_eq!(series[0].points.len(), 2);
        assert_eq!(series[1].year, 2023);
    }

    #[test]
    fn shares_sum_to_one() {
        let records = vec![
            record(2022, 1, "Maize", 2.0, 30),
            record(2022, 1, "Rice", 2.0, 70),
        ];
        let shares = farmers_share(&records);
        let total: f64 = shares.iter().map(|s| s.share).sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert_eq!(shares[0].crop, "Maize");
        assert_eq!(shares[0].farmers, 30);
    }

    #[test]
    fn empty_input_produces_empty_charts() {
        assert!(yield_distribution(&[]).is_empty());
        assert!(farmers_share(&[]).is_empty());
        assert!(quarterly_trend(&[]).is_empty());
    }
}
