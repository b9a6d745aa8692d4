//! Filtering, aggregation, and export over agricultural datasets.
//!
//! Everything in this crate is a pure function over
//! [`agristat_core::Dataset`] views: set-membership filters, KPI summaries,
//! chart-ready series, and CSV serialization of filtered data.

pub mod charts;
pub mod export;
pub mod filter;
pub mod summary;

pub use charts::{
    BoxStats, ChartBundle, CropShare, CropTotal, TrendSeries, build_charts, farmers_share,
    production_by_crop, quarterly_trend, yield_distribution,
};
pub use export::{ExportError, read_records_csv, write_records_csv};
pub use filter::{FilterSpec, Predicate};
pub use summary::{KpiSummary, TrendPoint, group_by_year_quarter, summarize};
