use agristat_core::{Dataset, Domain, Record, round2};
use agristat_generate::GenerationEngine;
use agristat_query::{FilterSpec, group_by_year_quarter, summarize};

/// Two years, one quarter, two crops, with known production values.
fn scenario_dataset() -> (Dataset, Domain) {
    let domain = Domain {
        years: vec![2022, 2023],
        quarters: vec![1],
        crops: vec!["Maize".to_string(), "Rice".to_string()],
    };
    let productions = [
        (2022, "Maize", 1000),
        (2022, "Rice", 2000),
        (2023, "Maize", 1500),
        (2023, "Rice", 2500),
    ];
    let records = productions
        .into_iter()
        .map(|(year, crop, production)| Record {
            year,
            quarter: 1,
            crop: crop.to_string(),
            production,
            area: 500,
            yield_rate: round2(f64::from(production) / 500.0),
            farmers: 100,
        })
        .collect();
    (Dataset::new(records), domain)
}

#[test]
fn scenario_totals_match() {
    let (dataset, domain) = scenario_dataset();

    let full = summarize(&FilterSpec::all(&domain).apply(&dataset).records);
    assert_eq!(full.total_production, 7000);

    let mut maize_only = FilterSpec::all(&domain);
    maize_only.crops = ["Maize".to_string()].into_iter().collect();
    let maize = summarize(&maize_only.apply(&dataset).records);
    assert_eq!(maize.total_production, 2500);
}

#[test]
fn full_domain_filter_is_identity() {
    let domain = Domain::default();
    let dataset = GenerationEngine::default()
        .run(&domain, 42)
        .expect("run generation")
        .dataset;

    let filtered = FilterSpec::all(&domain).apply(&dataset);
    assert_eq!(filtered, dataset);
}

#[test]
fn filter_is_idempotent() {
    let domain = Domain::default();
    let dataset = GenerationEngine::default()
        .run(&domain, 42)
        .expect("run generation")
        .dataset;

    let mut spec = FilterSpec::all(&domain);
    spec.years = [2023, 2024].into_iter().collect();
    spec.crops = ["Rice".to_string(), "Cassava".to_string()]
        .into_iter()
        .collect();

    let once = spec.apply(&dataset);
    let twice = spec.apply(&once);
    assert_eq!(once, twice);
}

#[test]
fn any_empty_selection_empties_the_result() {
    let domain = Domain::default();
    let dataset = GenerationEngine::default()
        .run(&domain, 42)
        .expect("run generation")
        .dataset;

    for dimension in ["years", "quarters", "crops"] {
        let mut spec = FilterSpec::all(&domain);
        match dimension {
            "years" => spec.years.clear(),
            "quarters" => spec.quarters.clear(),
            _ => spec.crops.clear(),
        }
        assert!(spec.apply(&dataset).is_empty(), "{dimension} cleared");
    }
}

#[test]
fn full_filter_preserves_totals() {
    let domain = Domain::default();
    let dataset = GenerationEngine::default()
        .run(&domain, 7)
        .expect("run generation")
        .dataset;

    let direct = summarize(&dataset.records);
    let filtered = summarize(&FilterSpec::all(&domain).apply(&dataset).records);
    assert_eq!(direct, filtered);
}

#[test]
fn trend_covers_every_year_quarter_pair() {
    let domain = Domain::default();
    let dataset = GenerationEngine::default()
        .run(&domain, 7)
        .expect("run generation")
        .dataset;

    let trend = group_by_year_quarter(&dataset.records);
    assert_eq!(trend.len(), 16);
    assert_eq!((trend[0].year, trend[0].quarter), (2022, 1));
    assert_eq!((trend[15].year, trend[15].quarter), (2025, 4));

    let trend_total: u64 = trend.iter().map(|p| p.production).sum();
    assert_eq!(trend_total, summarize(&dataset.records).total_production);
}

#[test]
fn empty_summary_serializes_null_average() {
    let summary = summarize(&[]);
    let value = serde_json::to_value(&summary).expect("serialize summary");
    assert!(value["avg_yield"].is_null());
    assert_eq!(value["total_production"], 0);
}
