use agristat_core::{Record, round2};

fn sample() -> Record {
    Record {
        year: 2023,
        quarter: 3,
        crop: "Groundnut".to_string(),
        production: 1234,
        area: 456,
        yield_rate: round2(1234.0 / 456.0),
        farmers: 321,
    }
}

#[test]
fn csv_header_matches_contract() {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.serialize(sample()).expect("serialize record");
    let bytes = writer.into_inner().expect("flush writer");
    let output = String::from_utf8(bytes).expect("utf8 csv");

    let header = output.lines().next().expect("header line");
    assert_eq!(header, "Year,Quarter,Crop,Production,Area,Yield,Farmers");
}

#[test]
fn csv_round_trip_is_exact() {
    let record = sample();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.serialize(&record).expect("serialize record");
    let bytes = writer.into_inner().expect("flush writer");

    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    let parsed: Record = reader
        .deserialize()
        .next()
        .expect("one row")
        .expect("parse row");

    assert_eq!(parsed, record);
}

#[test]
fn json_fields_use_display_names() {
    let value = serde_json::to_value(sample()).expect("serialize json");
    assert_eq!(value["Year"], 2023);
    assert_eq!(value["Crop"], "Groundnut");
    assert!(value["Yield"].is_f64());
}
