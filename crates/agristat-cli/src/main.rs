mod registry;
mod settings;

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use uuid::Uuid;

use agristat_core::{Dataset, Domain, Error as CoreError, validate_dataset};
use agristat_generate::{GenerationEngine, GenerationError};
use agristat_query::{
    ExportError, FilterSpec, KpiSummary, build_charts, group_by_year_quarter, read_records_csv,
    summarize, write_records_csv,
};
use registry::{RunContext, init_run_logging, start_run, write_json};
use settings::{Settings, load_or_create_settings};

#[derive(Debug, Error)]
enum CliError {
    #[error("registry error: {0}")]
    Registry(#[from] registry::RegistryError),
    #[error("settings error: {0}")]
    Settings(#[from] settings::SettingsError),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("export error: {0}")]
    Export(#[from] ExportError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "agristat", version, about = "Agristat CLI")]
struct Cli {
    /// Path to the settings file.
    #[arg(long, default_value = "agristat.toml")]
    settings: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Synthesize a dataset and write its run artifacts.
    Generate(GenerateArgs),
    /// Filter a dataset and report KPIs, trend, and chart data.
    Report(ReportArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Seed for the deterministic generator.
    #[arg(long)]
    seed: Option<u64>,
    /// Output directory for runs.
    #[arg(long)]
    run_dir: Option<PathBuf>,
    /// Optional extra copy of the dataset CSV.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Seed used to rebuild the dataset when no input file is given.
    #[arg(long, conflicts_with = "input")]
    seed: Option<u64>,
    /// Previously exported dataset CSV to report over.
    #[arg(long)]
    input: Option<PathBuf>,
    /// Year(s) to keep; default is every year in the domain.
    #[arg(long = "year", value_name = "YEAR")]
    years: Vec<u16>,
    /// Quarter(s) to keep; default is every quarter.
    #[arg(long = "quarter", value_name = "QUARTER")]
    quarters: Vec<u8>,
    /// Crop(s) to keep; default is every crop.
    #[arg(long = "crop", value_name = "CROP")]
    crops: Vec<String>,
    /// Output directory for runs.
    #[arg(long)]
    run_dir: Option<PathBuf>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = load_or_create_settings(&cli.settings)?;

    match cli.command {
        Command::Generate(args) => run_generate(args, settings),
        Command::Report(args) => run_report(args, settings),
    }
}

fn run_generate(args: GenerateArgs, settings: Settings) -> Result<(), CliError> {
    let seed = args.seed.unwrap_or(settings.seed);
    let run_dir = args.run_dir.unwrap_or(settings.run_dir);
    let domain = settings.domain;

    let run_ctx = RunContext {
        run_id: Uuid::new_v4().to_string(),
        started_at: chrono::Utc::now(),
        command: "generate".to_string(),
        seed,
        run_dir,
        domain: domain.clone(),
    };
    let run_paths = start_run(&run_ctx)?;
    init_run_logging(&run_paths.logs_path)?;

    tracing::info!(event = "run_started", run_id = %run_ctx.run_id, seed);
    let timer = Instant::now();

    let outcome = GenerationEngine::default().run(&domain, seed)?;
    validate_dataset(&outcome.dataset, &domain)?;
    tracing::info!(
        event = "dataset_generated",
        records = outcome.report.records_generated
    );

    let dataset_path = run_paths.artifact("dataset.csv");
    let bytes = write_records_csv(&dataset_path, &outcome.dataset.records)?;
    tracing::info!(event = "dataset_written", path = %dataset_path.display(), bytes);

    if let Some(out_path) = &args.out {
        if let Some(parent) = out_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::copy(&dataset_path, out_path)?;
    }

    write_json(&run_paths.artifact("generation_report.json"), &outcome.report)?;

    let summary = summarize(&outcome.dataset.records);
    write_json(&run_paths.artifact("summary.json"), &summary)?;
    tracing::info!(event = "summary_written");

    print_kpis(&summary);

    let duration_ms = timer.elapsed().as_millis();
    tracing::info!(event = "run_finished", status = "success", duration_ms);
    println!("run artifacts in {}", run_paths.root.display());

    Ok(())
}

fn run_report(args: ReportArgs, settings: Settings) -> Result<(), CliError> {
    let seed = args.seed.unwrap_or(settings.seed);
    let run_dir = args.run_dir.unwrap_or(settings.run_dir);
    let domain = settings.domain;

    let run_ctx = RunContext {
        run_id: Uuid::new_v4().to_string(),
        started_at: chrono::Utc::now(),
        command: "report".to_string(),
        seed,
        run_dir,
        domain: domain.clone(),
    };
    let run_paths = start_run(&run_ctx)?;
    init_run_logging(&run_paths.logs_path)?;

    tracing::info!(event = "run_started", run_id = %run_ctx.run_id);
    let timer = Instant::now();

    let dataset = match &args.input {
        Some(path) => {
            let dataset = Dataset::new(read_records_csv(path)?);
            tracing::info!(event = "dataset_loaded", path = %path.display(), records = dataset.len());
            dataset
        }
        None => {
            let outcome = GenerationEngine::default().run(&domain, seed)?;
            tracing::info!(event = "dataset_generated", seed);
            outcome.dataset
        }
    };

    let spec = selection_filter(&domain, &args.years, &args.quarters, &args.crops);
    warn_on_unknown_selections(&domain, &spec);
    let filtered = spec.apply(&dataset);
    tracing::info!(event = "filter_applied", records = filtered.len());

    write_records_csv(&run_paths.artifact("filtered.csv"), &filtered.records)?;

    let summary = summarize(&filtered.records);
    write_json(&run_paths.artifact("summary.json"), &summary)?;

    let trend = group_by_year_quarter(&filtered.records);
    write_json(&run_paths.artifact("trend.json"), &trend)?;

    let charts = build_charts(&filtered.records);
    write_json(&run_paths.artifact("charts.json"), &charts)?;
    tracing::info!(event = "report_written", path = %run_paths.root.display());

    print_kpis(&summary);

    let duration_ms = timer.elapsed().as_millis();
    tracing::info!(event = "run_finished", status = "success", duration_ms);
    println!("run artifacts in {}", run_paths.root.display());

    Ok(())
}

/// Absent flags select the full domain axis; present flags select exactly
/// the given values, so an unmatched selection yields an empty view.
fn selection_filter(
    domain: &Domain,
    years: &[u16],
    quarters: &[u8],
    crops: &[String],
) -> FilterSpec {
    let mut spec = FilterSpec::all(domain);
    if !years.is_empty() {
        spec.years = years.iter().copied().collect();
    }
    if !quarters.is_empty() {
        spec.quarters = quarters.iter().copied().collect();
    }
    if !crops.is_empty() {
        spec.crops = crops.iter().cloned().collect();
    }
    spec
}

fn warn_on_unknown_selections(domain: &Domain, spec: &FilterSpec) {
    let domain_crops: BTreeSet<&str> = domain.crops.iter().map(String::as_str).collect();
    for year in spec.years.iter().filter(|y| !domain.years.contains(y)) {
        tracing::warn!(event = "unknown_selection", dimension = "year", value = year);
    }
    for quarter in spec.quarters.iter().filter(|q| !domain.quarters.contains(q)) {
        tracing::warn!(event = "unknown_selection", dimension = "quarter", value = quarter);
    }
    for crop in spec.crops.iter().filter(|c| !domain_crops.contains(c.as_str())) {
        tracing::warn!(event = "unknown_selection", dimension = "crop", value = %crop);
    }
}

fn print_kpis(summary: &KpiSummary) {
    let avg_yield = summary
        .avg_yield
        .map(|value| format!("{value:.2}"))
        .unwrap_or_else(|| "n/a".to_string());

    println!("Records                 {}", summary.records);
    println!(
        "Total Production (tons) {}",
        group_thousands(summary.total_production)
    );
    println!(
        "Total Area (ha)         {}",
        group_thousands(summary.total_area)
    );
    println!("Average Yield (t/ha)    {avg_yield}");
    println!(
        "Total Farmers           {}",
        group_thousands(summary.total_farmers)
    );
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::group_thousands;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
