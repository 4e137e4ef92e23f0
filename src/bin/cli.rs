//! tracestats CLI - compare the movement of two tracked parties
//!
//! Usage:
//!   tracestats-cli <party1.json> <party2.json> [--min-velocity <m/s>] [--timezone <tz>] [--json]
//!
//! Each input file is a JSON array of tracking records carrying a `timestamp`
//! (epoch seconds) and a `lonlat` point such as `POINT (-122.1759 48.1492)`.

use clap::Parser;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracestats::{
    AnalysisConfig, Comparison, DayBoundary, Diagnostics, PartySummary, Result,
    compare_parties_with_diagnostics, load_records,
};

#[derive(Parser)]
#[command(name = "tracestats-cli")]
#[command(about = "Compare average velocity and driving time of two GPS-tracked parties", long_about = None)]
struct Cli {
    /// JSON records for the first party
    party1: PathBuf,

    /// JSON records for the second party
    party2: PathBuf,

    /// Velocity (m/s) at or above which a segment counts as moving
    #[arg(long, default_value = "0.5")]
    min_velocity: f64,

    /// Time zone for the daily breakdown: local, utc, or an offset like +02:00
    #[arg(long, default_value = "local")]
    timezone: DayBoundary,

    /// Print both summaries as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Also print per-stage filtering counts (included under `diagnostics` with --json)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = AnalysisConfig {
        min_velocity: cli.min_velocity,
        day_boundary: cli.timezone,
    };
    config.validate()?;

    // Load both inputs before analyzing either, so a bad second file fails fast
    let party1 = load_records(&cli.party1)?;
    let party2 = load_records(&cli.party2)?;

    let (comparison, (diag1, diag2)) = compare_parties_with_diagnostics(&party1, &party2, &config);

    if cli.json {
        let output = JsonReport {
            comparison: &comparison,
            diagnostics: cli.verbose.then_some([&diag1, &diag2]),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_party(1, &comparison.first, cli.verbose.then_some(&diag1));
    print_party(2, &comparison.second, cli.verbose.then_some(&diag2));

    Ok(())
}

/// JSON output: the comparison fields, plus diagnostics when verbose.
#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    comparison: &'a Comparison,
    #[serde(skip_serializing_if = "Option::is_none")]
    diagnostics: Option<[&'a Diagnostics; 2]>,
}

fn print_party(index: usize, summary: &PartySummary, diagnostics: Option<&Diagnostics>) {
    println!("\n=== PARTY {} ===", index);
    println!("Points: {}", summary.point_count);
    println!("Avg velocity: {:.1} km/h", summary.average_velocity_km_h);
    println!("Total driving: {:.2} hours", summary.total_driving_time_hours);
    println!("\nDaily breakdown:");
    for (date, hours) in &summary.daily_driving_hours {
        println!("  {}: {:.2} hours", date, hours);
    }

    if let Some(d) = diagnostics {
        println!("\nDiagnostics:");
        println!("  Records seen: {}", d.records_seen);
        println!("  Not an object: {}", d.extraction.not_an_object);
        println!("  Missing timestamp: {}", d.extraction.missing_timestamp);
        println!("  Missing lonlat: {}", d.extraction.missing_lonlat);
        println!("  Unparsable lonlat: {}", d.extraction.unparsable_lonlat);
        println!(
            "  Segments: {} ({} moving, {} pairs skipped)",
            d.segments, d.moving_segments, d.skipped_pairs
        );
    }
}
