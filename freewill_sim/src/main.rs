//! Free-Will Experiment CLI
//!
//! Run the override experiment and write its chart and metrics.

use clap::Parser;
use freewill_sim::{ExperimentConfig, ExperimentRunner, Reported, DEFAULT_RUN_NAME};
use std::path::PathBuf;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Free-will influence experiment: actual vs. perceived override effect
#[derive(Parser, Debug)]
#[command(name = "freewill-sim")]
#[command(about = "Measure actual vs. perceived influence of a forced override", long_about = None)]
struct Args {
    /// Total population members (N)
    #[arg(short = 'n', long, default_value = "100000")]
    population: usize,

    /// Members forced to the target choice (K)
    #[arg(short = 'k', long, default_value = "250")]
    influence: usize,

    /// Observer sample size (S)
    #[arg(short = 's', long, default_value = "500")]
    sample_size: usize,

    /// Target choice label
    #[arg(short, long, default_value = "east")]
    target: String,

    /// Action labels, comma separated
    #[arg(short, long, value_delimiter = ',', default_value = "east,west,north,south")]
    actions: Vec<String>,

    /// Output directory
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// Run name (output subdirectory and chart file stem)
    #[arg(long, default_value = DEFAULT_RUN_NAME)]
    run_name: String,

    /// Master seed for the reproducible stages (0 = random from time)
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Number of repeated runs with the same seed
    #[arg(long, default_value = "1")]
    runs: usize,

    /// Skip chart rendering
    #[arg(long)]
    no_chart: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// JSON output for scripting
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }

    // Determine base seed
    let seed = if args.seed == 0 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    } else {
        args.seed
    };

    let base = ExperimentConfig {
        seed,
        population_size: args.population,
        influence_count: args.influence,
        sample_size: args.sample_size,
        target: args.target.clone(),
        actions: args.actions.clone(),
        output_dir: args.output_dir.clone(),
        run_name: args.run_name.clone(),
        render_chart: !args.no_chart,
    };

    let mut all_results: Vec<Reported> = Vec::new();

    for run in 0..args.runs.max(1) {
        let run_name = if args.runs > 1 {
            format!("{}_{}", args.run_name, run + 1)
        } else {
            args.run_name.clone()
        };
        let config = ExperimentConfig {
            run_name,
            ..base.clone()
        };

        match ExperimentRunner::new(config).run() {
            Ok(reported) => all_results.push(reported),
            Err(e) => {
                error!("Run failed: {}", e);
                std::process::exit(1);
            }
        }
    }

    let report_failures: usize = all_results
        .iter()
        .map(|r| r.outcome().failures().len())
        .sum();

    if args.json {
        let summary = serde_json::json!({
            "seed": seed,
            "runs": all_results.iter().map(|r| {
                serde_json::json!({
                    "record": r.record(),
                    "table": r.table(),
                    "chart": r.outcome().chart_path(),
                    "fields": r.outcome().fields_path(),
                    "errors": r
                        .outcome()
                        .failures()
                        .iter()
                        .map(|e| e.to_string())
                        .collect::<Vec<_>>(),
                })
            }).collect::<Vec<_>>(),
        });
        match serde_json::to_string_pretty(&summary) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                error!("Failed to serialize summary: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        for reported in &all_results {
            println!("\n--- Final Results Table ---");
            println!("{}", reported.table());
        }

        if all_results.len() > 1 {
            let perceived: Vec<f64> = all_results
                .iter()
                .map(|r| r.record().random_percentage)
                .collect();
            let min = perceived.iter().copied().fold(f64::INFINITY, f64::min);
            let max = perceived.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            info!(
                "Majority stable at {:.4}% across {} runs; perceived ranged {:.4}% .. {:.4}%",
                all_results[0].record().majority_percentage,
                all_results.len(),
                min,
                max
            );
        }
    }

    // Statistics are already printed; output failures still fail the process
    if report_failures > 0 {
        error!("{} output write(s) failed", report_failures);
        std::process::exit(1);
    }
}
