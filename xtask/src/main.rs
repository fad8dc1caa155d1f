use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "nullable workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the test-suite under every feature set
    Test,
    /// Run the benchmark under every feature set and write a report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

/// (baseline name, cargo features)
const FEATURE_SETS: &[(&str, &str)] = &[
    ("plain", ""),
    ("tracing", "tracing"),
    ("proptest", "proptest"),
];

const BENCH: &str = "nullable_benchmark";

#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

#[derive(Deserialize)]
struct BenchmarkInfo {
    full_id: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Test => run_tests()?,
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn cargo_with_features(subcommand: &str, features: &str) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.arg(subcommand).arg("-p").arg("nullable");
    if !features.is_empty() {
        cmd.arg("--features").arg(features);
    }
    cmd
}

fn run_tests() -> Result<()> {
    for (name, features) in FEATURE_SETS {
        println!("\n>>> Testing feature set: {}", name);
        let start = Instant::now();

        let status = cargo_with_features("test", features)
            .status()
            .with_context(|| format!("Failed to run tests for {}", name))?;
        if !status.success() {
            anyhow::bail!("Tests failed for feature set {}", name);
        }

        println!("Finished {} in {:.2?}", name, start.elapsed());
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running benchmarks...");

    // Build first to avoid measuring build time
    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["build", "-p", "nullable", "--bench", BENCH, "--release"])
        .status()?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    // `proptest` changes nothing on the hot path; only compare logging.
    for (name, features) in FEATURE_SETS.iter().filter(|(name, _)| *name != "proptest") {
        println!("\n>>> Benchmarking feature set: {}", name);
        let start = Instant::now();

        let mut cmd = cargo_with_features("bench", features);
        cmd.env("CARGO_INCREMENTAL", "0");
        cmd.arg("--bench").arg(BENCH);

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        cmd.arg("--save-baseline").arg(name);

        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd
            .status()
            .with_context(|| format!("Failed to run bench for {}", name))?;

        if status.success() {
            println!("Finished {} in {:.2?}", name, start.elapsed());
        } else {
            eprintln!("Warning: Benchmark failed for {}", name);
        }
    }

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
    collect_results(criterion_dir, &mut results)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    use std::fmt::Write as _;
    let mut out = String::new();
    writeln!(out, "# Benchmark Report")?;
    writeln!(out)?;
    writeln!(out, "Mean time per iteration; the ratio is tracing / plain.")?;
    writeln!(out)?;
    writeln!(out, "| Benchmark | plain | tracing | ratio |")?;
    writeln!(out, "|---|---|---|---|")?;

    for (benchmark, baselines) in &results {
        let plain = baselines.get("plain").copied();
        let tracing = baselines.get("tracing").copied();
        let ratio = match (plain, tracing) {
            (Some(p), Some(t)) if p > 0.0 => format!("**{:.2}x**", t / p),
            _ => "-".to_string(),
        };
        writeln!(
            out,
            "| {} | {} | {} | {} |",
            benchmark,
            format_time(plain),
            format_time(tracing),
            ratio
        )?;
    }

    fs::write(report_path, out)
        .with_context(|| format!("Failed to write {}", report_path.display()))?;
    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_time(ns: Option<f64>) -> String {
    match ns {
        None => "N/A".to_string(),
        Some(ns) if ns >= 1_000_000.0 => format!("{:.2} ms", ns / 1_000_000.0),
        Some(ns) if ns >= 1_000.0 => format!("{:.2} µs", ns / 1_000.0),
        Some(ns) => format!("{:.2} ns", ns),
    }
}

/// Walks `target/criterion`, reading `<bench>/<baseline>/estimates.json`.
fn collect_results(dir: &Path, results: &mut BTreeMap<String, BTreeMap<String, f64>>) -> Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return Ok(()),
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results)?;
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        let Some(baseline_dir) = path.parent() else { continue };
        let Some(baseline) = baseline_dir.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if !FEATURE_SETS.iter().any(|(name, _)| *name == baseline) {
            continue;
        }

        let info_path = baseline_dir.join("benchmark.json");
        let info: BenchmarkInfo = match fs::read_to_string(&info_path) {
            Ok(content) => serde_json::from_str(&content)
                .with_context(|| format!("Malformed {}", info_path.display()))?,
            Err(_) => continue,
        };

        let content = fs::read_to_string(&path)?;
        let estimates: Estimates = serde_json::from_str(&content)
            .with_context(|| format!("Malformed {}", path.display()))?;

        results
            .entry(info.full_id)
            .or_default()
            .insert(baseline.to_string(), estimates.mean.point_estimate);
    }

    Ok(())
}
