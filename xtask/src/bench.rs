//! Runs the criterion suite and summarizes `target/criterion` as markdown.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

const BENCH: &str = "box_slice_benchmark";

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
    #[serde(default)]
    throughput: Option<Throughput>,
}

// Byte counts are parsed but not reported.
#[allow(dead_code)]
#[derive(Deserialize)]
enum Throughput {
    Elements(u64),
    Bytes(u64),
    BytesDecimal(u64),
}

#[derive(Debug, Clone)]
struct Row {
    id: String,
    mean_ns: f64,
    elements: Option<u64>,
}

pub fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running {BENCH}...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0")
        .args(["bench", "--bench", BENCH]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.args(["--measurement-time", "0.1", "--sample-size", "10", "--noplot"]);
    }

    let status = cmd
        .status()
        .with_context(|| format!("Failed to run bench {BENCH}"))?;
    if !status.success() {
        anyhow::bail!("Benchmark {BENCH} failed");
    }

    println!("Finished {BENCH} in {:.2?}", start.elapsed());
    Ok(())
}

pub fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut rows = Vec::new();
    collect_results(criterion_dir, &mut rows);
    rows.sort_by(|a, b| a.id.cmp(&b.id));

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(report_path)
        .with_context(|| format!("Failed to create {}", report_path.display()))?;
    write_report(&mut file, &rows)?;

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn write_report(out: &mut impl Write, rows: &[Row]) -> Result<()> {
    writeln!(out, "# Benchmark Report")?;
    writeln!(out)?;
    writeln!(out, "| Benchmark | Mean | Throughput |")?;
    writeln!(out, "|---|---|---|")?;
    for row in rows {
        let throughput = match row.elements {
            Some(elements) if row.mean_ns > 0.0 => format_ops(per_second(elements, row.mean_ns)),
            _ => "-".to_string(),
        };
        writeln!(
            out,
            "| {} | {} | {} |",
            row.id,
            format_time(row.mean_ns),
            throughput
        )?;
    }
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn per_second(elements: u64, mean_ns: f64) -> f64 {
    elements as f64 * 1e9 / mean_ns
}

fn format_time(ns: f64) -> String {
    if ns >= 1_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else if ns >= 1_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else {
        format!("{ns:.1} ns")
    }
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M elem/s", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K elem/s", ops / 1_000.0)
    } else {
        format!("{ops:.0} elem/s")
    }
}

// Criterion layout: .../<group>/<function>/new/{estimates,benchmark}.json
fn collect_results(dir: &Path, rows: &mut Vec<Row>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) == Some("new") {
            match read_row(&path) {
                Ok(row) => rows.push(row),
                Err(e) => eprintln!("Warning: skipping {}: {e:#}", path.display()),
            }
        } else if path.file_name().and_then(|s| s.to_str()) != Some("report") {
            collect_results(&path, rows);
        }
    }
}

fn read_row(dir: &Path) -> Result<Row> {
    let estimates: Estimates = read_json(&dir.join("estimates.json"))?;
    let info: BenchmarkInfo = read_json(&dir.join("benchmark.json"))?;

    let elements = match info.throughput {
        Some(Throughput::Elements(n)) => Some(n),
        Some(Throughput::Bytes(_) | Throughput::BytesDecimal(_)) | None => None,
    };

    Ok(Row {
        id: info.full_id,
        mean_ns: estimates.mean.point_estimate,
        elements,
    })
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}
