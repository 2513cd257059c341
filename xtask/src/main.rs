use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "atomic-flag workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the flag benchmarks and compare against lock-based booleans
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCH: &str = "flag_benchmark";

/// Implementations in report column order. The first one is the baseline.
const IMPLEMENTATIONS: &[&str] = &["mutex", "rwlock", "std_atomic_bool", "atomic_flag"];

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running {BENCH}...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0")
        .args(["bench", "-p", "atomic-flag", "--bench", BENCH]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.args(["--measurement-time", "0.1", "--noplot", "--sample-size", "10"]);
    }

    let status = cmd
        .status()
        .with_context(|| format!("failed to run cargo bench --bench {BENCH}"))?;
    if !status.success() {
        anyhow::bail!("benchmark {BENCH} failed with {status}");
    }

    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

/// Mean time per iteration in nanoseconds, keyed by group then implementation.
type Results = BTreeMap<String, BTreeMap<String, f64>>;

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, &mut results)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(report_path, render_report(&results))
        .with_context(|| format!("failed to write {}", report_path.display()))?;

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn render_report(results: &Results) -> String {
    use std::fmt::Write;

    let baseline = IMPLEMENTATIONS[0];
    let mut out = String::new();

    let _ = writeln!(out, "# Flag Benchmark Report\n");

    // Header
    let _ = write!(out, "| Group |");
    for name in IMPLEMENTATIONS {
        let _ = write!(out, " {name} (ns) | vs {baseline} |");
    }
    let _ = writeln!(out);

    // Separator
    let _ = write!(out, "|---|");
    for _ in IMPLEMENTATIONS {
        let _ = write!(out, "---|---|");
    }
    let _ = writeln!(out);

    // Rows
    for (group, by_impl) in results {
        let _ = write!(out, "| {group} |");
        let base_ns = by_impl.get(baseline).copied();

        for name in IMPLEMENTATIONS {
            match (by_impl.get(*name), base_ns) {
                (Some(ns), Some(base)) if *ns > 0.0 => {
                    let _ = write!(out, " {ns:.2} | **{:.2}x** |", base / ns);
                }
                (Some(ns), _) => {
                    let _ = write!(out, " {ns:.2} | - |");
                }
                (None, _) => {
                    let _ = write!(out, " N/A | - |");
                }
            }
        }
        let _ = writeln!(out);
    }

    out
}

/// Walks criterion's output tree: `<group>/<implementation>/new/estimates.json`.
fn collect_results(dir: &Path, results: &mut Results) -> Result<()> {
    let entries = fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results)?;
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        let Some(run_dir) = path.parent() else { continue };
        if run_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
            continue;
        }
        let Some(impl_dir) = run_dir.parent() else { continue };
        let Some(group_dir) = impl_dir.parent() else { continue };
        let (Some(implementation), Some(group)) = (
            impl_dir.file_name().and_then(|s| s.to_str()),
            group_dir.file_name().and_then(|s| s.to_str()),
        ) else {
            continue;
        };

        // Filter out 'report' directory
        if implementation == "report" || group == "report" {
            continue;
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let json: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        if let Some(mean) = json
            .get("mean")
            .and_then(|m| m.get("point_estimate"))
            .and_then(serde_json::Value::as_f64)
        {
            results
                .entry(group.to_string())
                .or_default()
                .insert(implementation.to_string(), mean);
        }
    }

    Ok(())
}
