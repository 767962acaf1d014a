//! Command-line entry point.
//!
//! Generates a seeded synthetic workload, evaluates every policy
//! configuration over it, prints and writes the comparison table, and
//! optionally renders charts. All configuration is passed explicitly
//! from here into the core; nothing lives in global state.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tick_sched::compare::compare_policies;
use tick_sched::report::{self, ChartRenderer, GnuplotRenderer};
use tick_sched::workload::WorkloadConfig;

/// Compare CPU scheduling policies over a synthetic workload.
#[derive(Debug, Parser)]
#[command(name = "tick-sched", version, about)]
struct Args {
    /// Number of synthetic processes to generate.
    #[arg(long, default_value_t = 100)]
    processes: usize,

    /// Number of identical cores to simulate.
    #[arg(long, default_value_t = 4)]
    cores: usize,

    /// Maximum arrival tick for generated processes.
    #[arg(long, default_value_t = 1000)]
    max_arrival: u64,

    /// Maximum burst length for generated processes.
    #[arg(long, default_value_t = 200)]
    max_burst: u64,

    /// Workload generator seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Round Robin quanta to evaluate, one run per value.
    #[arg(long, value_delimiter = ',', default_values_t = vec![10u64, 5, 20])]
    quantum: Vec<u64>,

    /// Output path for the CSV table.
    #[arg(long, default_value = "results.csv")]
    out: PathBuf,

    /// Render PNG charts from the written table (requires gnuplot).
    #[arg(long)]
    charts: bool,

    /// Directory for rendered charts.
    #[arg(long, default_value = ".")]
    chart_dir: PathBuf,
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(args.seed);
    let workload = WorkloadConfig::new(args.processes)
        .with_max_arrival(args.max_arrival)
        .with_max_burst(args.max_burst)
        .generate(&mut rng);

    let runs = compare_policies(&workload, args.cores, &args.quantum)?;

    print!("{}", report::format_table(&runs));
    report::write_table(&args.out, &runs)?;
    println!("\nMetrics written to {}", args.out.display());

    if args.charts {
        let images = GnuplotRenderer::new(&args.chart_dir).render(&args.out)?;
        println!("Rendered {} charts in {}", images.len(), args.chart_dir.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
