#![deny(unsafe_code)]

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

use dinuc_pairs::chart::{render_charts, ChartOptions};
use dinuc_pairs::loader::read_sequences;
use dinuc_pairs::report::{build_reports, write_details, write_table};

/// Count non-overlapping CG/GC/AT/TA pairs in DNA sequences (one per line)
/// and chart the results.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Input file, one sequence per line (.gz accepted)
    #[arg(default_value = "DNAFile.txt")]
    input: PathBuf,

    /// Where to write the chart PNG
    #[arg(short, long, default_value = "dinucleotides.png")]
    out: PathBuf,

    /// Chart width in pixels
    #[arg(long, default_value_t = 1800, value_parser = clap::value_parser!(u32).range(300..))]
    width: u32,

    /// Chart height in pixels
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(200..))]
    height: u32,

    /// Print the reports only
    #[arg(long)]
    no_chart: bool,
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let sequences = match read_sequences(&args.input) {
        Ok(seqs) => seqs,
        // NotFound and Io carry distinct messages; neither is retried.
        Err(e) => {
            eprintln!("Error: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    if sequences.is_empty() {
        println!("No sequences found in {}", args.input.display());
        return Ok(ExitCode::SUCCESS);
    }
    info!("Read {} sequences from {}", sequences.len(), args.input.display());

    let reports = build_reports(&sequences);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_details(&mut out, &reports)?;
    write_table(&mut out, &reports)?;
    out.flush()?;

    if args.no_chart {
        return Ok(ExitCode::SUCCESS);
    }

    info!("Creating charts...");
    let options = ChartOptions { width: args.width, height: args.height };
    render_charts(&args.out, &reports, options)
        .with_context(|| format!("failed to render charts for {}", args.input.display()))?;
    info!("Saved chart to {}", args.out.display());
    Ok(ExitCode::SUCCESS)
}
