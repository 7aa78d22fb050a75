//! Fill a clay scan from its spring and print the water counts.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use reservoir::config::{ReservoirConfig, DEFAULT_MARGIN, DEFAULT_SPRING_X};
use reservoir::report::WaterReport;
use reservoir::scan::Scan;
use reservoir::ReservoirError;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Clay scan, one vein per line (`x=495, y=2..7`).
    scan: PathBuf,

    /// Column of the spring.
    #[arg(short, long, default_value_t = DEFAULT_SPRING_X, allow_negative_numbers = true)]
    spring_x: i32,

    /// Spare sand columns on each side of the scanned clay.
    #[arg(short, long, default_value_t = DEFAULT_MARGIN)]
    margin: i32,

    /// Print the filled grid before the counts.
    #[arg(short, long)]
    render: bool,
}

fn run(args: &Args) -> Result<WaterReport, ReservoirError> {
    let text = std::fs::read_to_string(&args.scan)?;
    let scan: Scan = text.parse()?;
    info!("read {} veins from {}", scan.veins().len(), args.scan.display());

    let config = ReservoirConfig {
        spring_x: args.spring_x,
        margin: args.margin,
    };
    let grid = reservoir::simulate(&scan, &config)?;
    if args.render {
        println!("{grid}");
    }
    Ok(WaterReport::from_grid(&grid))
}

fn main() -> ExitCode {
    // Initialize logger from RUST_LOG.
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
