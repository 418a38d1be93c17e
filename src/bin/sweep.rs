use anyhow::{bail, Result};
use clap::Parser;

use std::time::Instant;

use connect_m_ai::{
    simulation::{run_sweep, SweepConfig},
    MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};

#[derive(Parser, Debug)]
#[command(name = "sweep", about = "Play engines of different search depths against each other")]
struct Args {
    /// Smallest board size to simulate (win length equals the board size)
    #[arg(long, default_value_t = 3)]
    min_size: usize,
    /// Largest board size to simulate
    #[arg(long, default_value_t = 6)]
    max_size: usize,
    /// Largest search depth for either engine, depths start at 1
    #[arg(long, default_value_t = 4)]
    max_depth: usize,
    /// Hide the progress bar
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.min_size < MIN_BOARD_SIZE
        || args.max_size > MAX_BOARD_SIZE
        || args.min_size > args.max_size
    {
        bail!(
            "board sizes must satisfy {} <= min-size <= max-size <= {}",
            MIN_BOARD_SIZE,
            MAX_BOARD_SIZE
        );
    }
    if args.max_depth == 0 {
        bail!("max-depth must be at least 1");
    }

    let config = SweepConfig {
        sizes: args.min_size..=args.max_size,
        depths: 1..=args.max_depth,
        show_progress: !args.quiet,
    };

    let start = Instant::now();
    let report = run_sweep(&config)?;
    println!("{}", report);
    println!(
        "Sweep of {} games completed in {:.1}s",
        report.cells.len(),
        start.elapsed().as_secs_f64()
    );
    Ok(())
}
