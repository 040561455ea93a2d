use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use hrd_solver::display::write_solution;
use hrd_solver::scramble::scramble_seeded;
use hrd_solver::{parse_layout, render_solution, solve, SearchConfig, SearchOutcome, Strategy};
use log::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "Solve a 4x5 sliding-block puzzle", long_about = None)]
struct Args {
    /// Puzzle layout to solve
    #[arg(long)]
    inputfile: PathBuf,

    /// Where to write the solution boards
    #[arg(long)]
    outputfile: PathBuf,

    /// Search algorithm
    #[arg(long, value_enum)]
    algo: Strategy,

    /// Random-walk this many moves away from the input before solving
    #[arg(long, value_name = "STEPS")]
    scramble: Option<usize>,

    /// Seed for --scramble
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print each solution board to the terminal in colour
    #[arg(long)]
    show: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn run(args: &Args) -> Result<bool> {
    let text = fs::read_to_string(&args.inputfile)
        .with_context(|| format!("reading {}", args.inputfile.display()))?;
    let mut board = parse_layout(&text)
        .with_context(|| format!("parsing {}", args.inputfile.display()))?;

    if let Some(steps) = args.scramble {
        board = scramble_seeded(&board, steps, args.seed)?;
        info!("scrambled {steps} moves with seed {}:\n{board}", args.seed);
    }

    let path = match solve(board, &SearchConfig::new(args.algo))? {
        SearchOutcome::Solved { path, .. } => path,
        SearchOutcome::Unsolvable { stats } => {
            error!("no solution after {} expansions", stats.expanded);
            return Ok(false);
        }
    };

    fs::write(&args.outputfile, render_solution(path.boards()))
        .with_context(|| format!("writing {}", args.outputfile.display()))?;
    info!(
        "wrote {} boards ({} moves) to {}",
        path.boards().len(),
        path.len(),
        args.outputfile.display()
    );

    if args.show {
        write_solution(&mut io::stdout().lock(), &path)?;
    }
    Ok(true)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
