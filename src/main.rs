//! Fair RPS
//!
//! Plays one round against the computer. The computer's move is committed
//! with an HMAC before the prompt and the key is disclosed afterwards.

use std::io;
use std::process::ExitCode;
use anyhow::Context;
use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Parser};
use rand::rngs::OsRng;
use tracing::info;

use fair_rps::{
    config::init_tracing,
    game::table::{DEFAULT_COLUMN_WIDTH, MAX_COLUMN_WIDTH, MIN_COLUMN_WIDTH},
    play_round, GameConfig, MoveSet, VERSION,
};

const USAGE: &str = "Usage: fair-rps [OPTIONS] [--] move1 move2 ... moveN \
(N must be odd and >= 3; put -- before a first move that starts with '-')";

#[derive(Parser, Debug)]
#[command(name = "fair-rps", version)]
#[command(about = "Rock-paper-scissors for any odd number of moves, with a provably fair computer")]
#[command(after_help = "Options must come before the first move. Everything from the first move on, \
including tokens like -h, is read as a move. Use -- if the first move starts with '-'.")]
struct Args {
    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Help table column width
    #[arg(
        long,
        default_value_t = DEFAULT_COLUMN_WIDTH,
        value_parser = RangedU64ValueParser::<usize>::new()
            .range(MIN_COLUMN_WIDTH as u64..=MAX_COLUMN_WIDTH as u64),
    )]
    column_width: usize,

    /// Moves in circular order; each is beaten by the next N/2
    #[arg(value_name = "MOVE", trailing_var_arg = true, allow_hyphen_values = true)]
    moves: Vec<String>,
}

fn main() -> ExitCode {
    // Argument errors exit 1 like every other invalid invocation;
    // --help and --version still exit 0.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            return ExitCode::from(1);
        }
        Err(err) => err.exit(),
    };
    let config = GameConfig::from_verbosity(args.verbose).with_column_width(args.column_width);
    init_tracing(config.log_level);

    match run(args.moves, &config) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("fair-rps failed: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(labels: Vec<String>, config: &GameConfig) -> anyhow::Result<u8> {
    info!("Fair RPS v{}", VERSION);

    let moves = match MoveSet::new(labels) {
        Ok(moves) => moves,
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.is_argument_count() {
                eprintln!("{}", USAGE);
            }
            return Ok(1);
        }
    };
    info!(moves = moves.len(), "move set accepted");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();

    let resolution = play_round(
        moves,
        config,
        &mut OsRng,
        &mut stdin.lock(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
    .context("console I/O failed")?;

    Ok(resolution.exit_code())
}
