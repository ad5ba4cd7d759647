//! Checks a round after the fact.
//!
//! Usage: fair-rps-verify --key <KEY> --hmac <HMAC> <MOVE>
//!
//! Recomputes HMAC-SHA256(key, move) and compares it with the digest the
//! game printed before the prompt.

use std::process::ExitCode;
use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing::debug;

use fair_rps::{config::{init_tracing, level_for_verbosity}, verify_reveal};

#[derive(Parser, Debug)]
#[command(name = "fair-rps-verify", version)]
#[command(about = "Verify a disclosed key against the HMAC shown before the round")]
struct Args {
    /// Key printed after the round (64 hex chars)
    #[arg(short, long)]
    key: String,

    /// HMAC printed before the round (64 hex chars)
    #[arg(long)]
    hmac: String,

    /// Computer move printed after the round
    #[arg(value_name = "MOVE", allow_hyphen_values = true)]
    move_label: String,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            return ExitCode::from(1);
        }
        Err(err) => err.exit(),
    };
    init_tracing(level_for_verbosity(args.verbose));

    match run(&args) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("fair-rps-verify failed: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> anyhow::Result<u8> {
    let report = verify_reveal(&args.key, &args.move_label, &args.hmac)
        .context("could not decode key or HMAC")?;
    debug!(valid = report.valid, "verification finished");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.valid {
        println!("HMAC verified: '{}' matches {}", report.move_label, report.published);
    } else {
        println!(
            "HMAC mismatch: published {}, computed {} for '{}'",
            report.published, report.computed, report.move_label
        );
    }

    Ok(if report.valid { 0 } else { 1 })
}
