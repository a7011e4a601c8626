//! `dimcalc` - interactive calculator for quantities with SI dimensions

mod logging;
mod repl;

use anyhow::{Context, Result};
use clap::Parser;
use dimcalc_engine::{Session, SessionOptions};
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(name = "dimcalc")]
#[clap(about = "Calculator for dimensioned quantities with LaTeX transcripts")]
struct Args {
    /// Read lines from this file instead of stdin
    #[clap(short, long)]
    script: Option<PathBuf>,

    /// Do not predefine pi, e and tau
    #[clap(long)]
    no_constants: bool,

    /// Log level for the calculator crates (RUST_LOG overrides)
    #[clap(long, env = "DIMCALC_LOG", default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_simple_logging(&args.log_level);

    let mut session = Session::with_options(SessionOptions {
        constants: !args.no_constants,
    });

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let failures = match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            repl::run(&mut session, BufReader::new(file), &mut out, &mut err, false)?
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            repl::run(&mut session, stdin.lock(), &mut out, &mut err, interactive)?
        }
    };

    tracing::debug!(
        lines = session.ledger().len(),
        failures,
        "session finished"
    );
    Ok(())
}
