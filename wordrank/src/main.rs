#![forbid(unsafe_code)]

mod args;
mod helpers;
mod models;

use anyhow::Result;
use args::Args;
use clap::Parser;
use helpers::counter::Algorithm;
use models::leaderboard::Leaderboard;
use std::{
    io::{self, Write},
    process::ExitCode,
};
use tracing::{info, Level};
use tracing_subscriber::fmt;

fn run(args: &Args) -> Result<()> {
    let config = helpers::config::resolve(args)?;
    let stop_words = helpers::config::stop_words(&config)?;

    let mut algorithm =
        Algorithm::new(&config.table, config.service.algorithm)?;
    let summary = helpers::counter::load(
        &args.filename,
        config.table.max_word_length,
        &stop_words,
        &mut algorithm,
    )?;
    info!(
        "Counted {} distinct words out of {} tokens.",
        algorithm.len(),
        summary.tokens
    );

    let words = algorithm.rank(args.length.get())?;
    // The table is no longer needed once the words are copied out.
    drop(algorithm);

    let leaderboard = Leaderboard {
        length: args.length.get(),
        source: &args.filename,
        words,
        counts: args.counts,
    };

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", leaderboard)?;
    stdout.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            // `--help` and `--version` are not failures.
            let code = if error.use_stderr() { 1 } else { 0 };
            let _ = error.print();
            return ExitCode::from(code);
        },
    };

    fmt()
        .with_writer(io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            ExitCode::FAILURE
        },
    }
}
