//! AOC CLI - fetch puzzle inputs and submit answers to Advent of Code

mod cache;
mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

use cache::PuzzleKey;
use clap::Parser;
use clap::error::ErrorKind;
use cli::{Args, Command};
use commands::Executor;
use config::Config;
use error::CliError;
use std::io::{self, BufRead, Write};
use zeroize::Zeroizing;

const EXIT_OK: i32 = 0;
const EXIT_NOT_CORRECT: i32 = 1;
const EXIT_FAILURE: i32 = -1;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => EXIT_OK,
                _ => EXIT_FAILURE,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    logging::init(args.quiet);

    match run(args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_FAILURE);
        }
    }
}

fn run(args: Args) -> Result<i32, CliError> {
    let config = Config::from_args(&args)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    match args.command {
        Command::Cookie { value } => {
            let value = match value {
                Some(value) => Zeroizing::new(value),
                None => config::prompt_session()?,
            };
            config.store_cookie(&value)?;
            Ok(EXIT_OK)
        }
        Command::Fetch { year, day, part } => {
            let executor = open(config, &mut input)?;
            let puzzle_input = executor.fetch(PuzzleKey::new(year, day, part))?;

            let mut stdout = io::stdout().lock();
            stdout.write_all(&puzzle_input)?;
            stdout.flush()?;
            Ok(EXIT_OK)
        }
        Command::Submit {
            year,
            day,
            part,
            answer,
            offline,
        } => {
            let executor = open(config, &mut input)?;
            let answer = commands::read_answer(answer, &mut input)?;
            let outcome = executor.submit(year, day, part, &answer, offline)?;

            eprintln!("{}", output::format_outcome(&answer, &outcome));
            Ok(if outcome.is_correct() {
                EXIT_OK
            } else {
                EXIT_NOT_CORRECT
            })
        }
        Command::Status { year } => {
            let executor = open(config, &mut input)?;
            let report = executor.status(year)?;
            output::write_status(&mut io::stdout().lock(), &report)?;
            Ok(EXIT_OK)
        }
    }
}

/// Resolve the artifacts root (prompting on first use) and build the executor
fn open(config: Config, input: &mut impl BufRead) -> Result<Executor, CliError> {
    let root = config.artifacts_root(input, &mut io::stderr())?;
    Executor::new(config, root)
}
