//! CLI argument parsing using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fetch (and cache) Advent of Code puzzle inputs, submit (and cache) answers,
/// and show which puzzles are already solved.
///
/// Requests are authenticated with your personal session cookie, which you can copy
/// from your browser after logging in to adventofcode.com.
#[derive(Parser, Debug)]
#[command(name = "aoc", version, arg_required_else_help = true)]
pub struct Args {
    /// Directory holding cookie.txt and artifactspath.txt (defaults to the executable's directory)
    #[arg(long, global = true, env = "AOC_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Base URL of the puzzle website
    #[arg(long, global = true, env = "AOC_BASE_URL", hide = true)]
    pub base_url: Option<String>,

    /// Quiet mode - only warnings and errors on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Store the session cookie, overwriting an existing value
    Cookie {
        /// Session cookie value (prompted for when omitted)
        value: Option<String>,
    },

    /// Print the puzzle input, downloading it on first use
    ///
    /// The input is stored as <artifacts>/<year>/<day>/input<part>.txt and later
    /// calls return that file without contacting the website.
    Fetch {
        /// Puzzle year
        year: u16,

        /// Puzzle day
        #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
        day: u8,

        /// Suffix for the cache file name (input<part>.txt); the download is the same
        part: Option<u8>,
    },

    /// Check an answer, storing it once it is known to be correct
    ///
    /// Exit code 0 if the answer is correct, 1 if it is wrong.
    Submit {
        /// Puzzle year
        year: u16,

        /// Puzzle day
        #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
        day: u8,

        /// Puzzle part
        #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
        part: u8,

        /// The answer (read from standard input when omitted)
        answer: Option<String>,

        /// Store the answer as correct without asking the website
        #[arg(long)]
        offline: bool,
    },

    /// Count the gold stars of the stored answers
    Status {
        /// Only show this year, day by day
        year: Option<u16>,
    },
}
