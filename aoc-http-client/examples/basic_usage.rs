//! Basic usage example for the AOC HTTP client
//!
//! Requires a session cookie in `AOC_SESSION`. You can copy it from your browser's
//! cookies after logging in to adventofcode.com.
//!
//! ```bash
//! AOC_SESSION=... cargo run -p aoc-http-client --example basic_usage -- 2024 1 1 12345
//! ```

use aoc_http_client::{AnswerHint, AocClient, SubmissionResult, find_solved_answer};
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let session = std::env::var("AOC_SESSION").map_err(|_| "AOC_SESSION is not set")?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [year, day, part, answer] = args.as_slice() else {
        return Err("usage: basic_usage <year> <day> <part> <answer>".into());
    };
    let (year, day, part): (u16, u8, u8) = (year.parse()?, day.parse()?, part.parse()?);

    let client = AocClient::builder()
        .client_builder(
            reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(30))
                .use_rustls_tls(),
        )
        .build()?;
    println!("Using {}", client.base_url());

    let input = client.get_input(year, day, &session)?;
    let lines = input.iter().filter(|&&b| b == b'\n').count();
    println!("Input: {} bytes, {} lines", input.len(), lines);

    let page = client.get_description(year, day, &session)?;
    if let Some(solved) = find_solved_answer(&page, part)? {
        println!("Part {} was already solved with '{}'", part, solved);
        return Ok(());
    }

    match client.submit_answer(year, day, part, answer, &session)? {
        SubmissionResult::Correct => println!("Correct!"),
        SubmissionResult::Incorrect { hint: Some(AnswerHint::TooHigh) } => {
            println!("Incorrect, too high")
        }
        SubmissionResult::Incorrect { hint: Some(AnswerHint::TooLow) } => {
            println!("Incorrect, too low")
        }
        SubmissionResult::Incorrect { hint: None } => println!("Incorrect"),
        SubmissionResult::AlreadyCompleted => println!("Already completed"),
        SubmissionResult::Throttled { wait_time } => match wait_time {
            Some(wait) => println!("Throttled, wait {}", humantime::format_duration(wait)),
            None => println!("Throttled"),
        },
    }

    Ok(())
}
