//! AOC HTTP Client Library
//!
//! This library wraps the three requests the `aoc` tool makes against the Advent of Code
//! website: loading a puzzle's description page, downloading the personal puzzle input,
//! and posting an answer.
//!
//! # Features
//!
//! - Puzzle input fetching for any year and day
//! - Description page fetching, with a scan for answers the site already accepted
//! - Answer submission with the response classified into a [`SubmissionResult`]
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Blocking synchronous API
//! - Well-typed errors using thiserror
//!
//! # Example
//!
//! ```no_run
//! use aoc_http_client::{AocClient, SubmissionResult, find_solved_answer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AocClient::new()?;
//!
//! // Your session cookie from adventofcode.com
//! let session = "your_session_cookie_here";
//!
//! // Fetch puzzle input
//! let input = client.get_input(2024, 1, session)?;
//!
//! // Check whether part 1 was already solved on the website
//! let page = client.get_description(2024, 1, session)?;
//! if let Some(answer) = find_solved_answer(&page, 1)? {
//!     println!("Already solved: {}", answer);
//! }
//!
//! // Submit an answer
//! match client.submit_answer(2024, 1, 2, "42", session)? {
//!     SubmissionResult::Correct => println!("Correct!"),
//!     SubmissionResult::Incorrect { hint } => println!("Incorrect ({:?})", hint),
//!     SubmissionResult::AlreadyCompleted => println!("Already done"),
//!     SubmissionResult::Throttled { wait_time } => {
//!         println!("Throttled: {:?}", wait_time);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod parser;

pub use client::{AocClient, AocClientBuilder, AnswerHint, SubmissionResult};
pub use error::AocError;
pub use parser::{answers_match, find_solved_answer};
