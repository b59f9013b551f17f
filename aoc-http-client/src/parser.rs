//! HTML response parsing utilities

use crate::client::{AnswerHint, SubmissionResult};
use crate::error::AocError;
use regex::Regex;
use scraper::{Html, Selector};
use std::cell::OnceCell;
use std::time::Duration;

/// Text that precedes an accepted answer on a puzzle description page
const SOLVED_ANSWER_MARKER: &str = "Your puzzle answer was <code>";
const SOLVED_ANSWER_END: &str = "</code>";

/// Text the answer endpoint returns for a correct submission
const CORRECT_ANSWER_MARKER: &str = "That's the right answer";

/// Find the answer the website already accepted for `part`
///
/// The description page lists accepted answers in order, each after the text
/// `Your puzzle answer was <code>`. The first marker belongs to part 1. Part 2 is
/// looked up with a second scan of whatever follows the first marker, or of the whole
/// page when there is no first marker. This is a plain substring search over the raw
/// markup and breaks if the website changes that sentence.
///
/// # Errors
///
/// Returns `AocError::HtmlParse` when a marker is not followed by `</code>`.
pub fn find_solved_answer(html: &str, part: u8) -> Result<Option<String>, AocError> {
    let mut rest = html;

    let first_solved = match rest.find(SOLVED_ANSWER_MARKER) {
        Some(pos) => {
            rest = &rest[pos + SOLVED_ANSWER_MARKER.len()..];
            true
        }
        None => false,
    };
    if first_solved && part == 1 {
        return answer_before_close(rest).map(Some);
    }

    let second_solved = match rest.find(SOLVED_ANSWER_MARKER) {
        Some(pos) => {
            rest = &rest[pos + SOLVED_ANSWER_MARKER.len()..];
            true
        }
        None => false,
    };
    if second_solved && part == 2 {
        return answer_before_close(rest).map(Some);
    }

    Ok(None)
}

fn answer_before_close(rest: &str) -> Result<String, AocError> {
    rest.find(SOLVED_ANSWER_END)
        .map(|end| rest[..end].to_string())
        .ok_or(AocError::HtmlParse)
}

/// Compare two answers ignoring case
pub fn answers_match(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Parser for AOC HTML responses with cached regex patterns and selectors
#[derive(Clone, Debug)]
pub(crate) struct ResponseParser {
    throttle_regex: OnceCell<Regex>,
    hint_regex: OnceCell<Regex>,
    main_selector: OnceCell<Selector>,
}

impl ResponseParser {
    /// Create a new parser with uninitialized caches
    pub fn new() -> Self {
        Self {
            throttle_regex: OnceCell::new(),
            hint_regex: OnceCell::new(),
            main_selector: OnceCell::new(),
        }
    }

    fn throttle_regex(&self) -> &Regex {
        self.throttle_regex
            .get_or_init(|| Regex::new(r"You have (.+?) left to wait\.").unwrap())
    }

    fn hint_regex(&self) -> &Regex {
        self.hint_regex
            .get_or_init(|| Regex::new(r"your answer is too (high|low)").unwrap())
    }

    fn main_selector(&self) -> &Selector {
        self.main_selector
            .get_or_init(|| Selector::parse("main").unwrap())
    }

    /// Extract text content from the main element of an HTML document
    pub fn extract_main_text(&self, html: &str) -> Result<String, AocError> {
        let document = Html::parse_document(html);
        let selector = self.main_selector();

        let main_element = document
            .select(selector)
            .next()
            .ok_or(AocError::HtmlParse)?;

        Ok(main_element.text().collect::<String>())
    }

    fn extract_throttle_duration(&self, text: &str) -> Option<Duration> {
        let captures = self.throttle_regex().captures(text)?;
        humantime::parse_duration(captures.get(1)?.as_str()).ok()
    }

    fn extract_hint(&self, text: &str) -> Option<AnswerHint> {
        let captures = self.hint_regex().captures(text)?;
        match captures.get(1)?.as_str() {
            "high" => Some(AnswerHint::TooHigh),
            "low" => Some(AnswerHint::TooLow),
            _ => None,
        }
    }

    /// Parse submission response and determine the result
    ///
    /// Only the correctness marker makes a submission `Correct`; a page that matches
    /// nothing is treated as `Incorrect`.
    pub fn parse_submission_response(&self, html: &str) -> SubmissionResult {
        if html.contains(CORRECT_ANSWER_MARKER) {
            return SubmissionResult::Correct;
        }

        let Ok(text) = self.extract_main_text(html) else {
            return SubmissionResult::Incorrect { hint: None };
        };

        if text.contains("gave an answer too recently") {
            let wait_time = self.extract_throttle_duration(&text);
            return SubmissionResult::Throttled { wait_time };
        }

        if text.contains("already complete it") {
            return SubmissionResult::AlreadyCompleted;
        }

        SubmissionResult::Incorrect {
            hint: self.extract_hint(&text),
        }
    }
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self::new()
    }
}
