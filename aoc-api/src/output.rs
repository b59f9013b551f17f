//! Output formatting for star tallies and submission verdicts

use crate::cache::{DayStars, YearStars};
use crate::commands::{StatusReport, SubmitOutcome};
use aoc_http_client::AnswerHint;
use console::style;
use std::io::{self, Write};
use std::time::Duration;

/// Render a `status` report
pub fn write_status(out: &mut impl Write, report: &StatusReport) -> io::Result<()> {
    match report {
        StatusReport::Year(year) => write_year_status(out, year),
        StatusReport::AllYears(years) => write_all_status(out, years),
    }
}

/// Render one year's tally, day by day
fn write_year_status(out: &mut impl Write, year: &YearStars) -> io::Result<()> {
    writeln!(out, "AOC status for {}:", year.year)?;
    for day in &year.days {
        writeln!(out, "Day {:0>2}: {}", day.day, style(day_slots(day)).yellow())?;
    }
    writeln!(
        out,
        "Total:  {}",
        style(format!("{} Gold Stars", year.stars())).yellow()
    )
}

/// Render the per-year tally of every stored year
fn write_all_status(out: &mut impl Write, years: &[YearStars]) -> io::Result<()> {
    writeln!(out, "AOC puzzle status for all years:")?;
    for year in years {
        writeln!(
            out,
            "{}:  {}",
            year.year,
            style(format!("{:>2} *", year.stars())).yellow()
        )?;
    }
    let total: usize = years.iter().map(YearStars::stars).sum();
    writeln!(out, "Total: {}", style(format!("{} Gold Stars", total)).yellow())
}

/// `*` for each solved part, a space where part 1 is missing
fn day_slots(day: &DayStars) -> String {
    let mut slots = String::with_capacity(2);
    slots.push(if day.part1 { '*' } else { ' ' });
    if day.part2 {
        slots.push('*');
    }
    slots
}

/// One-line verdict for a submission
pub fn format_outcome(answer: &str, outcome: &SubmitOutcome) -> String {
    match outcome {
        SubmitOutcome::CachedMatch => format!("'{}' is the right answer (cached)!", answer),
        SubmitOutcome::CachedMismatch { cached } => {
            format!("'{}' is not the right answer (cached: {}).", answer, cached)
        }
        SubmitOutcome::StoredOffline { key } => {
            format!("Assuming that '{}' was the right answer for {}.", answer, key)
        }
        SubmitOutcome::PreviouslySolved { matches: true } => {
            format!("'{}' is the right answer.", answer)
        }
        SubmitOutcome::PreviouslySolved { matches: false } => {
            format!("'{}' is not the right answer.", answer)
        }
        SubmitOutcome::Correct => format!("'{}' is the right answer!", answer),
        SubmitOutcome::Incorrect { hint } => match hint {
            Some(AnswerHint::TooHigh) => {
                format!("'{}' is not the right answer (too high).", answer)
            }
            Some(AnswerHint::TooLow) => format!("'{}' is not the right answer (too low).", answer),
            None => format!("'{}' is not the right answer.", answer),
        },
        SubmitOutcome::AlreadyCompleted => format!(
            "'{}' was not checked: the website reports this part as already completed.",
            answer
        ),
        SubmitOutcome::Throttled { wait_time } => match wait_time {
            Some(d) => format!(
                "'{}' was not checked: answered too recently, wait {}.",
                answer,
                format_wait(*d)
            ),
            None => format!("'{}' was not checked: answered too recently.", answer),
        },
    }
}

fn format_wait(d: Duration) -> String {
    let secs = d.as_secs();
    if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}s", secs)
    }
}
