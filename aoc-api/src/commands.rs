//! The fetch, submit and status operations over the artifact cache and the website

use crate::cache::{ArtifactCache, ArtifactKind, PuzzleKey, YearStars};
use crate::config::Config;
use crate::error::CliError;
use aoc_http_client::{AnswerHint, AocClient, SubmissionResult, answers_match, find_solved_answer};
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

/// How a submission was decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A stored answer exists and equals the submitted one
    CachedMatch,
    /// A stored answer exists and differs from the submitted one
    CachedMismatch { cached: String },
    /// Stored without asking the website
    StoredOffline { key: PuzzleKey },
    /// The description page already shows an accepted answer for this part
    PreviouslySolved { matches: bool },
    /// The website accepted the answer
    Correct,
    /// The website rejected the answer
    Incorrect { hint: Option<AnswerHint> },
    /// The website did not check the answer because the part is done
    AlreadyCompleted,
    /// The website did not check the answer because of rate limiting
    Throttled { wait_time: Option<Duration> },
}

impl SubmitOutcome {
    /// Whether the submitted answer counts as correct
    pub fn is_correct(&self) -> bool {
        matches!(
            self,
            SubmitOutcome::CachedMatch
                | SubmitOutcome::StoredOffline { .. }
                | SubmitOutcome::PreviouslySolved { matches: true }
                | SubmitOutcome::Correct
        )
    }
}

/// Star tally for `status`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusReport {
    Year(YearStars),
    AllYears(Vec<YearStars>),
}

/// Runs commands against one artifacts root
pub struct Executor {
    config: Config,
    cache: ArtifactCache,
    client: AocClient,
}

impl Executor {
    /// Create an executor; no request is made until a command needs one
    pub fn new(config: Config, artifacts_root: PathBuf) -> Result<Self, CliError> {
        let mut builder = AocClient::builder();
        if let Some(url) = &config.base_url {
            builder = builder.base_url(url.as_str())?;
        }
        let client = builder.build()?;

        Ok(Self {
            config,
            cache: ArtifactCache::new(artifacts_root),
            client,
        })
    }

    /// Return the puzzle input bytes, downloading and storing them on first use
    pub fn fetch(&self, key: PuzzleKey) -> Result<Vec<u8>, CliError> {
        if let Some(input) = self.cache.get_bytes(key, ArtifactKind::Input)? {
            tracing::debug!(%key, "input served from cache");
            return Ok(input);
        }

        let session = self.config.read_cookie()?;
        let input = self.client.get_input(key.year, key.day, &session)?;
        self.cache.put(key, ArtifactKind::Input, &input)?;
        Ok(input)
    }

    /// Decide whether `answer` is correct, storing it once it is known to be
    ///
    /// Checks, in order: the offline flag, a stored answer, an accepted answer on the
    /// description page, and finally a submission to the website.
    pub fn submit(
        &self,
        year: u16,
        day: u8,
        part: u8,
        answer: &str,
        offline: bool,
    ) -> Result<SubmitOutcome, CliError> {
        let key = PuzzleKey::new(year, day, Some(part));

        if offline {
            if self.cache.contains(key, ArtifactKind::Answer) {
                return Err(CliError::AnswerExists(
                    self.cache.path(key, ArtifactKind::Answer),
                ));
            }
            self.cache.put(key, ArtifactKind::Answer, answer)?;
            return Ok(SubmitOutcome::StoredOffline { key });
        }

        if let Some(cached) = self.cache.get(key, ArtifactKind::Answer)? {
            let cached = cached.trim();
            return Ok(if answers_match(cached, answer) {
                SubmitOutcome::CachedMatch
            } else {
                SubmitOutcome::CachedMismatch {
                    cached: cached.to_string(),
                }
            });
        }

        let session = self.config.read_cookie()?;

        let page = self.client.get_description(year, day, &session)?;
        if let Some(solved) = find_solved_answer(&page, part)? {
            let matches = answers_match(&solved, answer);
            if matches {
                self.cache.put(key, ArtifactKind::Answer, &solved)?;
            }
            return Ok(SubmitOutcome::PreviouslySolved { matches });
        }

        let outcome = match self.client.submit_answer(year, day, part, answer, &session)? {
            SubmissionResult::Correct => {
                self.cache.put(key, ArtifactKind::Answer, answer)?;
                SubmitOutcome::Correct
            }
            SubmissionResult::Incorrect { hint } => SubmitOutcome::Incorrect { hint },
            SubmissionResult::AlreadyCompleted => SubmitOutcome::AlreadyCompleted,
            SubmissionResult::Throttled { wait_time } => SubmitOutcome::Throttled { wait_time },
        };
        Ok(outcome)
    }

    /// Count stored answers for one year or for all of them
    pub fn status(&self, year: Option<u16>) -> Result<StatusReport, CliError> {
        Ok(match year {
            Some(year) => StatusReport::Year(self.cache.year_stars(year)?),
            None => StatusReport::AllYears(self.cache.all_stars()?),
        })
    }
}

/// Take the answer from the argument, or else from `input`
pub fn read_answer(arg: Option<String>, input: &mut impl Read) -> Result<String, CliError> {
    let raw = match arg {
        Some(answer) => answer,
        None => {
            let mut buf = String::new();
            input.read_to_string(&mut buf)?;
            buf
        }
    };
    let answer = raw.trim();
    if answer.is_empty() {
        return Err(CliError::EmptyAnswer);
    }
    Ok(answer.to_string())
}
