//! AOC HTTP client implementation

use crate::error::AocError;
use crate::parser::ResponseParser;
use reqwest::header::HeaderValue;
use std::time::Duration;
use zeroize::Zeroize;

/// Hint the website gives alongside a wrong answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerHint {
    /// "your answer is too high"
    TooHigh,
    /// "your answer is too low"
    TooLow,
}

/// Result of an answer submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// Answer was correct
    Correct,
    /// Answer was incorrect
    Incorrect {
        /// Direction hint, when the site gave one
        hint: Option<AnswerHint>,
    },
    /// The part was already completed, so the answer was not checked
    AlreadyCompleted,
    /// Submission was throttled
    Throttled {
        /// Optional wait time before next submission
        wait_time: Option<Duration>,
    },
}

impl SubmissionResult {
    /// Whether the website confirmed the answer
    pub fn is_correct(&self) -> bool {
        matches!(self, SubmissionResult::Correct)
    }
}

/// The main AOC HTTP client
///
/// Issues the description, input and answer requests, each authenticated with the
/// `session` cookie. Nothing is retried; a transport error or a non-success status
/// is returned to the caller.
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::new()?;
/// let session = "your_session_cookie";
///
/// let input = client.get_input(2024, 1, session)?;
/// println!("Input: {} bytes", input.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AocClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
    parser: ResponseParser,
}

impl AocClient {
    /// Create a new AOC client with rustls-tls configuration and no redirect policy
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self, AocError> {
        Self::builder().build()
    }

    /// Create a builder for configuring the AOC client
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aoc_http_client::AocClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AocClient::builder()
    ///     .base_url("http://localhost:1234")?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> AocClientBuilder {
        AocClientBuilder::new()
    }

    /// The base URL every request is resolved against
    pub fn base_url(&self) -> &reqwest::Url {
        &self.base_url
    }

    /// Create a secure cookie header value from a session string
    ///
    /// The header is flagged as sensitive and the temporary string is zeroized.
    fn create_cookie_header(session: &str) -> Result<HeaderValue, AocError> {
        let mut cookie_string = format!("session={}", session);
        let header_value = HeaderValue::from_bytes(cookie_string.as_bytes())
            .map_err(|_| AocError::ClientInit("Invalid session cookie format".to_string()));
        cookie_string.zeroize();

        let mut sensitive_header = header_value?;
        sensitive_header.set_sensitive(true);
        Ok(sensitive_header)
    }

    /// Build `<base>/<year>/day/<day>[/<tail>]`
    fn day_url(&self, year: u16, day: u8, tail: Option<&str>) -> Result<reqwest::Url, AocError> {
        let (year, day) = (year.to_string(), day.to_string());
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| AocError::ClientInit("Cannot modify base URL path".to_string()))?;
            segments.clear().extend([year.as_str(), "day", day.as_str()]);
            if let Some(tail) = tail {
                segments.push(tail);
            }
        }
        Ok(url)
    }

    /// Send a GET and return the raw body of a successful response
    fn get_bytes(&self, url: reqwest::Url, session: &str) -> Result<Vec<u8>, AocError> {
        let cookie_header = Self::create_cookie_header(session)?;
        let response = self
            .client
            .get(url)
            .header("Cookie", cookie_header)
            .send()?;

        if !response.status().is_success() {
            return Err(AocError::InvalidStatus {
                status: response.status(),
            });
        }

        Ok(response.bytes()?.to_vec())
    }

    /// Fetch the puzzle description page for a specific year and day
    ///
    /// The page is returned as raw HTML. When the session belongs to a user who already
    /// solved a part, the page contains that part's accepted answer; see
    /// [`find_solved_answer`](crate::find_solved_answer).
    ///
    /// # Errors
    ///
    /// * `AocError::Request` - Network error
    /// * `AocError::InvalidStatus` - HTTP error (e.g., 404 if puzzle not available)
    /// * `AocError::Encoding` - Response is not valid UTF-8
    pub fn get_description(&self, year: u16, day: u8, session: &str) -> Result<String, AocError> {
        let url = self.day_url(year, day, None)?;
        tracing::info!(%url, "fetching puzzle description");
        String::from_utf8(self.get_bytes(url, session)?).map_err(|_| AocError::Encoding)
    }

    /// Fetch puzzle input for a specific year and day
    ///
    /// Downloads the personalized puzzle input for the given year and day. The body is
    /// returned byte for byte; no text decoding is applied.
    ///
    /// # Errors
    ///
    /// * `AocError::Request` - Network error
    /// * `AocError::InvalidStatus` - HTTP error (e.g., 404 if puzzle not available)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aoc_http_client::AocClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AocClient::new()?;
    /// let input = client.get_input(2024, 1, "your_session_cookie")?;
    /// println!("Input length: {} bytes", input.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_input(&self, year: u16, day: u8, session: &str) -> Result<Vec<u8>, AocError> {
        let url = self.day_url(year, day, Some("input"))?;
        tracing::info!(%url, "fetching puzzle input");
        self.get_bytes(url, session)
    }

    /// Submit an answer for a puzzle part
    ///
    /// Posts `level=<part>&answer=<answer>` and classifies the response page.
    ///
    /// # Errors
    ///
    /// * `AocError::Request` - Network error
    /// * `AocError::InvalidStatus` - HTTP error
    /// * `AocError::Encoding` - Response is not valid UTF-8
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aoc_http_client::{AocClient, SubmissionResult};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AocClient::new()?;
    /// let result = client.submit_answer(2024, 1, 1, "42", "your_session_cookie")?;
    /// if result.is_correct() {
    ///     println!("Correct!");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn submit_answer(
        &self,
        year: u16,
        day: u8,
        part: u8,
        answer: &str,
        session: &str,
    ) -> Result<SubmissionResult, AocError> {
        let cookie_header = Self::create_cookie_header(session)?;
        let url = self.day_url(year, day, Some("answer"))?;
        tracing::info!(%url, answer, "submitting answer");

        let form = [("level", part.to_string()), ("answer", answer.to_string())];

        let response = self
            .client
            .post(url)
            .header("Cookie", cookie_header)
            .form(&form)
            .send()?;

        if !response.status().is_success() {
            return Err(AocError::InvalidStatus {
                status: response.status(),
            });
        }

        let html = response.text().map_err(|_| AocError::Encoding)?;
        let result = self.parser.parse_submission_response(&html);
        tracing::debug!(?result, "classified submission response");
        Ok(result)
    }
}

/// Builder for configuring an AOC HTTP client
///
/// The redirect policy is always forced to `Policy::none()`: the website answers an
/// expired session with a redirect, which must surface as `AocError::InvalidStatus`
/// rather than as the body of the page it points to.
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::builder()
///     .base_url("http://localhost:1234")?
///     .client_builder(
///         reqwest::blocking::Client::builder()
///             .timeout(Duration::from_secs(10))
///     )
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AocClientBuilder {
    base_url: Option<reqwest::Url>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl AocClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            base_url: None,
            client_builder: None,
        }
    }

    /// Set a custom base URL for the client
    ///
    /// Used to point the client at a stub server. The URL is parsed here, so a
    /// malformed value fails before any request is made.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, AocError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Set a custom HTTP client builder (timeouts, proxies, ...)
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Build the AOC client with the configured settings
    pub fn build(self) -> Result<AocClient, AocError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => reqwest::Url::parse("https://adventofcode.com")
                .map_err(|e| AocError::ClientInit(e.to_string()))?,
        };

        let builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::blocking::Client::builder().use_rustls_tls());

        let client = builder
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AocError::ClientInit(e.to_string()))?;

        Ok(AocClient {
            client,
            base_url,
            parser: ResponseParser::new(),
        })
    }
}

impl Default for AocClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
