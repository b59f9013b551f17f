//! Diagnostic logging to stderr
//!
//! Progress lines ("fetching input ...") and debug traces go through `tracing`. Command
//! results never do: fetched input is printed to stdout and verdicts to stderr directly.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "warn,aoc=info,aoc_api=info,aoc_http_client=info";
const QUIET_FILTER: &str = "warn";

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise progress is shown at `info`, or hidden with `quiet`.
pub fn init(quiet: bool) {
    let fallback = if quiet { QUIET_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false)
                .compact(),
        )
        .try_init();
}
