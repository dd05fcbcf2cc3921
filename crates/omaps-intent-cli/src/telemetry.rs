//! Diagnostics for the `omaps-intent` binary.
//!
//! Events go to standard error so that standard output carries nothing but
//! resolved commands and transcripts. Thread names are recorded because
//! bookmark imports log from the import worker rather than the main thread.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use tracing::Subscriber;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

use omaps_intent_config::{Config, LogFormat};

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Reasons the diagnostic subscriber could not be set up.
#[derive(Debug, thiserror::Error)]
pub(crate) enum TelemetryError {
    /// `log_filter` is not a valid filter directive list.
    #[error("invalid log filter '{filter}': {reason}")]
    Filter { filter: String, reason: String },
    /// Something else already owns the global subscriber.
    #[error("diagnostics already configured elsewhere: {0}")]
    Subscriber(#[source] SetGlobalDefaultError),
}

/// Routes diagnostics according to `config`.
///
/// Only the first call in a process has an effect; the in-process test runner
/// invokes the CLI many times.
pub(crate) fn initialise(config: &Config) -> Result<(), TelemetryError> {
    INSTALLED
        .get_or_try_init(|| {
            let subscriber = stderr_subscriber(config.log_format(), filter(config.log_filter())?);
            tracing::subscriber::set_global_default(subscriber).map_err(TelemetryError::Subscriber)
        })
        .map(|_| ())
}

fn filter(directives: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directives).map_err(|error| TelemetryError::Filter {
        filter: directives.to_owned(),
        reason: error.to_string(),
    })
}

fn stderr_subscriber(format: LogFormat, filter: EnvFilter) -> Box<dyn Subscriber + Send + Sync> {
    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_thread_names(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());
    if format.is_structured() {
        Box::new(builder.json().flatten_event(true).finish())
    } else {
        Box::new(builder.compact().finish())
    }
}
