//! Error types for the CLI runtime.

use std::io;
use std::sync::Arc;

use omaps_intent::IntentError;
use omaps_intent_config::ImportDirError;
use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("{0}")]
    Usage(clap::Error),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    ImportDir(#[from] ImportDirError),
    #[error("request could not be resolved: {0}")]
    Intent(#[from] IntentError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}
