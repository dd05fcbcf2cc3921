//! Shared bookmark files handed to the import worker.

use std::sync::Arc;

use tracing::debug;

use super::{ImportSettings, Recognizer};
use crate::command::Command;
use crate::dispatcher::DISPATCH_TARGET;
use crate::error::IntentError;
use crate::import::ImportJob;
use crate::keys::{ACTION_SEND, ACTION_VIEW, EXTRA_STREAM};
use crate::request::{InboundRequest, ResourceLocator};

/// KMZ/KML documents opened or shared with the application.
///
/// A match schedules an import and yields no command; the recognizing call
/// never waits for the import.
pub struct KmzKmlImport {
    settings: ImportSettings,
}

impl KmzKmlImport {
    /// Creates the recognizer.
    #[must_use]
    pub const fn new(settings: ImportSettings) -> Self {
        Self { settings }
    }
}

impl Recognizer for KmzKmlImport {
    fn name(&self) -> &'static str {
        "kmz_kml_import"
    }

    fn recognize(&self, request: &InboundRequest) -> Result<Option<Command>, IntentError> {
        let document = match request.action() {
            Some(ACTION_VIEW) => request.data().map(ResourceLocator::from),
            Some(ACTION_SEND) => request.stream().cloned().or_else(|| {
                request
                    .extras()
                    .string(EXTRA_STREAM)
                    .map(ResourceLocator::new)
            }),
            _ => None,
        };
        let Some(document) = document else {
            return Ok(None);
        };

        debug!(
            target: DISPATCH_TARGET,
            document = document.as_str(),
            "scheduling bookmark import"
        );
        self.settings.queue.submit(ImportJob::new(
            document,
            self.settings.scratch_dir.clone(),
            Arc::clone(&self.settings.accessor),
        ))?;
        Ok(None)
    }
}
