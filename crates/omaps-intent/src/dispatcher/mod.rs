//! Ordered evaluation of recognizers.
//!
//! The dispatcher consults its recognizers in order and returns the first
//! command produced. A recognizer that claims a request but finds it
//! malformed stops dispatch; later recognizers are never consulted.

use tracing::{debug, warn};

use crate::command::Command;
use crate::error::IntentError;
use crate::recognizer::{Recognizer, RecognizerServices, standard_chain};
use crate::request::InboundRequest;

/// Tracing target for dispatch decisions.
pub(crate) const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");

/// First-match evaluator over an ordered recognizer list.
pub struct Dispatcher {
    recognizers: Vec<Box<dyn Recognizer>>,
}

impl Dispatcher {
    /// Creates a dispatcher over `recognizers`, highest priority first.
    #[must_use]
    pub const fn new(recognizers: Vec<Box<dyn Recognizer>>) -> Self {
        Self { recognizers }
    }

    /// Creates a dispatcher over the shipped recognizer chain.
    #[must_use]
    pub fn standard(services: RecognizerServices) -> Self {
        Self::new(standard_chain(services))
    }

    /// Returns recognizer names in evaluation order.
    #[must_use]
    pub fn recognizer_names(&self) -> Vec<&'static str> {
        self.recognizers.iter().map(|recognizer| recognizer.name()).collect()
    }

    /// Resolves a request to a command.
    ///
    /// Returns `Ok(None)` when no recognizer produces a command, including
    /// requests that only schedule an import.
    ///
    /// # Errors
    ///
    /// Propagates the first recognizer error unchanged.
    pub fn dispatch(&self, request: &InboundRequest) -> Result<Option<Command>, IntentError> {
        for recognizer in &self.recognizers {
            let outcome = recognizer.recognize(request).inspect_err(|error| {
                warn!(
                    target: DISPATCH_TARGET,
                    recognizer = recognizer.name(),
                    %error,
                    "malformed request"
                );
            })?;
            if let Some(command) = outcome {
                debug!(
                    target: DISPATCH_TARGET,
                    recognizer = recognizer.name(),
                    kind = command.kind(),
                    "request recognized"
                );
                return Ok(Some(command));
            }
        }
        debug!(
            target: DISPATCH_TARGET,
            action = request.action(),
            data = request.data().map(|locator| locator.as_str()),
            extras = request.extras().len(),
            "no command for request"
        );
        Ok(None)
    }
}

#[cfg(test)]
mod tests;
