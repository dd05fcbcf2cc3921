//! Rules mapping request shapes to commands.
//!
//! Each [`Recognizer`] inspects an [`InboundRequest`] and either declines,
//! produces a [`Command`], or reports that it claimed the request but found
//! it malformed. [`standard_chain`] lists the shipped recognizers in
//! priority order.

mod actions;
mod import;
mod links;

use std::cmp::Ordering;
use std::path::PathBuf;
use std::sync::Arc;

use crate::api::ApiSession;
use crate::collaborators::{ResourceAccessor, SearchEngine};
use crate::command::Command;
use crate::error::IntentError;
use crate::import::ImportQueue;
use crate::request::{Extras, InboundRequest, TypedExtras};

pub use self::actions::{ApiRequestAction, BuildRouteAction, CountryRequest, ShowOnMapAction};
pub use self::import::KmzKmlImport;
pub use self::links::{GeoLink, HttpGeoLink, HttpMapsLink};

/// A single request-shape rule.
pub trait Recognizer {
    /// Stable identifier used in logs and errors.
    fn name(&self) -> &'static str;

    /// Inspects a request.
    ///
    /// Returns `Ok(None)` when the request does not have this recognizer's
    /// shape.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError::MissingExtra`] or [`IntentError::InvalidExtra`]
    /// when the request has the recognizer's shape but lacks required
    /// parameters; dispatch stops there.
    fn recognize(&self, request: &InboundRequest) -> Result<Option<Command>, IntentError>;
}

/// Where and how shared bookmark files are imported.
#[derive(Clone)]
pub struct ImportSettings {
    /// Worker queue receiving import jobs.
    pub queue: Arc<ImportQueue>,
    /// Scratch directory handed to the importer.
    pub scratch_dir: PathBuf,
    /// Reader for attached documents.
    pub accessor: Arc<dyn ResourceAccessor>,
}

/// Collaborators the standard recognizers depend on.
#[derive(Clone)]
pub struct RecognizerServices {
    /// Interactive search, cancelled by API requests.
    pub search: Arc<dyn SearchEngine>,
    /// Store for the current API request.
    pub session: Arc<dyn ApiSession>,
    /// Bookmark import settings.
    pub import: ImportSettings,
}

/// Builds the shipped recognizers in priority order.
#[must_use]
pub fn standard_chain(services: RecognizerServices) -> Vec<Box<dyn Recognizer>> {
    let RecognizerServices {
        search,
        session,
        import,
    } = services;
    vec![
        Box::new(GeoLink),
        Box::new(HttpGeoLink),
        Box::new(ApiRequestAction::new(search, session)),
        Box::new(HttpMapsLink),
        Box::new(CountryRequest),
        Box::new(ShowOnMapAction),
        Box::new(BuildRouteAction),
        Box::new(KmzKmlImport::new(import)),
    ]
}

/// Reads a coordinate extra.
///
/// The key is read as a double first; a result equal to `0.0` is re-read as
/// a single-precision float and widened. A stored `0.0` is therefore
/// indistinguishable from a value of another type.
///
/// # Errors
///
/// Returns [`IntentError::InvalidExtra`] when the value is not finite.
pub fn decode_coordinate<E>(
    recognizer: &'static str,
    extras: &E,
    key: &str,
) -> Result<f64, IntentError>
where
    E: TypedExtras + ?Sized,
{
    let mut value = extras.double_or(key, 0.0);
    if value.total_cmp(&0.0) == Ordering::Equal {
        value = f64::from(extras.float_or(key, 0.0));
    }
    if value.is_finite() {
        Ok(value)
    } else {
        Err(IntentError::invalid_extra(
            recognizer,
            key,
            "a finite coordinate",
        ))
    }
}

fn require(recognizer: &'static str, extras: &Extras, key: &str) -> Result<(), IntentError> {
    if extras.contains(key) {
        Ok(())
    } else {
        Err(IntentError::missing_extra(recognizer, key))
    }
}
