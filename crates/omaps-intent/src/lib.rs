//! Inbound request resolution for the map application.
//!
//! External applications and the platform hand the map "open this" requests:
//! map-native links, web short links, third-party API calls, explicit
//! show-on-map and build-route actions, and shared bookmark files. This crate
//! turns each request into at most one [`Command`] that the host can persist
//! and later execute against the live map.
//!
//! # Architecture
//!
//! An [`InboundRequest`] is evaluated by a [`Dispatcher`] holding an ordered
//! list of [`Recognizer`]s; the first recognizer to produce a command wins.
//! A recognizer that claims a request but finds required parameters missing
//! returns an [`IntentError`] and dispatch stops. Shared KMZ/KML documents
//! are not commands: they are handed to the [`ImportQueue`] worker and the
//! host is notified through [`ImportCompletions::deliver`].
//!
//! Commands reach the host only through the collaborator traits bundled in an
//! [`ExecutionContext`].
//!
//! # Example
//!
//! ```
//! use omaps_intent::{Command, Dispatcher, GeoLink, HttpGeoLink, InboundRequest};
//!
//! let dispatcher = Dispatcher::new(vec![Box::new(GeoLink), Box::new(HttpGeoLink)]);
//! let request = InboundRequest::builder()
//!     .action("android.intent.action.VIEW")
//!     .data_uri("https://ge0.me/abcd")?
//!     .build();
//!
//! let command = dispatcher.dispatch(&request)?;
//! assert_eq!(command, Some(Command::OpenUrl { url: "om://abcd".into() }));
//! # Ok::<(), omaps_intent::IntentError>(())
//! ```

pub mod api;
pub mod collaborators;
pub mod command;
pub mod dispatcher;
pub mod error;
pub mod import;
pub mod keys;
pub mod recognizer;
pub mod request;
pub mod route;

#[cfg(test)]
mod tests;

pub use self::api::{ApiRequest, ApiSession, InMemoryApiSession};
pub use self::collaborators::{
    BookmarkImporter, DialogHost, ExecutionContext, LocationProvider, MapContext,
    NativeUrlParser, ParsedRoutingData, ParsedSearchRequest, ParsingResult, ResourceAccessor,
    RoutingController, SearchEngine, UrlType,
};
pub use self::command::{BuildRoute, Command};
pub use self::dispatcher::Dispatcher;
pub use self::error::{ImportFailure, IntentError};
pub use self::import::{
    ImportCompletion, ImportCompletions, ImportHost, ImportJob, ImportQueue, IMPORTER_PANICKED,
    WORKER_THREAD_NAME,
};
pub use self::recognizer::{
    ApiRequestAction, BuildRouteAction, CountryRequest, GeoLink, HttpGeoLink, HttpMapsLink,
    ImportSettings, KmzKmlImport, Recognizer, RecognizerServices, ShowOnMapAction,
    decode_coordinate, standard_chain,
};
pub use self::request::{
    DataLocator, ExtraValue, Extras, InboundRequest, InboundRequestBuilder, ResourceLocator,
    TypedExtras,
};
pub use self::route::{Coordinates, RoutePoint, RouterType, route_point};
