//! Boundary traits for the subsystems commands and recognizers drive.
//!
//! Nothing here is implemented by this crate except test doubles: the URL
//! parser, map view, routing engine, positioning, dialogs, search, and the
//! bookmark importer all live with the host application. Commands reach
//! them through an [`ExecutionContext`]; recognizers through
//! [`RecognizerServices`](crate::RecognizerServices).

use std::io;
use std::path::Path;

use crate::error::ImportFailure;
use crate::request::ResourceLocator;
use crate::route::{RoutePoint, RouterType};

/// Classification of a URL by the native parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlType {
    /// Not a URL the parser understands.
    Incorrect,
    /// Bookmark catalogue link.
    Catalogue,
    /// Bookmark catalogue path link.
    CataloguePath,
    /// Subscription link.
    Subscription,
    /// Map position or point link.
    Map,
    /// Route link.
    Route,
    /// Search link.
    Search,
    /// Lead tracking link.
    Lead,
}

/// Result of [`NativeUrlParser::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsingResult {
    /// Detected URL type.
    pub url_type: UrlType,
    /// Whether the parser accepted the URL's payload.
    pub success: bool,
}

impl ParsingResult {
    /// Creates a parsing result.
    #[must_use]
    pub const fn new(url_type: UrlType, success: bool) -> Self {
        Self { url_type, success }
    }
}

/// Routing payload extracted from the last classified route URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRoutingData {
    /// Requested travel mode.
    pub router_type: RouterType,
    /// Route endpoints; a well-formed route carries start and finish.
    pub points: Vec<RoutePoint>,
}

/// Search payload extracted from the last classified search URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSearchRequest {
    /// Viewport latitude, `0.0` when absent.
    pub lat: f64,
    /// Viewport longitude, `0.0` when absent.
    pub lon: f64,
    /// Search query.
    pub query: String,
    /// Query locale.
    pub locale: String,
    /// Whether results should be shown on the map instead of a list.
    pub is_search_on_map: bool,
}

/// Native URL parser.
///
/// `classify` stores the parsed payload; the accessors return the payload of
/// the most recent successful classification.
pub trait NativeUrlParser {
    /// Classifies a URL and stores its payload.
    fn classify(&self, url: &str) -> ParsingResult;

    /// Returns the routing payload of the last route URL.
    fn parsed_routing_data(&self) -> ParsedRoutingData;

    /// Returns the search payload of the last search URL.
    fn parsed_search_request(&self) -> ParsedSearchRequest;
}

/// Route planning entry points.
pub trait RoutingController {
    /// Prepares a route with the controller's current travel mode.
    ///
    /// `from` is `None` when the device position is unknown.
    fn prepare(&self, from: Option<RoutePoint>, to: RoutePoint, from_api: bool);

    /// Prepares a route with an explicit travel mode.
    fn prepare_with_router(
        &self,
        from: Option<RoutePoint>,
        to: RoutePoint,
        router: RouterType,
        from_api: bool,
    );

    /// Selects the travel mode for subsequent preparations.
    fn set_router_type(&self, router: RouterType);

    /// Restores a route that was interrupted.
    fn restore_route(&self);
}

/// The live map view.
pub trait MapContext {
    /// Renders a map locator; returns whether it was understood.
    fn show_map_for_url(&self, url: &str) -> bool;

    /// Shows a country, optionally prompting for its download.
    fn show_country(&self, country_id: &str, auto_download: bool);

    /// Shows every mark of a bookmark category.
    fn show_bookmark_category_on_map(&self, category_id: u64);

    /// Shows one bookmark.
    fn show_bookmark_on_map(&self, bookmark_id: u64);

    /// Shows one track.
    fn show_track_on_map(&self, track_id: u64);

    /// Stops following the device position.
    fn stop_location_follow(&self);

    /// Centres the viewport.
    fn set_viewport_center(&self, lat: f64, lon: f64, zoom: u8);

    /// Sets the viewport used by the search engine.
    fn set_search_viewport(&self, lat: f64, lon: f64, zoom: u8);

    /// Opens the search UI.
    fn open_search(&self, query: &str, locale: &str, search_on_map: bool);
}

/// Positioning subsystem.
pub trait LocationProvider {
    /// Returns the device position, if known.
    fn current_position(&self) -> Option<RoutePoint>;
}

/// Dialog presentation.
pub trait DialogHost {
    /// Returns `true` when a dialog with this identity is displayed.
    fn is_showing(&self, name: &str) -> bool;

    /// Instantiates and displays a dialog.
    fn show(&self, name: &str);
}

/// Interactive search session.
pub trait SearchEngine {
    /// Cancels any in-flight interactive search.
    fn cancel_interactive_search(&self);
}

/// Reads the bytes of an attached document.
pub trait ResourceAccessor: Send + Sync {
    /// Opens a document and returns its content.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the document cannot be read.
    fn open(&self, document: &ResourceLocator) -> io::Result<Vec<u8>>;
}

/// Bookmark file importer run on the import worker.
pub trait BookmarkImporter: Send + Sync {
    /// Imports a document, using `scratch_dir` for intermediate files.
    ///
    /// # Errors
    ///
    /// Returns an [`ImportFailure`] describing why the document was rejected.
    fn import(
        &self,
        accessor: &dyn ResourceAccessor,
        document: &ResourceLocator,
        scratch_dir: &Path,
    ) -> Result<(), ImportFailure>;
}

/// Collaborators a [`Command`](crate::Command) executes against.
#[derive(Clone, Copy)]
pub struct ExecutionContext<'a> {
    /// The live map view.
    pub map: &'a dyn MapContext,
    /// Native URL parser.
    pub parser: &'a dyn NativeUrlParser,
    /// Route planning.
    pub routing: &'a dyn RoutingController,
    /// Device positioning.
    pub location: &'a dyn LocationProvider,
    /// Dialog presentation.
    pub dialogs: &'a dyn DialogHost,
}
