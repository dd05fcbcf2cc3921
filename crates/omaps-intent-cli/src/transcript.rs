//! Command-line stand-ins for the host application's subsystems.
//!
//! [`TranscriptHost`] records every collaborator call as one line of text so
//! the effect of a command can be inspected without a map. The file accessor
//! and importer back the KMZ/KML path with the local filesystem.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use omaps_intent::{
    BookmarkImporter, DialogHost, ExecutionContext, ImportFailure, ImportHost, LocationProvider,
    MapContext, NativeUrlParser, ParsedRoutingData, ParsedSearchRequest, ParsingResult,
    ResourceAccessor, ResourceLocator, RoutePoint, RouterType, RoutingController, SearchEngine,
    UrlType,
};
use url::Url;

/// Collaborator set that writes a transcript instead of driving a map.
///
/// URL classification always reports an unknown URL, so map links fall back
/// to [`MapContext::show_map_for_url`].
#[derive(Debug, Default)]
pub(crate) struct TranscriptHost {
    position: Option<RoutePoint>,
    lines: Mutex<Vec<String>>,
}

impl TranscriptHost {
    pub(crate) fn with_position(position: Option<RoutePoint>) -> Self {
        Self {
            position,
            lines: Mutex::default(),
        }
    }

    pub(crate) fn context(&self) -> ExecutionContext<'_> {
        ExecutionContext {
            map: self,
            parser: self,
            routing: self,
            location: self,
            dialogs: self,
        }
    }

    pub(crate) fn write_transcript<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let lines = self.lines.lock().unwrap_or_else(PoisonError::into_inner);
        for line in lines.iter() {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    fn record(&self, line: String) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line);
    }
}

fn describe(point: Option<&RoutePoint>) -> String {
    point.map_or_else(
        || "current position unknown".to_owned(),
        |point| format!("{},{}", point.latitude, point.longitude),
    )
}

impl MapContext for TranscriptHost {
    fn show_map_for_url(&self, url: &str) -> bool {
        self.record(format!("map: show url {url}"));
        true
    }

    fn show_country(&self, country_id: &str, auto_download: bool) {
        self.record(format!(
            "map: show country {country_id} (auto download: {auto_download})"
        ));
    }

    fn show_bookmark_category_on_map(&self, category_id: u64) {
        self.record(format!("map: show bookmark category {category_id}"));
    }

    fn show_bookmark_on_map(&self, bookmark_id: u64) {
        self.record(format!("map: show bookmark {bookmark_id}"));
    }

    fn show_track_on_map(&self, track_id: u64) {
        self.record(format!("map: show track {track_id}"));
    }

    fn stop_location_follow(&self) {
        self.record("map: stop location follow".to_owned());
    }

    fn set_viewport_center(&self, lat: f64, lon: f64, zoom: u8) {
        self.record(format!("map: centre {lat},{lon} zoom {zoom}"));
    }

    fn set_search_viewport(&self, lat: f64, lon: f64, zoom: u8) {
        self.record(format!("search: viewport {lat},{lon} zoom {zoom}"));
    }

    fn open_search(&self, query: &str, locale: &str, search_on_map: bool) {
        self.record(format!(
            "search: open '{query}' locale '{locale}' (on map: {search_on_map})"
        ));
    }
}

impl NativeUrlParser for TranscriptHost {
    fn classify(&self, url: &str) -> ParsingResult {
        self.record(format!("parser: classify {url}"));
        ParsingResult::new(UrlType::Incorrect, false)
    }

    fn parsed_routing_data(&self) -> ParsedRoutingData {
        ParsedRoutingData {
            router_type: RouterType::Unspecified,
            points: Vec::new(),
        }
    }

    fn parsed_search_request(&self) -> ParsedSearchRequest {
        ParsedSearchRequest {
            lat: 0.0,
            lon: 0.0,
            query: String::new(),
            locale: String::new(),
            is_search_on_map: false,
        }
    }
}

impl RoutingController for TranscriptHost {
    fn prepare(&self, from: Option<RoutePoint>, to: RoutePoint, from_api: bool) {
        self.record(format!(
            "routing: prepare from {} to {} (api: {from_api})",
            describe(from.as_ref()),
            describe(Some(&to))
        ));
    }

    fn prepare_with_router(
        &self,
        from: Option<RoutePoint>,
        to: RoutePoint,
        router: RouterType,
        from_api: bool,
    ) {
        self.record(format!(
            "routing: prepare {router} from {} to {} (api: {from_api})",
            describe(from.as_ref()),
            describe(Some(&to))
        ));
    }

    fn set_router_type(&self, router: RouterType) {
        self.record(format!("routing: router {router}"));
    }

    fn restore_route(&self) {
        self.record("routing: restore route".to_owned());
    }
}

impl LocationProvider for TranscriptHost {
    fn current_position(&self) -> Option<RoutePoint> {
        self.position.clone()
    }
}

impl DialogHost for TranscriptHost {
    fn is_showing(&self, _name: &str) -> bool {
        false
    }

    fn show(&self, name: &str) {
        self.record(format!("dialog: show {name}"));
    }
}

impl SearchEngine for TranscriptHost {
    fn cancel_interactive_search(&self) {
        self.record("search: cancel interactive search".to_owned());
    }
}

impl ImportHost for TranscriptHost {
    fn show_map(&self) {
        self.record("map: show map".to_owned());
    }
}

/// Reads documents named by `file://` URLs or plain paths.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct FileResourceAccessor;

impl FileResourceAccessor {
    fn path_of(document: &ResourceLocator) -> PathBuf {
        Url::parse(document.as_str())
            .ok()
            .filter(|url| url.scheme() == "file")
            .and_then(|url| url.to_file_path().ok())
            .unwrap_or_else(|| PathBuf::from(document.as_str()))
    }
}

impl ResourceAccessor for FileResourceAccessor {
    fn open(&self, document: &ResourceLocator) -> io::Result<Vec<u8>> {
        fs::read(Self::path_of(document))
    }
}

/// Copies KMZ and KML documents into the scratch directory.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct ScratchCopyImporter;

impl ScratchCopyImporter {
    const EXTENSIONS: [&'static str; 2] = ["kmz", "kml"];

    fn file_name(document: &ResourceLocator) -> Option<String> {
        let path = FileResourceAccessor::path_of(document);
        let name = path.file_name()?.to_str()?.to_owned();
        let extension = Path::new(&name).extension()?.to_str()?.to_ascii_lowercase();
        Self::EXTENSIONS
            .contains(&extension.as_str())
            .then_some(name)
    }
}

impl BookmarkImporter for ScratchCopyImporter {
    fn import(
        &self,
        accessor: &dyn ResourceAccessor,
        document: &ResourceLocator,
        scratch_dir: &Path,
    ) -> Result<(), ImportFailure> {
        let name = Self::file_name(document)
            .ok_or_else(|| ImportFailure::new(document.as_str(), "not a KMZ or KML document"))?;
        let content = accessor
            .open(document)
            .map_err(|error| ImportFailure::new(document.as_str(), error.to_string()))?;
        fs::write(scratch_dir.join(name), content)
            .map_err(|error| ImportFailure::new(document.as_str(), error.to_string()))
    }
}
