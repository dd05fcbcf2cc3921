//! Shared collaborator doubles and behavioural tests.


use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use mockall::mock;
use tempfile::TempDir;

use crate::api::{ApiRequest, ApiSession, InMemoryApiSession};
use crate::collaborators::{
    BookmarkImporter, DialogHost, ExecutionContext, LocationProvider, MapContext,
    NativeUrlParser, ParsedRoutingData, ParsedSearchRequest, ParsingResult, ResourceAccessor,
    RoutingController, SearchEngine,
};
use crate::error::ImportFailure;
use crate::import::{ImportCompletions, ImportQueue};
use crate::recognizer::{ImportSettings, RecognizerServices};
use crate::request::{ResourceLocator, TypedExtras};
use crate::route::{RoutePoint, RouterType};

mock! {
    pub Map {}
    impl MapContext for Map {
        fn show_map_for_url(&self, url: &str) -> bool;
        fn show_country(&self, country_id: &str, auto_download: bool);
        fn show_bookmark_category_on_map(&self, category_id: u64);
        fn show_bookmark_on_map(&self, bookmark_id: u64);
        fn show_track_on_map(&self, track_id: u64);
        fn stop_location_follow(&self);
        fn set_viewport_center(&self, lat: f64, lon: f64, zoom: u8);
        fn set_search_viewport(&self, lat: f64, lon: f64, zoom: u8);
        fn open_search(&self, query: &str, locale: &str, search_on_map: bool);
    }
}

mock! {
    pub Parser {}
    impl NativeUrlParser for Parser {
        fn classify(&self, url: &str) -> ParsingResult;
        fn parsed_routing_data(&self) -> ParsedRoutingData;
        fn parsed_search_request(&self) -> ParsedSearchRequest;
    }
}

mock! {
    pub Routing {}
    impl RoutingController for Routing {
        fn prepare(&self, from: Option<RoutePoint>, to: RoutePoint, from_api: bool);
        fn prepare_with_router(
            &self,
            from: Option<RoutePoint>,
            to: RoutePoint,
            router: RouterType,
            from_api: bool,
        );
        fn set_router_type(&self, router: RouterType);
        fn restore_route(&self);
    }
}

mock! {
    pub Location {}
    impl LocationProvider for Location {
        fn current_position(&self) -> Option<RoutePoint>;
    }
}

mock! {
    pub Dialogs {}
    impl DialogHost for Dialogs {
        fn is_showing(&self, name: &str) -> bool;
        fn show(&self, name: &str);
    }
}

mock! {
    pub Search {}
    impl SearchEngine for Search {
        fn cancel_interactive_search(&self);
    }
}

mock! {
    pub Session {}
    impl ApiSession for Session {
        fn set_current_request(&self, request: ApiRequest);
        fn current_request(&self) -> Option<ApiRequest>;
        fn is_pick_point_mode(&self) -> bool;
    }
}

mock! {
    pub Extras {}
    impl TypedExtras for Extras {
        fn double_or(&self, key: &str, default: f64) -> f64;
        fn float_or(&self, key: &str, default: f32) -> f32;
    }
}

/// Strict collaborator set: any call without an expectation fails the test.
#[derive(Default)]
pub(crate) struct MockHost {
    pub(crate) map: MockMap,
    pub(crate) parser: MockParser,
    pub(crate) routing: MockRouting,
    pub(crate) location: MockLocation,
    pub(crate) dialogs: MockDialogs,
}

impl MockHost {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn context(&self) -> ExecutionContext<'_> {
        ExecutionContext {
            map: &self.map,
            parser: &self.parser,
            routing: &self.routing,
            location: &self.location,
            dialogs: &self.dialogs,
        }
    }
}

/// Search engine that accepts any number of cancellations.
pub(crate) fn idle_search() -> MockSearch {
    let mut search = MockSearch::new();
    search.expect_cancel_interactive_search().return_const(());
    search
}

/// Accessor serving every document from memory.
pub(crate) struct InMemoryAccessor {
    pub(crate) content: Vec<u8>,
}

impl ResourceAccessor for InMemoryAccessor {
    fn open(&self, _document: &ResourceLocator) -> io::Result<Vec<u8>> {
        Ok(self.content.clone())
    }
}

/// Importer recording each job and failing documents whose locator ends in
/// `.broken`.
#[derive(Default)]
pub(crate) struct RecordingImporter {
    seen: Mutex<Vec<(String, PathBuf)>>,
}

impl RecordingImporter {
    pub(crate) fn seen(&self) -> Vec<(String, PathBuf)> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl BookmarkImporter for RecordingImporter {
    fn import(
        &self,
        accessor: &dyn ResourceAccessor,
        document: &ResourceLocator,
        scratch_dir: &Path,
    ) -> Result<(), ImportFailure> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((document.as_str().to_owned(), scratch_dir.to_path_buf()));
        accessor
            .open(document)
            .map_err(|error| ImportFailure::new(document.as_str(), error.to_string()))?;
        if document.as_str().ends_with(".broken") {
            return Err(ImportFailure::new(document.as_str(), "not a bookmark file"));
        }
        Ok(())
    }
}

/// Builds an accessor shared with the import worker.
pub(crate) fn shared_accessor() -> Arc<dyn ResourceAccessor> {
    Arc::new(InMemoryAccessor {
        content: b"<kml/>".to_vec(),
    })
}

/// Real session and import queue wired for the standard recognizer chain.
pub(crate) struct StandardServices {
    pub(crate) services: RecognizerServices,
    pub(crate) session: Arc<InMemoryApiSession>,
    pub(crate) importer: Arc<RecordingImporter>,
    pub(crate) completions: ImportCompletions,
    pub(crate) scratch: TempDir,
}

pub(crate) fn standard_services() -> StandardServices {
    let scratch = TempDir::new().expect("scratch dir");
    let importer = Arc::new(RecordingImporter::default());
    let (queue, completions) = ImportQueue::spawn(importer.clone()).expect("spawn worker");
    let session = Arc::new(InMemoryApiSession::new());
    let services = RecognizerServices {
        search: Arc::new(idle_search()),
        session: session.clone(),
        import: ImportSettings {
            queue: Arc::new(queue),
            scratch_dir: scratch.path().to_path_buf(),
            accessor: shared_accessor(),
        },
    };
    StandardServices {
        services,
        session,
        importer,
        completions,
        scratch,
    }
}
