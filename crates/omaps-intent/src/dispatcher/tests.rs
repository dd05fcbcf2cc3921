//! Unit tests for ordered dispatch.

use std::cell::Cell;
use std::rc::Rc;

use rstest::rstest;

use super::*;
use crate::api::ApiSession;
use crate::keys::{
    ACTION_API_REQUEST, ACTION_BUILD_ROUTE, ACTION_SHOW_ON_MAP, EXTRA_API_TITLE, EXTRA_API_URL,
    EXTRA_LAT_TO, EXTRA_LON_TO,
};
use crate::request::ExtraValue;
use crate::tests::standard_services;

/// Recognizer returning a fixed outcome and counting consultations.
struct Scripted {
    name: &'static str,
    outcome: fn() -> Result<Option<Command>, IntentError>,
    calls: Rc<Cell<usize>>,
}

impl Scripted {
    fn boxed(
        name: &'static str,
        outcome: fn() -> Result<Option<Command>, IntentError>,
    ) -> (Box<dyn Recognizer>, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let recognizer = Self {
            name,
            outcome,
            calls: Rc::clone(&calls),
        };
        (Box::new(recognizer), calls)
    }
}

impl Recognizer for Scripted {
    fn name(&self) -> &'static str {
        self.name
    }

    fn recognize(&self, _request: &InboundRequest) -> Result<Option<Command>, IntentError> {
        self.calls.set(self.calls.get() + 1);
        (self.outcome)()
    }
}

fn declines() -> Result<Option<Command>, IntentError> {
    Ok(None)
}

fn restores() -> Result<Option<Command>, IntentError> {
    Ok(Some(Command::RestoreRoute))
}

fn shows_dialog() -> Result<Option<Command>, IntentError> {
    Ok(Some(Command::ShowDialog {
        name: "later".into(),
    }))
}

fn malformed() -> Result<Option<Command>, IntentError> {
    Err(IntentError::missing_extra("scripted", "lat"))
}

#[test]
fn first_match_wins() {
    let (first, first_calls) = Scripted::boxed("first", declines);
    let (second, _) = Scripted::boxed("second", restores);
    let (third, third_calls) = Scripted::boxed("third", shows_dialog);
    let dispatcher = Dispatcher::new(vec![first, second, third]);

    let command = dispatcher
        .dispatch(&InboundRequest::default())
        .expect("no error");

    assert_eq!(command, Some(Command::RestoreRoute));
    assert_eq!(first_calls.get(), 1);
    assert_eq!(third_calls.get(), 0);
}

#[test]
fn malformed_request_aborts_dispatch() {
    let (first, _) = Scripted::boxed("first", malformed);
    let (second, second_calls) = Scripted::boxed("second", restores);
    let dispatcher = Dispatcher::new(vec![first, second]);

    let error = dispatcher
        .dispatch(&InboundRequest::default())
        .expect_err("aborts");

    assert!(error.is_malformed_request());
    assert_eq!(second_calls.get(), 0);
}

#[rstest]
#[case::empty_chain(Vec::new())]
#[case::all_decline(vec![Scripted::boxed("a", declines).0, Scripted::boxed("b", declines).0])]
fn no_match_is_none(#[case] recognizers: Vec<Box<dyn Recognizer>>) {
    let dispatcher = Dispatcher::new(recognizers);
    assert_eq!(
        dispatcher
            .dispatch(&InboundRequest::default())
            .expect("no error"),
        None
    );
}

#[test]
fn reports_names_in_order() {
    let (first, _) = Scripted::boxed("first", declines);
    let (second, _) = Scripted::boxed("second", declines);
    let dispatcher = Dispatcher::new(vec![first, second]);
    assert_eq!(dispatcher.recognizer_names(), ["first", "second"]);
}

#[test]
fn geo_link_outranks_http_maps_link_and_country() {
    let harness = standard_services();
    let dispatcher = Dispatcher::standard(harness.services);
    let request = InboundRequest::builder()
        .data_uri("geo:37.7,-122.4")
        .expect("valid uri")
        .extra("country", ExtraValue::Text("Germany".into()))
        .build();

    assert_eq!(
        dispatcher.dispatch(&request).expect("no error"),
        Some(Command::OpenUrl {
            url: "geo:37.7,-122.4".into()
        })
    );
}

#[test]
fn country_outranks_show_on_map() {
    let harness = standard_services();
    let dispatcher = Dispatcher::standard(harness.services);
    let request = InboundRequest::builder()
        .action(ACTION_SHOW_ON_MAP)
        .extra("country", ExtraValue::Text("Germany".into()))
        .build();

    assert_eq!(
        dispatcher.dispatch(&request).expect("no error"),
        Some(Command::ShowCountry {
            country_id: "Germany".into()
        })
    );
}

#[test]
fn show_on_map_without_coordinates_stops_before_import() {
    let harness = standard_services();
    let dispatcher = Dispatcher::standard(harness.services);
    let request = InboundRequest::builder().action(ACTION_SHOW_ON_MAP).build();

    let error = dispatcher.dispatch(&request).expect_err("aborts");
    assert!(matches!(
        error,
        IntentError::MissingExtra {
            recognizer: "show_on_map",
            ..
        }
    ));
}

#[test]
fn build_route_towards_destination_only() {
    let harness = standard_services();
    let dispatcher = Dispatcher::standard(harness.services);
    let request = InboundRequest::builder()
        .action(ACTION_BUILD_ROUTE)
        .extra(EXTRA_LAT_TO, ExtraValue::Double(3.0))
        .extra(EXTRA_LON_TO, ExtraValue::Double(4.0))
        .build();

    let Some(Command::BuildRoute(route)) = dispatcher.dispatch(&request).expect("no error")
    else {
        panic!("expected a build route command");
    };
    assert_eq!(route.from(), None);
    assert_eq!(route.router(), None);
}

#[test]
fn unrecognized_request_yields_none() {
    let harness = standard_services();
    let dispatcher = Dispatcher::standard(harness.services);
    let request = InboundRequest::builder()
        .action("android.intent.action.MAIN")
        .build();
    assert_eq!(dispatcher.dispatch(&request).expect("no error"), None);
}

#[test]
fn api_request_is_stored_in_the_shared_session() {
    let harness = standard_services();
    let session = harness.session.clone();
    let dispatcher = Dispatcher::standard(harness.services);
    let request = InboundRequest::builder()
        .action(ACTION_API_REQUEST)
        .extra(EXTRA_API_URL, ExtraValue::Text("om://map?ll=1,2".into()))
        .extra(EXTRA_API_TITLE, ExtraValue::Text("Pick a café".into()))
        .build();

    assert_eq!(
        dispatcher.dispatch(&request).expect("no error"),
        Some(Command::OpenUrl {
            url: "om://map?ll=1,2".into()
        })
    );
    let stored = session.current_request().expect("request stored");
    assert_eq!(stored.url(), "om://map?ll=1,2");
    assert_eq!(stored.title(), Some("Pick a café"));
    assert!(!session.is_pick_point_mode());
}
