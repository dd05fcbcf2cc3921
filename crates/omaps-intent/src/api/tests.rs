//! Unit tests for API request extraction and the in-memory session.

use super::*;
use crate::request::ExtraValue;

fn full_extras() -> Extras {
    [
        (EXTRA_API_TITLE, ExtraValue::Text("Pick a cafe".into())),
        (EXTRA_API_CALLER_APP_INFO, ExtraValue::Text("Cafe finder".into())),
        (EXTRA_API_VERSION, ExtraValue::Long(2)),
        (EXTRA_API_PICK_POINT, ExtraValue::Bool(true)),
        (EXTRA_API_RETURN_ON_BALLOON_CLICK, ExtraValue::Bool(true)),
        (EXTRA_API_CUSTOM_BUTTON_NAME, ExtraValue::Text("Back".into())),
    ]
    .into_iter()
    .collect()
}

#[test]
fn extracts_every_field() {
    let request = ApiRequest::from_extras("om://map?ll=1,2", &full_extras());
    assert_eq!(request.url(), "om://map?ll=1,2");
    assert_eq!(request.title(), Some("Pick a cafe"));
    assert_eq!(request.caller_app_name(), Some("Cafe finder"));
    assert_eq!(request.api_version(), 2);
    assert!(request.is_pick_point());
    assert!(request.return_on_balloon_click());
    assert_eq!(request.custom_button_name(), Some("Back"));
}

#[test]
fn absent_fields_take_defaults() {
    let request = ApiRequest::from_extras("om://map?ll=1,2", &Extras::new());
    assert_eq!(request, ApiRequest::new("om://map?ll=1,2"));
    assert!(!request.is_pick_point());
    assert_eq!(request.api_version(), 0);
}

#[test]
fn session_starts_empty() {
    let session = InMemoryApiSession::new();
    assert_eq!(session.current_request(), None);
    assert!(!session.is_pick_point_mode());
}

#[test]
fn session_reports_pick_point_mode_of_latest_request() {
    let session = InMemoryApiSession::new();
    session.set_current_request(ApiRequest::new("om://a").with_pick_point(true));
    assert!(session.is_pick_point_mode());

    session.set_current_request(ApiRequest::new("om://b"));
    assert!(!session.is_pick_point_mode());
    assert_eq!(
        session.current_request().map(|request| request.url().to_owned()),
        Some("om://b".to_owned())
    );
}
