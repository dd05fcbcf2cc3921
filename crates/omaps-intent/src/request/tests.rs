//! Unit tests for inbound request decoding.

use rstest::rstest;

use super::*;

#[test]
fn parses_opaque_geo_locator() {
    let locator = DataLocator::parse("geo:37.7,-122.4").expect("geo uri parses");
    assert_eq!(locator.scheme(), Some("geo"));
    assert_eq!(locator.host(), None);
    assert_eq!(locator.path(), None);
    assert_eq!(locator.as_str(), "geo:37.7,-122.4");
}

#[test]
fn parses_hierarchical_locator_with_query() {
    let locator =
        DataLocator::parse("https://www.openstreetmap.org/?mlat=1&mlon=2").expect("parses");
    assert_eq!(locator.host(), Some("www.openstreetmap.org"));
    assert_eq!(locator.query(), Some("mlat=1&mlon=2"));
}

#[test]
fn keeps_raw_text_verbatim() {
    let raw = "om://Search?query=Caf%C3%A9";
    let locator = DataLocator::parse(raw).expect("parses");
    assert_eq!(locator.to_string(), raw);
}

#[rstest]
#[case::encoded_name("https://omaps.app/o4B4pYZsRs/Zoo_Z%C3%BCrich", Some("/o4B4pYZsRs/Zoo_Zürich"))]
#[case::dot_segments("https://ge0.me/a/../b?x=1#top", Some("/a/../b"))]
#[case::bare_authority("https://ge0.me", Some(""))]
#[case::query_only("https://ge0.me?x=1", Some(""))]
#[case::no_authority("file:/tmp/a%20b.kml", Some("/tmp/a b.kml"))]
#[case::opaque("om:Search%20here", None)]
fn path_is_decoded_from_delivered_text(#[case] raw: &str, #[case] expected: Option<&str>) {
    let locator = DataLocator::parse(raw).expect("parses");
    assert_eq!(locator.path(), expected);
}

#[test]
fn keeps_scheme_spelling() {
    let locator = DataLocator::parse("GEO:1,2").expect("parses");
    assert_eq!(locator.scheme(), Some("GEO"));
}

#[test]
fn rejects_relative_locator() {
    let error = DataLocator::parse("/just/a/path").expect_err("relative path should fail");
    assert!(matches!(error, IntentError::InvalidLocator { .. }));
}

#[test]
fn builder_collects_all_parts() {
    let request = InboundRequest::builder()
        .action("android.intent.action.SEND")
        .data_uri("content://downloads/1")
        .expect("data uri")
        .extra("flag", ExtraValue::Bool(true))
        .stream(ResourceLocator::new("content://downloads/1"))
        .build();

    assert_eq!(request.action(), Some("android.intent.action.SEND"));
    assert_eq!(request.scheme(), Some("content"));
    assert_eq!(
        request.stream().map(ResourceLocator::as_str),
        Some("content://downloads/1")
    );
    assert!(request.extras().bool_or("flag", false));
}

#[test]
fn empty_request_has_no_parts() {
    let request = InboundRequest::builder().build();
    assert_eq!(request.action(), None);
    assert_eq!(request.data(), None);
    assert!(request.extras().is_empty());
    assert_eq!(request.stream(), None);
}

#[rstest]
#[case::double(ExtraValue::Double(1.5), 1.5, 0.0)]
#[case::float(ExtraValue::Float(2.5), 0.0, 2.5)]
#[case::text(ExtraValue::Text("3.5".into()), 0.0, 0.0)]
fn numeric_reads_respect_stored_type(
    #[case] value: ExtraValue,
    #[case] expected_double: f64,
    #[case] expected_float: f32,
) {
    let extras: Extras = [("lat", value)].into_iter().collect();
    assert_eq!(extras.double_or("lat", 0.0), expected_double);
    assert_eq!(extras.float_or("lat", 0.0), expected_float);
}

#[test]
fn string_read_of_other_type_is_absent() {
    let extras: Extras = [("country", ExtraValue::Long(7))].into_iter().collect();
    assert!(extras.contains("country"));
    assert_eq!(extras.string("country"), None);
}

#[test]
fn missing_keys_use_defaults() {
    let extras = Extras::new();
    assert!(!extras.bool_or("pick", false));
    assert_eq!(extras.long_or("version", 3), 3);
    assert_eq!(extras.double_or("lat", -1.0), -1.0);
    assert_eq!(extras.string("url"), None);
}

#[test]
fn later_insert_replaces_earlier_value() {
    let mut extras = Extras::new();
    extras.insert("router", ExtraValue::Text("vehicle".into()));
    extras.insert("router", ExtraValue::Text("bicycle".into()));
    assert_eq!(extras.len(), 1);
    assert_eq!(extras.string("router"), Some("bicycle"));
}
