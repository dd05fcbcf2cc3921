//! Recognizers keyed on the data locator.

use tracing::debug;

use super::Recognizer;
use crate::command::Command;
use crate::dispatcher::DISPATCH_TARGET;
use crate::error::IntentError;
use crate::request::InboundRequest;

const MAP_SCHEMES: [&str; 4] = ["geo", "ge0", "om", "mapsme"];
const SHORT_LINK_HOSTS: [&str; 2] = ["omaps.app", "ge0.me"];
const WEB_MAP_HOST_MARKERS: [&str; 3] = ["google", "2gis", "openstreetmap"];

fn is_web_scheme(scheme: &str) -> bool {
    scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
}

/// Map-native locators: `geo:`, `ge0:`, `om:` and `mapsme:`.
///
/// Scheme matching is case-sensitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoLink;

impl Recognizer for GeoLink {
    fn name(&self) -> &'static str {
        "geo_link"
    }

    fn recognize(&self, request: &InboundRequest) -> Result<Option<Command>, IntentError> {
        let Some(locator) = request.data() else {
            return Ok(None);
        };
        if !locator
            .scheme()
            .is_some_and(|scheme| MAP_SCHEMES.contains(&scheme))
        {
            return Ok(None);
        }
        Ok(Some(Command::OpenUrl {
            url: locator.as_str().to_owned(),
        }))
    }
}

/// Web short links on the project's own hosts, rewritten to `om:` links.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpGeoLink;

impl Recognizer for HttpGeoLink {
    fn name(&self) -> &'static str {
        "http_geo_link"
    }

    fn recognize(&self, request: &InboundRequest) -> Result<Option<Command>, IntentError> {
        let Some(locator) = request.data() else {
            return Ok(None);
        };
        if !locator.scheme().is_some_and(is_web_scheme) {
            return Ok(None);
        }
        let Some(host) = locator.host() else {
            return Ok(None);
        };
        if !SHORT_LINK_HOSTS
            .iter()
            .any(|known| host.eq_ignore_ascii_case(known))
        {
            return Ok(None);
        }
        let Some(path) = locator.path() else {
            debug!(target: DISPATCH_TARGET, host, "short link without path");
            return Ok(None);
        };
        // The decoded path keeps its leading slash, so `/abcd` becomes
        // `om://abcd` and a bare host becomes `om:/`.
        Ok(Some(Command::OpenUrl {
            url: format!("om:/{path}"),
        }))
    }
}

/// Links to third-party web maps, rendered as map locators.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpMapsLink;

impl Recognizer for HttpMapsLink {
    fn name(&self) -> &'static str {
        "http_maps_link"
    }

    fn recognize(&self, request: &InboundRequest) -> Result<Option<Command>, IntentError> {
        let Some(locator) = request.data() else {
            return Ok(None);
        };
        if !locator.scheme().is_some_and(is_web_scheme) {
            return Ok(None);
        }
        let Some(host) = locator.host().map(str::to_ascii_lowercase) else {
            return Ok(None);
        };
        if !WEB_MAP_HOST_MARKERS
            .iter()
            .any(|marker| host.contains(marker))
        {
            return Ok(None);
        }
        Ok(Some(Command::OpenHttpMapsUrl {
            url: locator.as_str().to_owned(),
        }))
    }
}
