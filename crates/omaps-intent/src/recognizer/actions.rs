//! Recognizers keyed on the action tag or on extras.

use std::sync::Arc;

use tracing::debug;

use super::{Recognizer, decode_coordinate, require};
use crate::api::{ApiRequest, ApiSession};
use crate::collaborators::SearchEngine;
use crate::command::{BuildRoute, Command};
use crate::dispatcher::DISPATCH_TARGET;
use crate::error::IntentError;
use crate::keys::{
    ACTION_API_REQUEST, ACTION_BUILD_ROUTE, ACTION_SHOW_ON_MAP, EXTRA_API_URL, EXTRA_COUNTRY,
    EXTRA_DADDR, EXTRA_LAT, EXTRA_LAT_FROM, EXTRA_LAT_TO, EXTRA_LON, EXTRA_LON_FROM,
    EXTRA_LON_TO, EXTRA_ROUTER, EXTRA_SADDR,
};
use crate::request::{ExtraValue, Extras, InboundRequest};
use crate::route::Coordinates;

/// Third-party API requests.
///
/// Claiming a request cancels any interactive search and records the
/// request as the current API session. In pick-point mode no command is
/// produced; the host waits for the user to choose a point instead.
pub struct ApiRequestAction {
    search: Arc<dyn SearchEngine>,
    session: Arc<dyn ApiSession>,
}

impl ApiRequestAction {
    /// Creates the recognizer.
    #[must_use]
    pub const fn new(search: Arc<dyn SearchEngine>, session: Arc<dyn ApiSession>) -> Self {
        Self { search, session }
    }
}

impl Recognizer for ApiRequestAction {
    fn name(&self) -> &'static str {
        "api_request"
    }

    fn recognize(&self, request: &InboundRequest) -> Result<Option<Command>, IntentError> {
        if request.action() != Some(ACTION_API_REQUEST) {
            return Ok(None);
        }
        let extras = request.extras();
        let url = extras
            .string(EXTRA_API_URL)
            .ok_or_else(|| IntentError::missing_extra(self.name(), EXTRA_API_URL))?;

        self.search.cancel_interactive_search();
        self.session
            .set_current_request(ApiRequest::from_extras(url, extras));

        if self.session.is_pick_point_mode() {
            debug!(target: DISPATCH_TARGET, url, "api request waits for a picked point");
            return Ok(None);
        }
        Ok(Some(Command::OpenUrl {
            url: url.to_owned(),
        }))
    }
}

/// Requests naming a country to show.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountryRequest;

impl Recognizer for CountryRequest {
    fn name(&self) -> &'static str {
        "country_request"
    }

    fn recognize(&self, request: &InboundRequest) -> Result<Option<Command>, IntentError> {
        match request.extras().get(EXTRA_COUNTRY) {
            None => Ok(None),
            Some(ExtraValue::Text(country_id)) => Ok(Some(Command::ShowCountry {
                country_id: country_id.clone(),
            })),
            Some(_) => Err(IntentError::invalid_extra(
                self.name(),
                EXTRA_COUNTRY,
                "a country identifier string",
            )),
        }
    }
}

/// Show-on-map action carrying a single coordinate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowOnMapAction;

impl Recognizer for ShowOnMapAction {
    fn name(&self) -> &'static str {
        "show_on_map"
    }

    fn recognize(&self, request: &InboundRequest) -> Result<Option<Command>, IntentError> {
        if request.action() != Some(ACTION_SHOW_ON_MAP) {
            return Ok(None);
        }
        let extras = request.extras();
        let point = coordinates(self.name(), extras, EXTRA_LAT, EXTRA_LON)?;
        Ok(Some(Command::ShowPoint {
            lat: point.lat,
            lon: point.lon,
        }))
    }
}

/// Build-route action.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildRouteAction;

impl Recognizer for BuildRouteAction {
    fn name(&self) -> &'static str {
        "build_route"
    }

    fn recognize(&self, request: &InboundRequest) -> Result<Option<Command>, IntentError> {
        if request.action() != Some(ACTION_BUILD_ROUTE) {
            return Ok(None);
        }
        let extras = request.extras();
        let to = coordinates(self.name(), extras, EXTRA_LAT_TO, EXTRA_LON_TO)?;
        let router = extras.string(EXTRA_ROUTER).map(str::to_owned);
        let has_from = extras.contains(EXTRA_LAT_FROM) && extras.contains(EXTRA_LON_FROM);

        let route = if has_from {
            let from = coordinates(self.name(), extras, EXTRA_LAT_FROM, EXTRA_LON_FROM)?;
            let between = BuildRoute::between(
                from,
                to,
                extras.string(EXTRA_SADDR).map(str::to_owned),
                extras.string(EXTRA_DADDR).map(str::to_owned),
            );
            match router {
                Some(token) => between.with_router(token),
                None => between,
            }
        } else {
            // Addresses only name explicit endpoints.
            BuildRoute::towards(to, router)
        };
        Ok(Some(Command::BuildRoute(route)))
    }
}

fn coordinates(
    recognizer: &'static str,
    extras: &Extras,
    lat_key: &str,
    lon_key: &str,
) -> Result<Coordinates, IntentError> {
    require(recognizer, extras, lat_key)?;
    require(recognizer, extras, lon_key)?;
    Ok(Coordinates::new(
        decode_coordinate(recognizer, extras, lat_key)?,
        decode_coordinate(recognizer, extras, lon_key)?,
    ))
}
