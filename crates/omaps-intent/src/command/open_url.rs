//! Execution of map API URLs classified by the native parser.

use std::num::FpCategory;

use tracing::debug;

use super::COMMAND_TARGET;
use crate::collaborators::{ExecutionContext, UrlType};

const SEARCH_IN_VIEWPORT_ZOOM: u8 = 16;

pub(super) fn execute(url: &str, context: &ExecutionContext<'_>) -> bool {
    let result = context.parser.classify(url);
    debug!(
        target: COMMAND_TARGET,
        url,
        url_type = ?result.url_type,
        success = result.success,
        "classified url"
    );

    match (result.url_type, result.success) {
        // Unknown schemes may still be plain map locators.
        (UrlType::Incorrect, _) => context.map.show_map_for_url(url),
        (_, false) | (UrlType::Catalogue | UrlType::CataloguePath | UrlType::Subscription, _) => {
            false
        }
        (UrlType::Map, true) => context.map.show_map_for_url(url),
        (UrlType::Route, true) => prepare_route(context),
        (UrlType::Search, true) => open_search(context),
        (UrlType::Lead, true) => true,
    }
}

fn prepare_route(context: &ExecutionContext<'_>) -> bool {
    let data = context.parser.parsed_routing_data();
    let (Some(from), Some(to)) = (data.points.first(), data.points.get(1)) else {
        debug!(
            target: COMMAND_TARGET,
            points = data.points.len(),
            "route url lacks start or finish"
        );
        return false;
    };
    context.routing.set_router_type(data.router_type);
    context
        .routing
        .prepare(Some(from.clone()), to.clone(), true);
    true
}

fn open_search(context: &ExecutionContext<'_>) -> bool {
    let request = context.parser.parsed_search_request();
    if is_non_zero(request.lat) || is_non_zero(request.lon) {
        context.map.stop_location_follow();
        context
            .map
            .set_viewport_center(request.lat, request.lon, SEARCH_IN_VIEWPORT_ZOOM);
        if !request.is_search_on_map {
            context
                .map
                .set_search_viewport(request.lat, request.lon, SEARCH_IN_VIEWPORT_ZOOM);
        }
    }
    context
        .map
        .open_search(&request.query, &request.locale, request.is_search_on_map);
    true
}

fn is_non_zero(value: f64) -> bool {
    value.classify() != FpCategory::Zero
}
