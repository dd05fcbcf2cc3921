//! Action tags and extra keys of the inbound delivery boundary.
//!
//! The values are fixed by the host platform and by third-party callers of
//! the map API, so they are matched verbatim.

/// Generic "view this locator" action.
pub const ACTION_VIEW: &str = "android.intent.action.VIEW";
/// Generic "share this document" action.
pub const ACTION_SEND: &str = "android.intent.action.SEND";
/// Extra holding the shared document of [`ACTION_SEND`].
pub const EXTRA_STREAM: &str = "android.intent.extra.STREAM";

/// Third-party map API request.
pub const ACTION_API_REQUEST: &str = "com.mapswithme.maps.api.action.REQUEST";
/// API request URL.
pub const EXTRA_API_URL: &str = "com.mapswithme.maps.api.extra.URL";
/// Title shown while the API request is active.
pub const EXTRA_API_TITLE: &str = "com.mapswithme.maps.api.extra.TITLE";
/// API protocol version of the caller.
pub const EXTRA_API_VERSION: &str = "com.mapswithme.maps.api.extra.API_VERSION";
/// Display name of the calling application.
pub const EXTRA_API_CALLER_APP_INFO: &str = "com.mapswithme.maps.api.extra.CALLER_APP_INFO";
/// Whether tapping a placemark balloon returns to the caller.
pub const EXTRA_API_RETURN_ON_BALLOON_CLICK: &str =
    "com.mapswithme.maps.api.extra.RETURN_ON_BALLOON_CLICK";
/// Whether the caller asks the user to pick a point.
pub const EXTRA_API_PICK_POINT: &str = "com.mapswithme.maps.api.extra.PICK_POINT";
/// Label of the caller's custom return button.
pub const EXTRA_API_CUSTOM_BUTTON_NAME: &str = "com.mapswithme.maps.api.extra.CUSTOM_BUTTON_NAME";

/// Country to show, as a country identifier.
pub const EXTRA_COUNTRY: &str = "country";

/// Show a single coordinate on the map.
pub const ACTION_SHOW_ON_MAP: &str = "com.mapswithme.maps.pro.action.SHOW_ON_MAP";
/// Latitude for [`ACTION_SHOW_ON_MAP`].
pub const EXTRA_LAT: &str = "lat";
/// Longitude for [`ACTION_SHOW_ON_MAP`].
pub const EXTRA_LON: &str = "lon";

/// Build a route between coordinates.
pub const ACTION_BUILD_ROUTE: &str = "com.mapswithme.maps.pro.action.BUILD_ROUTE";
/// Destination latitude.
pub const EXTRA_LAT_TO: &str = "lat_to";
/// Destination longitude.
pub const EXTRA_LON_TO: &str = "lon_to";
/// Start latitude.
pub const EXTRA_LAT_FROM: &str = "lat_from";
/// Start longitude.
pub const EXTRA_LON_FROM: &str = "lon_from";
/// Start address.
pub const EXTRA_SADDR: &str = "saddr";
/// Destination address.
pub const EXTRA_DADDR: &str = "daddr";
/// Travel mode token.
pub const EXTRA_ROUTER: &str = "router";
